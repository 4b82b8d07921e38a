use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single parameter value sent to the spam-detection service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Integer(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Integer(n) => Some(*n),
            ParamValue::Text(_) => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Integer(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

/// Flattened, string-keyed parameter mapping. Ordered so encodings are stable.
pub type Params = BTreeMap<String, ParamValue>;

/// 只在值存在時寫入
pub(crate) fn insert_present(params: &mut Params, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        params.insert(key.to_string(), ParamValue::from(v));
    }
}

/// Merges `other` into `base`. Key namespaces of the entities are disjoint, so
/// an overwrite here points at a mapping bug and is reported.
pub(crate) fn merge_params(base: &mut Params, other: Params) {
    for (key, value) in other {
        if let Some(previous) = base.insert(key.clone(), value) {
            tracing::warn!(key = %key, previous = %previous, "parameter overwritten during merge");
        }
    }
}
