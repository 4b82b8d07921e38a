use crate::domain::model::Params;
use crate::utils::error::Result;
use url::form_urlencoded;

/// Encodes parameters as an `application/x-www-form-urlencoded` body.
pub fn encode_form(params: &Params) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, &value.to_string());
    }
    serializer.finish()
}

pub fn to_json(params: &Params) -> Result<String> {
    Ok(serde_json::to_string_pretty(params)?)
}
