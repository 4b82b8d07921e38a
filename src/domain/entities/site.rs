use crate::domain::model::{insert_present, Params};
use crate::domain::ports::AsParams;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_optional, validate_url, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub url: String,
    #[serde(default)]
    pub language_code: Option<String>,
}

impl Site {
    pub fn new(url: impl Into<String>, language_code: Option<String>) -> Self {
        Self {
            url: url.into(),
            language_code,
        }
    }
}

impl AsParams for Site {
    fn as_params(&self) -> Params {
        let mut params = Params::new();
        insert_present(&mut params, "blog", Some(&self.url));
        insert_present(&mut params, "blog_lang", self.language_code.as_deref());
        params
    }
}

impl Validate for Site {
    fn validate(&self) -> Result<()> {
        validate_url("blog", &self.url)?;
        validate_optional(
            "blog_lang",
            self.language_code.as_deref(),
            validate_non_empty_string,
        )
    }
}
