use crate::domain::model::{insert_present, Params};
use crate::domain::ports::{AsParams, HostUser};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_optional, validate_url, Validate,
};
use serde::{Deserialize, Serialize};

/// Role sent for staff users.
pub const ADMINISTRATOR_ROLE: &str = "administrator";

/// The person who wrote a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            url: None,
            role: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Builds an author from a framework user. The homepage is never known
    /// for such users, staff members get the administrator role.
    pub fn from_host_user<U: HostUser + ?Sized>(raw: &U) -> Self {
        let role = raw.is_staff().then(|| ADMINISTRATOR_ROLE.to_string());

        Self {
            name: raw.full_name(),
            email: raw.email().map(str::to_string),
            url: None,
            role,
        }
    }
}

impl AsParams for Author {
    fn as_params(&self) -> Params {
        let mut params = Params::new();
        insert_present(&mut params, "comment_author", Some(&self.name));
        insert_present(&mut params, "comment_author_email", self.email.as_deref());
        insert_present(&mut params, "comment_author_url", self.url.as_deref());
        insert_present(&mut params, "user_role", self.role.as_deref());
        params
    }
}

impl Validate for Author {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("comment_author", &self.name)?;
        validate_optional("comment_author_email", self.email.as_deref(), validate_email)?;
        validate_optional("comment_author_url", self.url.as_deref(), validate_url)
    }
}
