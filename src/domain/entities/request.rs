//! Inbound request details forwarded to the spam-detection service.

use crate::domain::model::{insert_present, Params};
use crate::domain::ports::{AsParams, HostRequest};
use crate::utils::error::{AntispamError, Result};
use crate::utils::validation::{validate_ip_address, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub ip_address: String,
    pub user_agent: String,
    #[serde(default)]
    pub referrer: Option<String>,
}

impl Request {
    pub fn new(
        ip_address: impl Into<String>,
        user_agent: impl Into<String>,
        referrer: Option<String>,
    ) -> Self {
        Self {
            ip_address: ip_address.into(),
            user_agent: user_agent.into(),
            referrer,
        }
    }

    /// Builds a request from a framework request object.
    ///
    /// The remote address and user agent must be present; a missing referrer
    /// maps to `None`.
    pub fn from_host_request<H: HostRequest + ?Sized>(raw: &H) -> Result<Self> {
        let ip_address = raw
            .remote_addr()
            .ok_or_else(|| AntispamError::missing("REMOTE_ADDR"))?;
        let user_agent = raw
            .user_agent()
            .ok_or_else(|| AntispamError::missing("HTTP_USER_AGENT"))?;

        let request = Self::new(ip_address, user_agent, raw.referrer().map(str::to_string));
        tracing::debug!(
            ip = %request.ip_address,
            has_referrer = request.referrer.is_some(),
            "request extracted from host"
        );
        Ok(request)
    }
}

impl AsParams for Request {
    fn as_params(&self) -> Params {
        let mut params = Params::new();
        insert_present(&mut params, "user_ip", Some(&self.ip_address));
        insert_present(&mut params, "user_agent", Some(&self.user_agent));
        insert_present(&mut params, "referrer", self.referrer.as_deref());
        params
    }
}

impl Validate for Request {
    fn validate(&self) -> Result<()> {
        validate_ip_address("user_ip", &self.ip_address)?;
        validate_non_empty_string("user_agent", &self.user_agent)
    }
}
