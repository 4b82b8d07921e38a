//! Host-framework adapters.
//!
//! `MetaRequest` mirrors the CGI-style `META` dictionary most Python and PHP
//! frameworks expose for a request; `UserRecord` mirrors a typical auth user.

use crate::domain::ports::{HostRequest, HostUser};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const REMOTE_ADDR: &str = "REMOTE_ADDR";
pub const HTTP_USER_AGENT: &str = "HTTP_USER_AGENT";
pub const HTTP_REFERER: &str = "HTTP_REFERER";
/// Non-standard spelling some adapters emit.
pub const HTTP_REFERRER: &str = "HTTP_REFERRER";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaRequest {
    meta: HashMap<String, String>,
}

impl MetaRequest {
    pub fn new(meta: HashMap<String, String>) -> Self {
        Self { meta }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MetaRequest {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            meta: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl HostRequest for MetaRequest {
    fn remote_addr(&self) -> Option<&str> {
        self.get(REMOTE_ADDR)
    }

    fn user_agent(&self) -> Option<&str> {
        self.get(HTTP_USER_AGENT)
    }

    fn referrer(&self) -> Option<&str> {
        self.get(HTTP_REFERER).or_else(|| self.get(HTTP_REFERRER))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_staff: bool,
}

impl HostUser for UserRecord {
    fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    // 空字串視為沒有 email
    fn email(&self) -> Option<&str> {
        Some(self.email.as_str()).filter(|e| !e.is_empty())
    }

    fn is_staff(&self) -> bool {
        self.is_staff
    }
}
