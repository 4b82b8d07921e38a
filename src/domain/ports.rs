use crate::domain::model::Params;
use chrono::{DateTime, Utc};

/// Anything that can be flattened into service parameters.
pub trait AsParams {
    fn as_params(&self) -> Params;
}

/// Narrow view of an inbound HTTP request provided by a web framework.
pub trait HostRequest {
    fn remote_addr(&self) -> Option<&str>;
    fn user_agent(&self) -> Option<&str>;
    fn referrer(&self) -> Option<&str>;
}

/// Narrow view of an authenticated framework user.
pub trait HostUser {
    /// Display name, computed by the host (e.g. first and last name joined).
    fn full_name(&self) -> String;
    fn email(&self) -> Option<&str>;
    fn is_staff(&self) -> bool;
}

/// Time source used to stamp comments.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
