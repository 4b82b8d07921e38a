pub mod form;
pub mod render;
pub mod submission;

pub use crate::domain::model::{ParamValue, Params};
pub use crate::domain::ports::{AsParams, Clock, HostRequest, HostUser};
pub use crate::utils::error::Result;
