//! Parameter mapping for the Akismet spam-detection service.
//!
//! Entities (`Request`, `Author`, `Site`, `Comment`) flatten themselves into
//! string-keyed [`Params`] through [`AsParams`]. Framework objects are adapted
//! through the [`HostRequest`] and [`HostUser`] ports.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::clock::{FixedClock, SystemClock};
pub use adapters::host::{MetaRequest, UserRecord};
pub use core::render::{render, OutputFormat};
pub use core::submission::Submission;
pub use domain::entities::{Author, Comment, CommentBuilder, Request, Site};
pub use domain::model::{ParamValue, Params};
pub use domain::ports::{AsParams, Clock, HostRequest, HostUser};
pub use utils::error::{AntispamError, Result};
