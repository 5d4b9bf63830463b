#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CheckConfig, Invocation};

pub use crate::core::{check::RedirectCheck, report::Report, resolver::HttpResolver};
pub use crate::domain::model::{CheckRequest, CheckResult};
pub use crate::domain::ports::Resolver;
pub use crate::utils::error::{CheckError, Result};
