pub mod check;
pub mod report;
pub mod resolver;

pub use crate::domain::model::{CheckRequest, CheckResult};
pub use crate::domain::ports::Resolver;
pub use crate::utils::error::Result;
