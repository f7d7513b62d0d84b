pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::CheckConfig;
pub use crate::core::batch::{check_document, check_document_str, BatchSummary, SiteReport};
pub use crate::domain::model::Site;
pub use crate::domain::ports::ProcessingFormat;
pub use crate::utils::error::{FormatError, Result};
pub use crate::utils::validation::Validate;
