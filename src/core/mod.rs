pub mod batch;

pub use crate::domain::model::Site;
pub use crate::domain::ports::ProcessingFormat;
pub use crate::utils::error::Result;
