pub mod classifier;
pub mod engine;
pub mod report;

pub use crate::domain::model::{LetterCounts, OutputFormat, TallyReport};
pub use crate::domain::ports::{ConfigProvider, LineSource, Storage};
pub use crate::utils::error::Result;
