pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{FixedLine, LocalStorage, StdinSource};
pub use config::TallyConfig;
pub use core::{classifier::classify, engine::TallyEngine, LetterCounts, OutputFormat, TallyReport};
pub use utils::error::{Result, TallyError};
