use crate::utils::error::{Result, TallyError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 一次執行內的四個字母計數器
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LetterCounts {
    pub vowels: usize,
    pub consonants: usize,
    pub uppercase: usize,
    pub lowercase: usize,
}

impl LetterCounts {
    pub fn new(vowels: usize, consonants: usize, uppercase: usize, lowercase: usize) -> Self {
        Self {
            vowels,
            consonants,
            uppercase,
            lowercase,
        }
    }

    /// Number of alphabetic characters seen.
    pub fn letters(&self) -> usize {
        self.vowels + self.consonants
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const VALUES: [&'static str; 3] = ["text", "json", "csv"];
}

impl FromStr for OutputFormat {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(TallyError::ConfigError {
                message: format!(
                    "Unsupported output format '{}'. Valid formats: {}",
                    other,
                    Self::VALUES.join(", ")
                ),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TallyReport {
    pub file: String,
    pub characters: usize,
    #[serde(flatten)]
    pub counts: LetterCounts,
    pub generated_at: DateTime<Utc>,
}

impl TallyReport {
    pub fn new(file: impl Into<String>, characters: usize, counts: LetterCounts) -> Self {
        Self {
            file: file.into(),
            characters,
            counts,
            generated_at: Utc::now(),
        }
    }
}
