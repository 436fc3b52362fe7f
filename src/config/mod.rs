pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_FILE_NAME: &str = "sample.txt";
pub const DEFAULT_PROMPT: &str = "enter the few sentence to create a text file";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "letter-tally")]
#[command(about = "Write a line of text to a file, then count its vowels, consonants and letter case")]
pub struct CliConfig {
    /// File to write the text to and read it back from
    #[arg(long)]
    pub file: Option<String>,

    /// Use this text instead of prompting on stdin
    #[arg(long, conflicts_with = "count_only")]
    pub text: Option<String>,

    /// Prompt shown before reading the line
    #[arg(long)]
    pub prompt: Option<String>,

    /// Report format: text, json or csv
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Refuse to overwrite an existing file
    #[arg(long)]
    pub no_clobber: bool,

    /// Only classify the existing file, do not prompt or write
    #[arg(long)]
    pub count_only: bool,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON log lines on stderr")]
    pub log_json: bool,
}

/// 合併預設值、TOML 設定與命令列參數後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyConfig {
    pub file_name: String,
    pub prompt: String,
    pub format: OutputFormat,
    pub overwrite: bool,
    pub count_only: bool,
    pub verbose: bool,
    pub log_json: bool,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            format: OutputFormat::Text,
            overwrite: true,
            count_only: false,
            verbose: false,
            log_json: false,
        }
    }
}

impl TallyConfig {
    pub fn apply_toml(&mut self, toml: &TomlConfig) -> Result<()> {
        if let Some(input) = &toml.input {
            if let Some(file_name) = &input.file_name {
                self.file_name = file_name.clone();
            }
            if let Some(prompt) = &input.prompt {
                self.prompt = prompt.clone();
            }
        }
        if let Some(output) = &toml.output {
            if let Some(format) = &output.format {
                self.format = format.parse()?;
            }
            if let Some(overwrite) = output.overwrite {
                self.overwrite = overwrite;
            }
        }
        if let Some(logging) = &toml.logging {
            self.verbose = logging.verbose.unwrap_or(self.verbose);
            self.log_json = logging.json.unwrap_or(self.log_json);
        }
        Ok(())
    }

    #[cfg(feature = "cli")]
    pub fn apply_cli(&mut self, cli: &CliConfig) {
        if let Some(file) = &cli.file {
            self.file_name = file.clone();
        }
        if let Some(prompt) = &cli.prompt {
            self.prompt = prompt.clone();
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if cli.no_clobber {
            self.overwrite = false;
        }
        self.count_only |= cli.count_only;
        self.verbose |= cli.verbose;
        self.log_json |= cli.log_json;
    }

    /// 命令列優先於 TOML，TOML 優先於預設值
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = &cli.config {
            let toml = TomlConfig::from_file(path)?;
            config.apply_toml(&toml)?;
        }
        config.apply_cli(cli);
        Ok(config)
    }
}

impl Validate for TallyConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.file_name", &self.file_name)?;
        if !self.count_only {
            validate_non_empty_string("input.prompt", &self.prompt)?;
        }
        Ok(())
    }
}

impl ConfigProvider for TallyConfig {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn overwrite(&self) -> bool {
        self.overwrite
    }

    fn count_only(&self) -> bool {
        self.count_only
    }
}
