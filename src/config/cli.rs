use crate::core::{LineSource, Storage};
use crate::utils::error::{Result, TallyError};
use async_trait::async_trait;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_text(&self, path: &str) -> Result<String> {
        let data = fs::read(self.full_path(path))?;
        String::from_utf8(data).map_err(|_| TallyError::EncodingError {
            path: path.to_string(),
        })
    }

    async fn write_text(&self, path: &str, content: &str) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, content.as_bytes())?;
        Ok(())
    }

    async fn create_text(&self, path: &str, content: &str) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // create_new 讓「存在檢查」與建立成為同一個原子操作
        let mut file = match OpenOptions::new().write(true).create_new(true).open(full_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(TallyError::FileExistsError {
                    path: path.to_string(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

/// 去掉行尾的 `\n` 或 `\r\n`，其餘內容保持不變
pub fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Prompts on stdout and reads one line from stdin.
#[derive(Debug, Clone, Default)]
pub struct StdinSource;

#[async_trait]
impl LineSource for StdinSource {
    async fn read_line(&self, prompt: &str) -> Result<String> {
        read_prompted_line(std::io::stdin().lock(), std::io::stdout(), prompt)
    }
}

/// 寫出提示（不換行）後讀取一行；EOF 或非 UTF-8 輸入視為 `InputError`
pub fn read_prompted_line<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    prompt: &str,
) -> Result<String> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    let read = match reader.read_line(&mut line) {
        Ok(read) => read,
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return Err(TallyError::InputError {
                message: "input is not valid UTF-8 text".to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };
    if read == 0 {
        return Err(TallyError::InputError {
            message: "stdin closed before a line was entered".to_string(),
        });
    }

    Ok(trim_line_ending(&line).to_string())
}

/// Text supplied up front (`--text`), no prompt is shown.
#[derive(Debug, Clone)]
pub struct FixedLine {
    text: String,
}

impl FixedLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl LineSource for FixedLine {
    async fn read_line(&self, _prompt: &str) -> Result<String> {
        Ok(self.text.clone())
    }
}
