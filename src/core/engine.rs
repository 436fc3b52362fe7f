use crate::core::classifier::classify;
use crate::core::{ConfigProvider, LineSource, Storage, TallyReport};
use crate::utils::error::Result;

/// 先寫入檔案，再重新讀取並分類字元
pub struct TallyEngine<S: Storage, L: LineSource, C: ConfigProvider> {
    storage: S,
    source: L,
    config: C,
}

impl<S: Storage, L: LineSource, C: ConfigProvider> TallyEngine<S, L, C> {
    pub fn new(storage: S, source: L, config: C) -> Self {
        Self {
            storage,
            source,
            config,
        }
    }

    pub async fn run(&self) -> Result<TallyReport> {
        let file_name = self.config.file_name();
        tracing::info!("Starting letter tally for {}", file_name);

        if self.config.count_only() {
            tracing::info!("Count-only mode, skipping input capture");
        } else {
            let content = self.capture().await?;
            self.persist(file_name, &content).await?;
        }

        self.count(file_name).await
    }

    async fn capture(&self) -> Result<String> {
        let content = self.source.read_line(self.config.prompt()).await?;
        tracing::debug!("Captured {} characters of input", content.chars().count());
        Ok(content)
    }

    async fn persist(&self, file_name: &str, content: &str) -> Result<()> {
        if self.config.overwrite() {
            self.storage.write_text(file_name, content).await?;
        } else {
            self.storage.create_text(file_name, content).await?;
        }
        tracing::info!("Wrote {} bytes to {}", content.len(), file_name);
        Ok(())
    }

    async fn count(&self, file_name: &str) -> Result<TallyReport> {
        let text = self.storage.read_text(file_name).await?;
        let counts = classify(&text);
        tracing::info!(
            "Classified {} letters ({} vowels, {} consonants)",
            counts.letters(),
            counts.vowels,
            counts.consonants
        );
        Ok(TallyReport::new(file_name, text.chars().count(), counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::OutputFormat;
    use crate::utils::error::TallyError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStorage {
        files: Mutex<HashMap<String, String>>,
    }

    impl Storage for MemoryStorage {
        async fn read_text(&self, path: &str) -> Result<String> {
            self.files
                .lock()
                .unwrap()
                .get(path)
                .cloned()
                .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound).into())
        }

        async fn write_text(&self, path: &str, content: &str) -> Result<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_string(), content.to_string());
            Ok(())
        }

        async fn create_text(&self, path: &str, content: &str) -> Result<()> {
            let mut files = self.files.lock().unwrap();
            if files.contains_key(path) {
                return Err(TallyError::FileExistsError {
                    path: path.to_string(),
                });
            }
            files.insert(path.to_string(), content.to_string());
            Ok(())
        }
    }

    struct Line(&'static str);

    #[async_trait]
    impl LineSource for Line {
        async fn read_line(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct TestConfig {
        overwrite: bool,
        count_only: bool,
    }

    impl ConfigProvider for TestConfig {
        fn file_name(&self) -> &str {
            "sample.txt"
        }
        fn prompt(&self) -> &str {
            "> "
        }
        fn output_format(&self) -> OutputFormat {
            OutputFormat::Text
        }
        fn overwrite(&self) -> bool {
            self.overwrite
        }
        fn count_only(&self) -> bool {
            self.count_only
        }
    }

    fn config(overwrite: bool, count_only: bool) -> TestConfig {
        TestConfig {
            overwrite,
            count_only,
        }
    }

    #[test]
    fn test_run_writes_then_counts() {
        let engine = TallyEngine::new(MemoryStorage::default(), Line("Hello World"), config(true, false));
        let report = tokio_test::block_on(engine.run()).unwrap();

        assert_eq!(report.counts.vowels, 3);
        assert_eq!(report.counts.consonants, 7);
        assert_eq!(report.characters, 11);
        assert_eq!(
            engine.storage.files.lock().unwrap().get("sample.txt").map(String::as_str),
            Some("Hello World")
        );
    }

    #[test]
    fn test_no_clobber_refuses_existing_file() {
        let storage = MemoryStorage::default();
        storage
            .files
            .lock()
            .unwrap()
            .insert("sample.txt".to_string(), "keep me".to_string());

        let engine = TallyEngine::new(storage, Line("AEIOU"), config(false, false));
        let err = tokio_test::block_on(engine.run()).unwrap_err();

        assert!(matches!(err, TallyError::FileExistsError { .. }));
        assert_eq!(
            engine.storage.files.lock().unwrap().get("sample.txt").map(String::as_str),
            Some("keep me")
        );
    }

    #[test]
    fn test_count_only_reads_existing_file() {
        let storage = MemoryStorage::default();
        storage
            .files
            .lock()
            .unwrap()
            .insert("sample.txt".to_string(), "AEIOU".to_string());

        let engine = TallyEngine::new(storage, Line("ignored"), config(true, true));
        let report = tokio_test::block_on(engine.run()).unwrap();
        assert_eq!(report.counts.uppercase, 5);
        assert_eq!(report.counts.lowercase, 0);
    }

    #[test]
    fn test_count_only_missing_file_is_io_error() {
        let engine = TallyEngine::new(MemoryStorage::default(), Line(""), config(true, true));
        let err = tokio_test::block_on(engine.run()).unwrap_err();
        assert!(matches!(err, TallyError::IoError(_)));
    }
}
