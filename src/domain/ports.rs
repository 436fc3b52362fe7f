use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_text(&self, path: &str) -> impl std::future::Future<Output = Result<String>> + Send;
    fn write_text(
        &self,
        path: &str,
        content: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// 只在檔案不存在時建立；已存在則回傳 `FileExistsError`
    fn create_text(
        &self,
        path: &str,
        content: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 提供使用者輸入的一行文字
#[async_trait]
pub trait LineSource: Send + Sync {
    async fn read_line(&self, prompt: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn file_name(&self) -> &str;
    fn prompt(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    fn overwrite(&self) -> bool;
    fn count_only(&self) -> bool;
}
