use crate::domain::model::{FileOutcome, RewriteResult, SourceFile};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
    fn read_text(&self, path: &str) -> impl std::future::Future<Output = Result<String>> + Send;
    fn write_text(
        &self,
        path: &str,
        content: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_dir(&self) -> &str;
    fn target_files(&self) -> &[String];
    fn dry_run(&self) -> bool;
}

/// 單檔處理流程：存在檢查 → 讀取 → 改寫 → 覆寫
#[async_trait]
pub trait Pipeline: Send + Sync {
    fn targets(&self) -> &[String];
    fn is_dry_run(&self) -> bool;
    async fn exists(&self, name: &str) -> bool;
    async fn extract(&self, name: &str) -> Result<SourceFile>;
    async fn transform(&self, source: SourceFile) -> Result<RewriteResult>;
    async fn load(&self, result: RewriteResult) -> Result<FileOutcome>;
}
