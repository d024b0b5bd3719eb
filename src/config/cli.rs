use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// 以 base_dir 為根目錄的本機檔案存取
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn exists(&self, path: &str) -> bool {
        // 讀不到 metadata 一律視為不存在
        tokio::fs::try_exists(self.resolve(path))
            .await
            .unwrap_or(false)
    }

    async fn read_text(&self, path: &str) -> Result<String> {
        let content = tokio::fs::read_to_string(self.resolve(path)).await?;
        Ok(normalize_newlines(content))
    }

    async fn write_text(&self, path: &str, content: &str) -> Result<()> {
        tokio::fs::write(self.resolve(path), content).await?;
        Ok(())
    }
}

/// `\r\n` 與單獨的 `\r` 一律轉成 `\n`，寫回時維持一致的換行
fn normalize_newlines(content: String) -> String {
    if content.contains('\r') {
        content.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        content
    }
}
