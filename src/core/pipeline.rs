use crate::core::rewriter::TextRewriter;
use crate::core::{ConfigProvider, FileOutcome, Pipeline, RewriteResult, SourceFile, Storage};
use crate::utils::error::Result;

pub struct FilePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    rewriter: TextRewriter,
}

impl<S: Storage, C: ConfigProvider> FilePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        Ok(Self::with_rewriter(storage, config, TextRewriter::new()?))
    }

    pub fn with_rewriter(storage: S, config: C, rewriter: TextRewriter) -> Self {
        Self {
            storage,
            config,
            rewriter,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FilePipeline<S, C> {
    fn targets(&self) -> &[String] {
        self.config.target_files()
    }

    fn is_dry_run(&self) -> bool {
        self.config.dry_run()
    }

    async fn exists(&self, name: &str) -> bool {
        self.storage.exists(name).await
    }

    async fn extract(&self, name: &str) -> Result<SourceFile> {
        tracing::debug!("Reading {} from {}", name, self.config.base_dir());
        let content = self.storage.read_text(name).await?;

        Ok(SourceFile {
            name: name.to_string(),
            content,
        })
    }

    async fn transform(&self, source: SourceFile) -> Result<RewriteResult> {
        let (content, hits) = self.rewriter.rewrite(&source.content);
        let changed = content != source.content;

        for hit in hits.iter().filter(|hit| hit.count > 0) {
            tracing::debug!("{}: {} x{}", source.name, hit.rule, hit.count);
        }

        Ok(RewriteResult {
            name: source.name,
            content,
            hits,
            changed,
        })
    }

    async fn load(&self, result: RewriteResult) -> Result<FileOutcome> {
        let substitutions = result.substitutions();

        // 沒有命中也照樣寫回
        let written = if self.config.dry_run() {
            tracing::debug!("Dry run, skipping write of {}", result.name);
            false
        } else {
            self.storage.write_text(&result.name, &result.content).await?;
            true
        };

        Ok(FileOutcome::Fixed {
            name: result.name,
            substitutions,
            changed: result.changed,
            written,
        })
    }
}
