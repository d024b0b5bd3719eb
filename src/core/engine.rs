use crate::core::{FileOutcome, Pipeline, RunSummary};
use crate::utils::error::Result;
use std::io::{Stdout, Write};

/// 依序處理目標檔，進度訊息寫到 `out`（預設 stdout）
pub struct FixEngine<P: Pipeline, W: Write = Stdout> {
    pipeline: P,
    out: W,
}

impl<P: Pipeline> FixEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::with_output(pipeline, std::io::stdout())
    }
}

impl<P: Pipeline, W: Write> FixEngine<P, W> {
    pub fn with_output(pipeline: P, out: W) -> Self {
        Self { pipeline, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// 依序處理每個目標檔。找不到的檔案只發出警告；
    /// 其他錯誤會直接中止，之前已寫入的檔案不會回復。
    pub async fn run(&mut self) -> Result<RunSummary> {
        let dry_run = self.pipeline.is_dry_run();
        let mut summary = RunSummary {
            outcomes: Vec::with_capacity(self.pipeline.targets().len()),
            dry_run,
        };

        for name in self.pipeline.targets() {
            if !self.pipeline.exists(name).await {
                tracing::debug!("{} not found under base dir, skipping", name);
                writeln!(self.out, "Warning: {} not found", name)?;
                summary.outcomes.push(FileOutcome::Missing { name: name.clone() });
                continue;
            }

            writeln!(self.out, "Fixing {}...", name)?;
            let source = self.pipeline.extract(name).await?;
            let result = self.pipeline.transform(source).await?;
            let outcome = self.pipeline.load(result).await?;

            if let FileOutcome::Fixed {
                substitutions,
                changed,
                written,
                ..
            } = &outcome
            {
                tracing::debug!(
                    "{}: {} substitution(s), changed={}, written={}",
                    name,
                    substitutions,
                    changed,
                    written
                );
                if dry_run {
                    writeln!(
                        self.out,
                        "Checked {} (dry run, {} substitutions)",
                        name, substitutions
                    )?;
                } else {
                    writeln!(self.out, "Fixed {}", name)?;
                }
            }

            summary.outcomes.push(outcome);
        }

        tracing::info!(
            "📊 {} processed, {} changed, {} missing",
            summary.processed_count(),
            summary.changed_count(),
            summary.missing().len()
        );

        if dry_run {
            writeln!(self.out, "\nDry run complete, no files were written.")?;
        } else {
            writeln!(self.out, "\nAll agents updated to new structure!")?;
        }
        self.out.flush()?;

        Ok(summary)
    }
}
