pub mod engine;
pub mod pipeline;
pub mod rewriter;
pub mod rules;

pub use crate::domain::model::{FileOutcome, RewriteResult, RuleHit, RunSummary, SourceFile};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
