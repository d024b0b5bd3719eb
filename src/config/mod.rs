pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_targets, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_DIR: &str = "src/agents";

pub const DEFAULT_TARGET_FILES: [&str; 4] = [
    "real-geo-visibility-agent.ts",
    "real-citation-agent.ts",
    "real-commerce-agent.ts",
    "advanced-crawl-agent.ts",
];

pub const SUPPORTED_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "cjs"];

pub fn default_target_files() -> Vec<String> {
    DEFAULT_TARGET_FILES.iter().map(|f| f.to_string()).collect()
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fix-agent-structure")]
#[command(about = "Rename legacy agent result fields (resultType/rawValue/normalizedScore/confidenceLevel)")]
pub struct CliConfig {
    /// Directory the target files are resolved against
    #[arg(long, default_value = DEFAULT_BASE_DIR)]
    pub base_dir: String,

    /// Comma-separated list of files to rewrite
    #[arg(long, value_delimiter = ',', default_values_t = default_target_files())]
    pub files: Vec<String>,

    /// Path to a TOML configuration file (overrides --base-dir and --files)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Rewrite in memory only, leave files untouched
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn base_dir(&self) -> &str {
        &self.base_dir
    }

    fn target_files(&self) -> &[String] {
        &self.files
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_targets(
            "base_dir",
            &self.base_dir,
            "files",
            &self.files,
            SUPPORTED_EXTENSIONS,
        )
    }
}
