use clap::Parser;
use fix_agent_structure::core::ConfigProvider;
use fix_agent_structure::utils::{logger, validation::Validate};
use fix_agent_structure::{
    CliConfig, FilePipeline, FixEngine, FixError, LocalStorage, RunSummary, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("🚀 Starting fix-agent-structure");
    tracing::debug!("CLI config: {:?}", cli);

    let outcome = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}'", path);
                    fail(e);
                }
            };

            // 應用命令列覆蓋設定
            if cli.dry_run {
                config.force_dry_run();
                tracing::info!("🔧 Dry run overridden from command line");
            }

            execute(config).await
        }
        None => execute(cli).await,
    };

    match outcome {
        Ok(summary) => {
            tracing::info!(
                "✅ Done: {} file(s) processed, {} missing",
                summary.processed_count(),
                summary.missing().len()
            );
        }
        Err(e) => fail(e),
    }

    Ok(())
}

fn fail(e: FixError) -> ! {
    tracing::error!(
        "❌ Rewrite failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

async fn execute<C>(config: C) -> Result<RunSummary, FixError>
where
    C: ConfigProvider + Validate,
{
    // 驗證配置
    config.validate()?;

    tracing::info!(
        "🎯 {} target file(s) under {}{}",
        config.target_files().len(),
        config.base_dir(),
        if config.dry_run() { " (dry run)" } else { "" }
    );

    let storage = LocalStorage::new(config.base_dir().to_string());
    let pipeline = FilePipeline::new(storage, config)?;

    FixEngine::new(pipeline).run().await
}
