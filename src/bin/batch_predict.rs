use anyhow::Context;
use astro_insights::core::ConfigProvider;
use astro_insights::utils::{logger, validation::Validate};
use astro_insights::{BatchConfig, BatchEngine, BatchPipeline, LocalStorage};
use clap::Parser;

#[derive(Parser)]
#[command(name = "batch-predict")]
#[command(about = "Compose readings for every person listed in a TOML batch file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "astro-batch.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the output directory from config
    #[arg(long)]
    output_path: Option<String>,

    /// Dry run - validate entries without writing output
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting batch predictions");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = BatchConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    // 套用命令列覆蓋設定
    if let Some(output_path) = args.output_path {
        tracing::info!("🔧 Output path overridden to: {}", output_path);
        config.output.output_path = output_path;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    let storage = LocalStorage::new(config.output.output_path.clone());
    let dry_run = args.dry_run;
    let pipeline = BatchPipeline::new(storage, config);

    if dry_run {
        use astro_insights::core::Pipeline;

        tracing::info!("🔍 DRY RUN MODE - No output will be written");
        let batch = pipeline.extract().await?;
        println!(
            "✅ {} entries are valid ({} skipped)",
            batch.requests.len(),
            batch.skipped
        );
        return Ok(());
    }

    let engine = BatchEngine::new(pipeline);
    let summary = engine.run().await.context("batch prediction failed")?;

    println!(
        "✅ Composed {} readings ({} skipped)",
        summary.predictions, summary.skipped
    );
    for path in &summary.written {
        println!("📁 Output saved to: {}", path);
    }

    Ok(())
}

fn display_config_summary(config: &BatchConfig) {
    tracing::info!("📋 Batch: {}", config.batch.name);
    if let Some(description) = &config.batch.description {
        tracing::info!("📝 {}", description);
    }
    tracing::info!("👥 People: {}", config.people().len());
    tracing::info!("📦 Formats: {}", config.output_formats().join(", "));
    tracing::info!("📁 Output path: {}", config.output_path());
}
