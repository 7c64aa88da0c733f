use astro_insights::utils::error::ErrorSeverity;
use astro_insights::utils::logger;
use astro_insights::{CliConfig, OutputFormat, PredictionResponse, Predictor};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting astro-insights CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let predictor = Predictor::new();
    let (name, dob) = (config.name.as_str(), config.dob.as_str());
    let response = match predictor.predict_raw(Some(name), Some(dob)) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(
                "❌ Prediction failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            // 依錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 2,
                ErrorSeverity::Medium | ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    };

    let rendered = match config.format {
        OutputFormat::Json => serde_json::to_string(&response)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(&response)?,
        OutputFormat::Text => render_text(&response),
    };
    println!("{}", rendered);

    tracing::info!("✅ Reading for {} ({}) complete", response.name, response.sign);
    Ok(())
}

fn render_text(response: &PredictionResponse) -> String {
    let mut out = format!(
        "{} {} {}\nBorn {}\n",
        response.symbol, response.name, response.sign, response.dob
    );

    let future = [
        &response.future.love,
        &response.future.career,
        &response.future.growth,
    ];
    for block in response.personality.iter().chain(future) {
        out.push_str(&format!("\n{}\n", block.title));
        for bullet in &block.bullets {
            out.push_str(&format!("  • {}\n", bullet));
        }
    }

    out.push_str("\nCompatible signs\n");
    for m in &response.matches {
        out.push_str(&format!("  • {}: {}\n", m.sign, m.reason));
    }

    out.push_str(&format!("\n{}", response.disclaimer));
    out
}
