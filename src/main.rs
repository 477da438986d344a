use clap::Parser;
use lucky_draw::core::report::render_text;
use lucky_draw::utils::logger::{self, LogFormat};
use lucky_draw::{CliConfig, DrawEngine, DrawPipeline, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(LogFormat::from_json_flag(cli.log_json), cli.verbose);

    tracing::info!("Starting lucky-draw");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 合併 TOML 與命令列參數並驗證
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    tracing::info!(
        "Seed: {}, A={}, B={}, C={}, source: {}",
        settings.draw.seed,
        settings.draw.a,
        settings.draw.b,
        settings.draw.c,
        settings.input_path
    );

    let pipeline = DrawPipeline::new(LocalStorage::current_dir(), settings);
    let engine = DrawEngine::new(pipeline);

    let run = if cli.dry_run {
        engine.dry_run().await.map(|count| {
            println!("✅ Dry run passed: {} participants, bounds are valid", count);
            None
        })
    } else {
        engine.run().await.map(Some)
    };

    match run {
        Ok(Some(summary)) => {
            print!("{}", render_text(&summary.outcome.result));
            if let Some(path) = summary.output_path {
                println!();
                println!("📁 Result exported to: {}", path);
            }
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!(
                "❌ Draw failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
