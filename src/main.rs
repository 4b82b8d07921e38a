use antispam::utils::{logger, validation::Validate};
use antispam::{render, CliConfig, SystemClock};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting antispam CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let outcome = config.load_defaults().and_then(|defaults| {
        defaults.validate()?;
        let submission = config.to_submission(&defaults, &SystemClock)?;
        submission.validate()?;
        render(&submission, config.format)
    });

    match outcome {
        Ok(output) => {
            tracing::info!("✅ Parameters built");
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Failed to build parameters: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}
