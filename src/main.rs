use anyhow::Context;
use clap::Parser;
use ec2_model::utils::error::ErrorCategory;
use ec2_model::utils::{logger, validation::Validate};
use ec2_model::CliConfig;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = ec2_model::app::execute(&config.command, &mut out) {
        tracing::error!("Command failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e);

        let exit_code = match e.category() {
            ErrorCategory::InvalidArgument => 2,
            ErrorCategory::Input => 1,
            ErrorCategory::System => 3,
        };
        std::process::exit(exit_code);
    }

    out.flush().context("failed to flush stdout")?;
    Ok(())
}
