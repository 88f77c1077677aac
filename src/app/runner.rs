use crate::config::{CliArgs, SantaConfig};
use crate::core::engine::{RunSummary, SantaEngine};
use crate::core::{MailTransport, RunMode};
use crate::utils::error::Result;

/// Resolves the run mode, loads and validates the config, then hands a
/// transport built from it to the engine. Nothing is sent unless all of
/// that succeeds.
pub async fn run_cli<T, F>(args: &CliArgs, make_transport: F) -> Result<RunSummary>
where
    T: MailTransport,
    F: FnOnce(&SantaConfig) -> Result<T>,
{
    let mode = args.mode()?;

    tracing::info!("🎅 Starting secret-santa in {:?} mode", mode);
    tracing::info!("📁 Loading configuration from: {}", args.config.display());

    let config = SantaConfig::from_file(&args.config)?;
    config.validate_for(mode)?;

    tracing::info!("✅ Configuration loaded and validated successfully");
    if args.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    display_config_summary(&config, mode);

    let transport = make_transport(&config)?;
    let engine = SantaEngine::new(config, transport);
    let summary = engine.run(mode).await?;

    tracing::info!("✅ Done, {} mail(s) sent", summary.mails_sent);
    Ok(summary)
}

fn display_config_summary(config: &SantaConfig, mode: RunMode) {
    println!("📋 Configuration Summary:");
    println!("  Sender: {}", config.config.mail);
    println!("  Relay: {}:{}", config.smtp_host(), config.smtp_port());
    match mode {
        RunMode::Test => println!("  Mode: healthcheck"),
        RunMode::Send => {
            println!("  Mode: send");
            println!("  Participants: {}", config.participants.len());
        }
    }
    println!();
}
