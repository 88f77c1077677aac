use clap::Parser;
use secret_santa::app::run_cli;
use secret_santa::utils::logger;
use secret_santa::{CliArgs, SmtpMailer};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    if let Err(e) = run_cli(&args, SmtpMailer::from_config).await {
        tracing::error!(
            "❌ Secret Santa run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}
