use crate::core::RunMode;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "secret-santa")]
#[command(about = "Draw Secret Santa pairs and mail every giver their recipient")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: PathBuf,

    /// Perform a healthcheck on the mail connection
    #[arg(short, long)]
    pub test: bool,

    /// Draw the pairs and send the mails
    #[arg(short, long)]
    pub send: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn mode(&self) -> Result<RunMode> {
        RunMode::from_flags(self.test, self.send)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_send() {
        let args = CliArgs::try_parse_from(["secret-santa", "--config", "santa.toml", "--send"])
            .unwrap();
        assert_eq!(args.config, PathBuf::from("santa.toml"));
        assert_eq!(args.mode().unwrap(), RunMode::Send);
    }

    #[test]
    fn test_parse_short_flags() {
        let args = CliArgs::try_parse_from(["secret-santa", "-c", "santa.toml", "-t", "-v"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.mode().unwrap(), RunMode::Test);
    }

    #[test]
    fn test_config_is_required() {
        assert!(CliArgs::try_parse_from(["secret-santa", "--send"]).is_err());
    }

    #[test]
    fn test_invalid_mode_combinations() {
        let neither = CliArgs::try_parse_from(["secret-santa", "-c", "santa.toml"]).unwrap();
        assert!(neither.mode().unwrap_err().is_config_error());

        let both = CliArgs::try_parse_from(["secret-santa", "-c", "santa.toml", "-t", "-s"]).unwrap();
        assert!(both.mode().unwrap_err().is_config_error());
    }
}
