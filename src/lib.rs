pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliArgs;

pub use crate::adapters::SmtpMailer;
pub use crate::config::SantaConfig;
pub use crate::core::engine::{RunSummary, SantaEngine};
pub use crate::domain::model::{OutgoingMail, Pair, Participant, RunMode};
pub use crate::domain::ports::{MailTransport, SettingsProvider};
pub use crate::utils::error::{Result, SantaError};
