pub mod derangement;
pub mod engine;
pub mod template;

pub use crate::domain::model::{OutgoingMail, Pair, Participant, RunMode};
pub use crate::domain::ports::{MailTransport, SettingsProvider};
pub use crate::utils::error::Result;
