use crate::utils::error::{Result, SantaError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub mail: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, mail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mail: mail.into(),
        }
    }
}

/// One giver/recipient assignment. `giver.name != recipient.name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub giver: Participant,
    pub recipient: Participant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Send one self-addressed mail to check credentials.
    Test,
    /// Draw the pairs and mail every giver.
    Send,
}

impl RunMode {
    pub fn from_flags(test: bool, send: bool) -> Result<Self> {
        match (test, send) {
            (true, false) => Ok(RunMode::Test),
            (false, true) => Ok(RunMode::Send),
            (false, false) => Err(SantaError::config(
                "Either 'test' or 'send' should be selected",
            )),
            (true, true) => Err(SantaError::config(
                "Only one of 'test' or 'send' operations is allowed",
            )),
        }
    }
}
