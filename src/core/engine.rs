use crate::core::derangement;
use crate::core::template::{pair_substitutions, title_case, MailTemplate};
use crate::core::{MailTransport, OutgoingMail, Pair, RunMode, SettingsProvider};
use crate::utils::error::Result;
use rand::Rng;

pub const HEALTHCHECK_SUBJECT: &str = "Secret Santa Healthcheck";
pub const HEALTHCHECK_BODY: &str = "This is a secret Santa test";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub mode: RunMode,
    pub mails_sent: usize,
}

pub struct SantaEngine<S: SettingsProvider, T: MailTransport> {
    settings: S,
    transport: T,
    template: MailTemplate,
}

impl<S: SettingsProvider, T: MailTransport> SantaEngine<S, T> {
    pub fn new(settings: S, transport: T) -> Self {
        let template = MailTemplate::new(settings.body_template());
        Self {
            settings,
            transport,
            template,
        }
    }

    pub async fn run(&self, mode: RunMode) -> Result<RunSummary> {
        let mails_sent = match mode {
            RunMode::Test => {
                self.healthcheck().await?;
                1
            }
            RunMode::Send => {
                let pairs = self.make_pairs()?;
                self.send_mails(&pairs).await?
            }
        };

        Ok(RunSummary { mode, mails_sent })
    }

    pub async fn healthcheck(&self) -> Result<()> {
        let sender = self.settings.sender();
        let mail = OutgoingMail {
            from: sender.to_string(),
            to: sender.to_string(),
            subject: HEALTHCHECK_SUBJECT.to_string(),
            body: HEALTHCHECK_BODY.to_string(),
        };

        self.transport.send(&mail).await?;

        tracing::info!("✅ Healthcheck message sent to {}", sender);
        println!("Healthcheck message sent to {}", sender);
        Ok(())
    }

    pub fn make_pairs(&self) -> Result<Vec<Pair>> {
        self.make_pairs_with(&mut rand::thread_rng())
    }

    pub fn make_pairs_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Pair>> {
        let participants = self.settings.participants();
        tracing::info!("🎲 Drawing pairs for {} participants", participants.len());
        derangement::make_pairs(participants, self.settings.max_attempts(), rng)
    }

    pub fn render(&self, pair: &Pair) -> OutgoingMail {
        let subject = self.settings.subject();
        let values = pair_substitutions(pair, subject);

        OutgoingMail {
            from: self.settings.sender().to_string(),
            to: pair.giver.mail.clone(),
            subject: subject.to_string(),
            body: self.template.safe_substitute(&values),
        }
    }

    /// Sends one mail per pair, in order, pausing between sends. Stops at the
    /// first transport error; mails already sent stay sent.
    pub async fn send_mails(&self, pairs: &[Pair]) -> Result<usize> {
        let total = pairs.len();
        let interval = self.settings.send_interval();

        for (index, pair) in pairs.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(interval).await;
            }

            let mail = self.render(pair);
            if let Err(e) = self.transport.send(&mail).await {
                tracing::error!(
                    "❌ Sending stopped after {}/{} mails: {}",
                    index,
                    total,
                    e
                );
                return Err(e);
            }

            let name = title_case(&pair.giver.name);
            tracing::info!("📨 Sent mail {}/{} to {}", index + 1, total, name);
            println!("Sent mail {}/{} to {}", index + 1, total, name);
        }

        Ok(total)
    }
}
