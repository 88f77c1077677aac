use crate::config::SantaConfig;
use crate::core::{MailTransport, OutgoingMail};
use crate::utils::error::Result;
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// STARTTLS submission with login as the sender.
pub struct SmtpMailer {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    relay: String,
}

impl SmtpMailer {
    pub fn new(host: &str, port: u16, username: &str, password: &str) -> Result<Self> {
        let creds = Credentials::new(username.to_string(), password.to_string());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
            .port(port)
            .credentials(creds)
            .build();

        Ok(Self {
            mailer,
            relay: format!("{}:{}", host, port),
        })
    }

    pub fn from_config(config: &SantaConfig) -> Result<Self> {
        Self::new(
            config.smtp_host(),
            config.smtp_port(),
            &config.config.mail,
            config.password(),
        )
    }

    pub fn relay(&self) -> &str {
        &self.relay
    }
}

pub fn build_message(mail: &OutgoingMail) -> Result<Message> {
    let from: Mailbox = mail.from.parse()?;
    let to: Mailbox = mail.to.parse()?;

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(mail.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(mail.body.clone())?;

    Ok(message)
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<()> {
        let message = build_message(mail)?;

        tracing::debug!("📡 Submitting mail to {} via {}", mail.to, self.relay);
        let response = self.mailer.send(message).await?;
        tracing::debug!("📬 Relay answered {}", response.code());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SantaError;

    fn mail() -> OutgoingMail {
        OutgoingMail {
            from: "santa@example.com".to_string(),
            to: "alice@example.com".to_string(),
            subject: "Secret Santa".to_string(),
            body: "Hi Alice, you got Bob!".to_string(),
        }
    }

    #[test]
    fn test_build_message() {
        let message = build_message(&mail()).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(formatted.contains("From: santa@example.com"));
        assert!(formatted.contains("To: alice@example.com"));
        assert!(formatted.contains("Subject: Secret Santa"));
        assert!(formatted.contains("Hi Alice, you got Bob!"));
    }

    #[test]
    fn test_build_message_rejects_bad_address() {
        let mut bad = mail();
        bad.to = "not an address".to_string();

        let err = build_message(&bad).unwrap_err();
        assert!(matches!(err, SantaError::AddressError(_)));
    }

    #[test]
    fn test_mailer_uses_configured_relay() {
        let mailer = SmtpMailer::new("smtp.example.com", 2525, "santa@example.com", "pw").unwrap();
        assert_eq!(mailer.relay(), "smtp.example.com:2525");
    }
}
