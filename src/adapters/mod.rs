// Adapters layer: concrete implementations of the domain ports.

pub mod smtp;

pub use smtp::SmtpMailer;
