//! TextBelt SMS notifier.
//!
//! Adapts the TextBelt HTTP API (`https://textbelt.com/text`) to a small
//! notification-plugin contract ([`Notify`]). The crate is layered the usual
//! way: a domain layer of strong types, a transport layer for wire-format
//! details, a client layer issuing requests, and the notifier on top.
//!
//! ```rust,no_run
//! use textbelt::{Notify, NotifyType, TextBeltConfig, TextBeltClient, TextBeltNotifier};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TextBeltConfig::from_url("textbelt://textbelt@15551234567")
//!         .ok_or("not a textbelt url")??;
//!     let notifier = TextBeltNotifier::with_client(config, TextBeltClient::new()?);
//!     let delivered = notifier.send("disk full", "Alert", NotifyType::Warning).await;
//!     println!("delivered: {delivered}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod notifier;
mod transport;

pub use client::{DEFAULT_TIMEOUT, TextBeltClient, TextBeltClientBuilder, TextBeltError};
pub use domain::{
    ApiKey, ConfigurationError, MAX_MESSAGE_CHARS, MessageText, NotifyType, SendText,
    SendTextResponse, Target, Targets,
};
pub use notifier::{
    Notify, NotifierError, ParsedUrl, SCHEME, SERVICE_NAME, SERVICE_URL, TEMPLATES,
    TextBeltConfig, TextBeltNotifier, parse_url,
};
