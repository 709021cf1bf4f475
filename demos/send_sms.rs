use std::io;

use textbelt::{Notify, NotifyType, TextBeltClient, TextBeltConfig, TextBeltNotifier};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let url = std::env::var("TEXTBELT_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTBELT_URL environment variable is required (textbelt://<apikey>@<phone>)",
        )
    })?;
    let message = std::env::var("TEXTBELT_MESSAGE")
        .unwrap_or_else(|_| "Hello from the textbelt demo.".to_owned());
    let title = std::env::var("TEXTBELT_TITLE").unwrap_or_default();

    let config = TextBeltConfig::from_url(&url).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "not a valid textbelt url")
    })??;
    let notifier = TextBeltNotifier::with_client(config, TextBeltClient::new()?);

    let delivered = notifier.send(&message, &title, NotifyType::Info).await;
    println!("{} -> delivered: {delivered}", notifier.url(true));

    Ok(())
}
