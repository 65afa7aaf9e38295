use std::io;
use std::time::Duration;

use smsassistant::{
    Auth, MessageText, Recipient, SendMessage, SendOptions, SenderName,
    SmsAssistantClient,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = required_env("SMSASSISTANT_USER")?;
    let password = required_env("SMSASSISTANT_PASSWORD")?;
    let sender = required_env("SMSASSISTANT_SENDER")?;
    let phone_raw = required_env("SMSASSISTANT_PHONE")?;
    let message = std::env::var("SMSASSISTANT_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsassistant demo.".to_owned());

    let client = SmsAssistantClient::builder(Auth::password(username, password)?)
        .sender(SenderName::new(sender)?)
        .timeout(Duration::from_secs(30))
        .build()?;

    let recipient = Recipient::parse(Some(phonenumber::country::Id::BY), phone_raw)?;
    let request = SendMessage::new(
        recipient,
        MessageText::new(message)?,
        SendOptions::default(),
    );

    let id = client.send_message(request).await?;
    println!("message id: {}", id.value());

    Ok(())
}

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}
