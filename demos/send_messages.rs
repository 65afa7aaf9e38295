use std::io;

use smsassistant::{
    Auth, BatchMessage, DefaultMessage, MessageText, Recipient, SendMessages, SenderName,
    SmsAssistantClient,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = required_env("SMSASSISTANT_USER")?;
    let token = required_env("SMSASSISTANT_TOKEN")?;
    let sender = required_env("SMSASSISTANT_SENDER")?;
    // Comma-separated list of recipients.
    let phones = required_env("SMSASSISTANT_PHONES")?;

    let client = SmsAssistantClient::builder(Auth::token(username, token)?)
        .sender(SenderName::new(sender)?)
        .build()?;

    let messages = phones
        .split(',')
        .map(|phone| Recipient::new(phone).map(BatchMessage::to))
        .collect::<Result<Vec<_>, _>>()?;
    let default = DefaultMessage {
        text: Some(MessageText::new("Hello from the smsassistant demo.")?),
        sender: None,
    };
    let request = SendMessages::new(messages, default, None)?;

    let response = client.send_messages(request).await?;
    println!("status: {}, body: {}", response.status, response.body);

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
