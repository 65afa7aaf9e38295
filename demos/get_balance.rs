use std::io;

use smsassistant::{Auth, SmsAssistantClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = required_env("SMSASSISTANT_USER")?;
    let token = required_env("SMSASSISTANT_TOKEN")?;

    let client = SmsAssistantClient::new(Auth::token(username, token)?);
    let balance = client.get_balance().await?;

    println!("balance: {}", balance.value());

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
