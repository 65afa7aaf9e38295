//! Typed Rust client for the sms-assistent.by HTTP API.
//!
//! The crate has three layers: a domain layer of strong types, a transport layer
//! for wire-format details (query parameters, the XML batch document, plain-text
//! numeric replies) and a small client layer orchestrating requests over a
//! pluggable [`HttpTransport`].
//!
//! ```rust,no_run
//! use smsassistant::{
//!     Auth, MessageText, Recipient, SendMessage, SendOptions, SenderName, SmsAssistantClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsassistant::SmsAssistantError> {
//!     let client = SmsAssistantClient::builder(Auth::token("user", "...")?)
//!         .sender(SenderName::new("MyShop")?)
//!         .build()?;
//!
//!     let balance = client.get_balance().await?;
//!     println!("credits left: {}", balance.value());
//!
//!     let request = SendMessage::new(
//!         Recipient::new("375291234567")?,
//!         MessageText::new("hello")?,
//!         SendOptions::default(),
//!     );
//!     let id = client.send_message(request).await?;
//!     println!("message id: {}", id.value());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Auth, BoxError, BoxFuture, HttpResponse, HttpTransport, ReqwestTransport, SmsAssistantClient,
    SmsAssistantClientBuilder, SmsAssistantError,
};
pub use domain::{
    ApiErrorKind, Balance, BatchMessage, BatchResponse, DefaultMessage, ErrorCode, MessageId,
    MessageText, Password, Recipient, SendMessage, SendMessages, SendOptions, SendTime,
    SenderName, Token, Username, ValidationError,
};
