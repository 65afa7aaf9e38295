use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, Recipient, SendTime, SenderName};

#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// Overrides the client's default sender for this message.
    pub sender: Option<SenderName>,
    /// Delays delivery until the given time.
    pub send_time: Option<SendTime>,
}

#[derive(Debug, Clone)]
pub struct SendMessage {
    recipient: Recipient,
    text: MessageText,
    options: SendOptions,
}

impl SendMessage {
    pub fn new(recipient: Recipient, text: MessageText, options: SendOptions) -> Self {
        Self {
            recipient,
            text,
            options,
        }
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

/// One `<msg>` entry of a batch. Missing fields fall back to the batch default.
#[derive(Debug, Clone)]
pub struct BatchMessage {
    pub recipient: Recipient,
    pub text: Option<MessageText>,
    pub sender: Option<SenderName>,
}

impl BatchMessage {
    pub fn to(recipient: Recipient) -> Self {
        Self {
            recipient,
            text: None,
            sender: None,
        }
    }

    pub fn text(mut self, text: MessageText) -> Self {
        self.text = Some(text);
        self
    }

    pub fn sender(mut self, sender: SenderName) -> Self {
        self.sender = Some(sender);
        self
    }
}

/// The `<default>` entry of a batch: text and sender shared by every message.
#[derive(Debug, Clone, Default)]
pub struct DefaultMessage {
    pub text: Option<MessageText>,
    pub sender: Option<SenderName>,
}

#[derive(Debug, Clone)]
pub struct SendMessages {
    messages: Vec<BatchMessage>,
    default: DefaultMessage,
    send_time: Option<SendTime>,
}

impl SendMessages {
    const MESSAGES_FIELD: &'static str = "msg";

    pub fn new(
        messages: Vec<BatchMessage>,
        default: DefaultMessage,
        send_time: Option<SendTime>,
    ) -> Result<Self, ValidationError> {
        if messages.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::MESSAGES_FIELD,
            });
        }
        Ok(Self {
            messages,
            default,
            send_time,
        })
    }

    pub fn messages(&self) -> &[BatchMessage] {
        &self.messages
    }

    pub fn default_message(&self) -> &DefaultMessage {
        &self.default
    }

    pub fn send_time(&self) -> Option<SendTime> {
        self.send_time
    }
}
