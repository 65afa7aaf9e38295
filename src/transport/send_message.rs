use crate::domain::{MessageText, Recipient, SendMessage, SendTime, SenderName};

/// Encode `send_sms/plain` query parameters (credentials are added by the client).
///
/// The per-message sender wins over `default_sender`; `sender` is omitted when neither is set.
pub fn encode_send_message_query(
    request: &SendMessage,
    default_sender: Option<&SenderName>,
) -> Vec<(String, String)> {
    let mut params = vec![
        (
            Recipient::FIELD.to_owned(),
            request.recipient().raw().to_owned(),
        ),
        (
            MessageText::FIELD.to_owned(),
            request.text().as_str().to_owned(),
        ),
    ];

    let options = request.options();
    if let Some(sender) = options.sender.as_ref().or(default_sender) {
        params.push((SenderName::FIELD.to_owned(), sender.as_str().to_owned()));
    }
    if let Some(time) = options.send_time {
        params.push((SendTime::FIELD.to_owned(), time.format()));
    }

    params
}
