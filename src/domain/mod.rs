//! Domain layer: strong types with validation and invariants (no I/O).

mod code;
mod request;
mod response;
mod validation;
mod value;

pub use code::{ApiErrorKind, ErrorCode};
pub use request::{BatchMessage, DefaultMessage, SendMessage, SendMessages, SendOptions};
pub use response::{Balance, BatchResponse, MessageId};
pub use validation::ValidationError;
pub use value::{
    MessageText, Password, Recipient, SendTime, SenderName, Token, Username,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rejects_empty() {
        assert!(matches!(
            Username::new("   "),
            Err(ValidationError::Empty {
                field: Username::FIELD
            })
        ));
    }

    #[test]
    fn password_rejects_empty() {
        assert!(matches!(
            Password::new(""),
            Err(ValidationError::Empty {
                field: Password::FIELD
            })
        ));
    }

    #[test]
    fn recipient_parse_uses_default_region_for_local_numbers() {
        let recipient =
            Recipient::parse(Some(phonenumber::country::Id::BY), "291234567").unwrap();
        assert_eq!(recipient.raw(), "375291234567");
        assert!(Recipient::parse(None, "291234567").is_err());
    }

    #[test]
    fn batch_requires_at_least_one_message() {
        let err = SendMessages::new(Vec::new(), DefaultMessage::default(), None).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "msg" }));
    }

    #[test]
    fn batch_message_builder_sets_overrides() {
        let msg = BatchMessage::to(Recipient::new("375291234567").unwrap())
            .text(MessageText::new("hi").unwrap())
            .sender(SenderName::new("Shop").unwrap());
        assert_eq!(msg.text.as_ref().map(MessageText::as_str), Some("hi"));
        assert_eq!(msg.sender.as_ref().map(SenderName::as_str), Some("Shop"));

        let bare = BatchMessage::to(Recipient::new("123").unwrap());
        assert!(bare.text.is_none());
        assert!(bare.sender.is_none());
    }
}
