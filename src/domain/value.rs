use crate::domain::validation::ValidationError;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// sms-assistent.by account username.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Query field name used by sms-assistent.by (`user`).
    pub const FIELD: &'static str = "user";

    /// Attribute name carrying the username in the XML batch document (`login`).
    pub const XML_ATTRIBUTE: &'static str = "login";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// API access token issued in the sms-assistent.by user area.
///
/// Invariant: non-empty after trimming. The `Debug` output never shows the value.
pub struct Token(String);

impl Token {
    /// Header name used to pass the token (`requestAuthToken`).
    pub const HEADER: &'static str = "requestAuthToken";

    /// Create a validated [`Token`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::HEADER,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token(***)")
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// sms-assistent.by account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Query field and XML attribute name used by sms-assistent.by (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender name shown as the message originator (`sender`).
///
/// Invariant: non-empty after trimming. The name must be registered for your account.
pub struct SenderName(String);

impl SenderName {
    /// Query field and XML attribute name used by sms-assistent.by (`sender`).
    pub const FIELD: &'static str = "sender";

    /// Create a validated [`SenderName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Query field name used by sms-assistent.by (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number as sent to sms-assistent.by (`recipient`).
///
/// Invariant: non-empty after trimming. [`Recipient::new`] keeps the input as is;
/// [`Recipient::parse`] normalizes user input to the digits-only international form.
pub struct Recipient(String);

impl Recipient {
    /// Query field and XML attribute name used by sms-assistent.by (`recipient`).
    pub const FIELD: &'static str = "recipient";

    /// Create a validated (non-empty) recipient.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Parse a human-entered number (spaces, dashes, national prefix) into the wire form,
    /// e.g. `+375 (29) 123-45-67` becomes `375291234567`.
    ///
    /// `default_region` resolves numbers written without a country code.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let input = input.as_ref().trim();
        if input.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let invalid = || ValidationError::InvalidPhoneNumber {
            input: input.to_owned(),
        };
        let parsed = phonenumber::parse(default_region, input).map_err(|_| invalid())?;
        if !phonenumber::is_valid(&parsed) {
            return Err(invalid());
        }

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        Ok(Self(e164.trim_start_matches('+').to_owned()))
    }

    /// Raw (trimmed) value as sent to sms-assistent.by.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Delayed delivery time (`date_send`).
///
/// Stored as local wall-clock time; the gateway receives it as `YYYYMMDDHHmm`.
pub struct SendTime(NaiveDateTime);

impl SendTime {
    /// Query field and XML attribute name used by sms-assistent.by (`date_send`).
    pub const FIELD: &'static str = "date_send";

    const WIRE_FORMAT: &'static str = "%Y%m%d%H%M";

    /// Create a send time from a wall-clock timestamp (no range validation is performed).
    pub fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    /// Create a send time from a zoned timestamp, keeping its local wall-clock reading.
    pub fn from_datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> Self {
        Self(value.naive_local())
    }

    /// Get the underlying timestamp.
    pub fn value(self) -> NaiveDateTime {
        self.0
    }

    /// Wire representation, `YYYYMMDDHHmm`. Seconds are dropped.
    pub fn format(self) -> String {
        self.0.format(Self::WIRE_FORMAT).to_string()
    }
}

impl From<NaiveDateTime> for SendTime {
    fn from(value: NaiveDateTime) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate};

    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let username = Username::new("  user ").unwrap();
        assert_eq!(username.as_str(), "user");
        assert!(Username::new("  ").is_err());

        let token = Token::new(" abc ").unwrap();
        assert_eq!(token.as_str(), "abc");
        assert!(Token::new("").is_err());

        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert!(Password::new("").is_err());

        let sender = SenderName::new(" Shop ").unwrap();
        assert_eq!(sender.as_str(), "Shop");
        assert!(SenderName::new(" ").is_err());

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());
    }

    #[test]
    fn secrets_are_hidden_from_debug_output() {
        let token = Token::new("abc").unwrap();
        assert_eq!(format!("{token:?}"), "Token(***)");

        let password = Password::new("secret").unwrap();
        assert!(!format!("{password:?}").contains("secret"));
    }

    #[test]
    fn recipient_trims_and_exposes_raw() {
        let recipient = Recipient::new(" 375291234567 ").unwrap();
        assert_eq!(recipient.raw(), "375291234567");
        assert!(matches!(
            Recipient::new(""),
            Err(ValidationError::Empty {
                field: Recipient::FIELD
            })
        ));
    }

    #[test]
    fn recipient_parse_normalizes_to_wire_digits() {
        let formatted = Recipient::parse(None, " +375 (29) 123-45-67 ").unwrap();
        assert_eq!(formatted.raw(), "375291234567");

        let national = Recipient::parse(Some(country::Id::BY), "(29) 123-45-67").unwrap();
        assert_eq!(national, formatted);
    }

    #[test]
    fn recipient_parse_rejects_garbage_and_blank_input() {
        assert!(matches!(
            Recipient::parse(None, "not-a-number"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
        assert!(matches!(
            Recipient::parse(Some(country::Id::BY), "12"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
        assert!(matches!(
            Recipient::parse(None, "   "),
            Err(ValidationError::Empty {
                field: Recipient::FIELD
            })
        ));
    }

    #[test]
    fn send_time_formats_to_minutes() {
        let time = NaiveDate::from_ymd_opt(2016, 5, 3)
            .unwrap()
            .and_hms_opt(9, 7, 42)
            .unwrap();
        assert_eq!(SendTime::new(time).format(), "201605030907");
    }

    #[test]
    fn send_time_keeps_local_reading_of_zoned_time() {
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let zoned = offset.with_ymd_and_hms(2024, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(SendTime::from_datetime(&zoned).format(), "202412312359");
    }
}
