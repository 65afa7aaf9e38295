use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Negative response code returned by sms-assistent.by in place of a result.
///
/// The raw value is preserved even when the code is unknown to this crate.
pub struct ErrorCode(i32);

impl ErrorCode {
    /// Construct an error code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as returned by sms-assistent.by.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to its error kind.
    pub fn kind(self) -> ApiErrorKind {
        ApiErrorKind::from_code(self.0)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Semantic category of an sms-assistent.by error code.
pub enum ApiErrorKind {
    /// Not enough credits on the account (`-1`).
    LowBalance,
    /// Wrong username, token or password, or the account is blocked (`-2`, `-6`, `-7`).
    Authentication,
    /// Message text is missing or invalid (`-3`).
    MessageText,
    /// Recipient phone number is invalid (`-4`).
    PhoneNumber,
    /// Sender name is not registered for the account (`-5`).
    SenderName,
    /// Gateway-side failure (`-10`, `-12`, `-13`).
    Server,
    /// Unknown message id (`-11`).
    MessageId,
    /// Delayed send time is invalid (`-14`, `-15`).
    SendTime,
    /// Any other negative code.
    Generic,
}

impl ApiErrorKind {
    /// Convert a raw sms-assistent.by code into its error kind.
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => Self::LowBalance,
            -2 | -6 | -7 => Self::Authentication,
            -3 => Self::MessageText,
            -4 => Self::PhoneNumber,
            -5 => Self::SenderName,
            -10 | -12 | -13 => Self::Server,
            -11 => Self::MessageId,
            -14 | -15 => Self::SendTime,
            _ => Self::Generic,
        }
    }

    /// Whether the credentials were rejected.
    pub fn is_auth_error(self) -> bool {
        self == Self::Authentication
    }

    /// Whether the account ran out of credits.
    pub fn is_balance_error(self) -> bool {
        self == Self::LowBalance
    }

    pub(crate) fn describe(self) -> &'static str {
        match self {
            Self::LowBalance => "insufficient balance",
            Self::Authentication => "authentication failed",
            Self::MessageText => "invalid message text",
            Self::PhoneNumber => "invalid phone number",
            Self::SenderName => "invalid sender name",
            Self::Server => "server error",
            Self::MessageId => "invalid message id",
            Self::SendTime => "invalid send time",
            Self::Generic => "request failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_codes_map_to_their_kinds() {
        let table = [
            (-1, ApiErrorKind::LowBalance),
            (-2, ApiErrorKind::Authentication),
            (-3, ApiErrorKind::MessageText),
            (-4, ApiErrorKind::PhoneNumber),
            (-5, ApiErrorKind::SenderName),
            (-6, ApiErrorKind::Authentication),
            (-7, ApiErrorKind::Authentication),
            (-10, ApiErrorKind::Server),
            (-11, ApiErrorKind::MessageId),
            (-12, ApiErrorKind::Server),
            (-13, ApiErrorKind::Server),
            (-14, ApiErrorKind::SendTime),
            (-15, ApiErrorKind::SendTime),
        ];
        for (code, kind) in table {
            assert_eq!(ErrorCode::new(code).kind(), kind, "code {code}");
        }
    }

    #[test]
    fn unknown_codes_are_generic() {
        assert_eq!(ApiErrorKind::from_code(-8), ApiErrorKind::Generic);
        assert_eq!(ApiErrorKind::from_code(-16), ApiErrorKind::Generic);
        assert_eq!(ApiErrorKind::from_code(-999), ApiErrorKind::Generic);
    }

    #[test]
    fn helpers_cover_auth_and_balance() {
        assert!(ErrorCode::new(-6).kind().is_auth_error());
        assert!(!ErrorCode::new(-6).kind().is_balance_error());
        assert!(ErrorCode::new(-1).kind().is_balance_error());
        assert!(!ErrorCode::new(-10).kind().is_auth_error());
    }
}
