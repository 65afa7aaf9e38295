#[derive(Debug, Clone, Copy, PartialEq)]
/// Remaining account credits as reported by `credits/plain`.
///
/// Invariant: non-negative.
pub struct Balance(f64);

impl Balance {
    pub(crate) fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identifier assigned to an accepted message by `send_sms/plain`.
pub struct MessageId(u64);

impl MessageId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Raw reply of the XML batch endpoint. The body is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResponse {
    pub status: u16,
    pub body: String,
}
