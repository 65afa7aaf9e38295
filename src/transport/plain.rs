use crate::domain::{Balance, ErrorCode, MessageId};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("expected a numeric response, got {body:?}")]
    InvalidNumber { body: String },
}

/// Decoded `*/plain` reply: either the requested value or a negative error code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlainResponse<T> {
    Value(T),
    Error(ErrorCode),
}

pub fn decode_balance_response(body: &str) -> Result<PlainResponse<Balance>, TransportError> {
    let trimmed = body.trim();
    let value = trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| invalid_number(trimmed))?;

    if value >= 0.0 {
        Ok(PlainResponse::Value(Balance::new(value)))
    } else if value.fract() == 0.0 && value >= f64::from(i32::MIN) {
        Ok(PlainResponse::Error(ErrorCode::new(value as i32)))
    } else {
        // Error codes are whole numbers; anything else is not a documented reply.
        Err(invalid_number(trimmed))
    }
}

pub fn decode_message_id_response(
    body: &str,
) -> Result<PlainResponse<MessageId>, TransportError> {
    let trimmed = body.trim();
    let value = trimmed.parse::<i64>().map_err(|_| invalid_number(trimmed))?;

    if value >= 0 {
        Ok(PlainResponse::Value(MessageId::new(value.unsigned_abs())))
    } else {
        let code = i32::try_from(value).unwrap_or(i32::MIN);
        Ok(PlainResponse::Error(ErrorCode::new(code)))
    }
}

fn invalid_number(body: &str) -> TransportError {
    TransportError::InvalidNumber {
        body: body.to_owned(),
    }
}
