//! Transport layer: wire-format details (query encoding, XML rendering, plain-text decoding).

mod plain;
mod send_message;
mod send_messages;

pub use plain::{PlainResponse, decode_balance_response, decode_message_id_response};
pub use send_message::encode_send_message_query;
pub use send_messages::{XML_CONTENT_TYPE, encode_send_messages_xml};
