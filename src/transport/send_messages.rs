use crate::domain::{
    BatchMessage, DefaultMessage, MessageText, Password, Recipient, SendMessages, SendTime,
    SenderName, Username,
};

pub const XML_CONTENT_TYPE: &str = "text/xml; charset=UTF8";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8" ?>"#;

/// Render the `xml` endpoint batch document.
///
/// `<default>` falls back to `default_sender` when the request default has no sender;
/// `<msg>` elements only carry the sender they were given.
pub fn encode_send_messages_xml(
    login: &Username,
    password: Option<&Password>,
    request: &SendMessages,
    default_sender: Option<&SenderName>,
) -> String {
    let mut xml = String::from(XML_DECLARATION);

    xml.push_str("<package");
    push_attribute(&mut xml, Username::XML_ATTRIBUTE, login.as_str());
    if let Some(password) = password {
        push_attribute(&mut xml, Password::FIELD, password.as_str());
    }
    if let Some(time) = request.send_time() {
        push_attribute(&mut xml, SendTime::FIELD, &time.format());
    }
    xml.push_str("><message>");

    push_default(&mut xml, request.default_message(), default_sender);
    for message in request.messages() {
        push_message(&mut xml, message);
    }

    xml.push_str("</message></package>");
    xml
}

fn push_default(xml: &mut String, default: &DefaultMessage, fallback: Option<&SenderName>) {
    xml.push_str("<default");
    if let Some(sender) = default.sender.as_ref().or(fallback) {
        push_attribute(xml, SenderName::FIELD, sender.as_str());
    }
    xml.push('>');
    push_text(xml, default.text.as_ref());
    xml.push_str("</default>");
}

fn push_message(xml: &mut String, message: &BatchMessage) {
    xml.push_str("<msg");
    push_attribute(xml, Recipient::FIELD, message.recipient.raw());
    if let Some(sender) = message.sender.as_ref() {
        push_attribute(xml, SenderName::FIELD, sender.as_str());
    }
    xml.push('>');
    push_text(xml, message.text.as_ref());
    xml.push_str("</msg>");
}

fn push_attribute(xml: &mut String, name: &str, value: &str) {
    xml.push(' ');
    xml.push_str(name);
    xml.push_str("=\"");
    xml.push_str(&escape(value));
    xml.push('"');
}

fn push_text(xml: &mut String, text: Option<&MessageText>) {
    if let Some(text) = text {
        xml.push_str(&escape(text.as_str()));
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
