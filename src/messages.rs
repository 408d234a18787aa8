//! Message Presentation Logic
//!
//! Classifies raw message records into display categories and computes
//! collapsed previews. Malformed or missing fields degrade to empty or
//! default text, never to an error.

use chrono::DateTime;

use crate::models::Message;

/// Collapsed preview length in characters.
pub const PREVIEW_CHARS: usize = 100;

/// Closed set of presentation categories. Selection is a priority-ordered
/// match: system-with-subtype-init, then system, then user, then assistant,
/// else other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageCategory {
    SystemInit,
    SystemOther,
    User,
    Assistant,
    Other,
}

impl MessageCategory {
    /// CSS class suffix selecting border/background styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageCategory::SystemInit => "message-card system-init",
            MessageCategory::SystemOther => "message-card system",
            MessageCategory::User => "message-card user",
            MessageCategory::Assistant => "message-card assistant",
            MessageCategory::Other => "message-card other",
        }
    }

    /// Icon glyph shown next to the title.
    pub fn icon(&self) -> &'static str {
        match self {
            MessageCategory::SystemInit => "🚀",
            MessageCategory::SystemOther => "⚙",
            MessageCategory::User => "👤",
            MessageCategory::Assistant => "🤖",
            MessageCategory::Other => "•",
        }
    }
}

pub fn classify(message: &Message) -> MessageCategory {
    match message.kind.as_str() {
        "system" if message.subtype.as_deref() == Some("init") => MessageCategory::SystemInit,
        "system" => MessageCategory::SystemOther,
        "user" => MessageCategory::User,
        "assistant" => MessageCategory::Assistant,
        _ => MessageCategory::Other,
    }
}

/// Card title for a message.
pub fn title(message: &Message) -> String {
    match classify(message) {
        MessageCategory::SystemInit => "Session Started".to_string(),
        MessageCategory::SystemOther => match &message.subtype {
            Some(subtype) if !subtype.is_empty() => format!("System: {}", subtype),
            _ => "System".to_string(),
        },
        MessageCategory::User => "User".to_string(),
        MessageCategory::Assistant => "Assistant".to_string(),
        MessageCategory::Other => {
            if message.kind.is_empty() {
                "Message".to_string()
            } else {
                message.kind.clone()
            }
        }
    }
}

/// Full content as display text. String content is shown as-is; structured
/// content is pretty-printed; null or absent content yields `None`.
pub fn content_text(message: &Message) -> Option<String> {
    match &message.content {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(value) => serde_json::to_string_pretty(value).ok(),
    }
}

/// Collapsed preview: content truncated to [`PREVIEW_CHARS`] characters
/// with an ellipsis, or the title as a short summary when content is
/// absent.
pub fn preview(message: &Message) -> String {
    match content_text(message) {
        Some(text) => {
            let flat = text.replace('\n', " ");
            truncate_chars(&flat, PREVIEW_CHARS)
        }
        None => title(message),
    }
}

/// The complete underlying record, pretty-printed for the inspector.
pub fn raw_record(message: &Message) -> String {
    serde_json::to_string_pretty(message).unwrap_or_default()
}

/// Timestamp rendered for display; unparseable values pass through raw.
pub fn format_timestamp(message: &Message) -> String {
    let Some(raw) = &message.timestamp else {
        return String::new();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%H:%M:%S").to_string(),
        Err(_) => raw.clone(),
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(limit).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(kind: &str, subtype: Option<&str>, content: Option<serde_json::Value>) -> Message {
        Message {
            kind: kind.to_string(),
            subtype: subtype.map(|s| s.to_string()),
            content,
            timestamp: None,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn classification_is_priority_ordered() {
        assert_eq!(classify(&message("system", Some("init"), None)), MessageCategory::SystemInit);
        assert_eq!(classify(&message("system", Some("status"), None)), MessageCategory::SystemOther);
        assert_eq!(classify(&message("system", None, None)), MessageCategory::SystemOther);
        assert_eq!(classify(&message("user", None, None)), MessageCategory::User);
        assert_eq!(classify(&message("assistant", Some("init"), None)), MessageCategory::Assistant);
        assert_eq!(classify(&message("tool_result", None, None)), MessageCategory::Other);
        assert_eq!(classify(&message("", None, None)), MessageCategory::Other);
    }

    #[test]
    fn system_init_renders_session_started() {
        let msg = Message {
            kind: "system".to_string(),
            subtype: Some("init".to_string()),
            content: None,
            timestamp: Some("2024-01-01T00:00:00Z".to_string()),
            extra: serde_json::Map::new(),
        };
        assert_eq!(title(&msg), "Session Started");
        assert_eq!(classify(&msg).icon(), "🚀");
        assert_eq!(format_timestamp(&msg), "00:00:00");
    }

    #[test]
    fn long_content_previews_at_100_chars_with_ellipsis() {
        let long = "a".repeat(150);
        let msg = message("assistant", None, Some(serde_json::Value::String(long.clone())));
        let collapsed = preview(&msg);
        assert_eq!(collapsed.chars().count(), PREVIEW_CHARS + 1);
        assert!(collapsed.ends_with('…'));
        assert_eq!(&collapsed[..100], &long[..100]);
        // Expanded view shows the full content.
        assert_eq!(content_text(&msg).unwrap(), long);
    }

    #[test]
    fn short_content_previews_unchanged() {
        let msg = message("user", None, Some(serde_json::Value::String("hello".to_string())));
        assert_eq!(preview(&msg), "hello");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let wide = "日".repeat(150);
        let msg = message("assistant", None, Some(serde_json::Value::String(wide)));
        let collapsed = preview(&msg);
        assert_eq!(collapsed.chars().count(), PREVIEW_CHARS + 1);
    }

    #[test]
    fn missing_content_degrades_to_summary() {
        let msg = message("system", Some("init"), None);
        assert_eq!(preview(&msg), "Session Started");
        let null_content = message("user", None, Some(serde_json::Value::Null));
        assert_eq!(preview(&null_content), "User");
    }

    #[test]
    fn structured_content_is_pretty_printed() {
        let msg = message("assistant", None, Some(serde_json::json!({"text": "hi"})));
        let text = content_text(&msg).unwrap();
        assert!(text.contains("\"text\": \"hi\""));
    }

    #[test]
    fn raw_record_keeps_extra_fields() {
        let mut extra = serde_json::Map::new();
        extra.insert("session_id".to_string(), serde_json::json!("abc"));
        let msg = Message {
            kind: "assistant".to_string(),
            subtype: None,
            content: None,
            timestamp: None,
            extra,
        };
        let raw = raw_record(&msg);
        assert!(raw.contains("\"session_id\": \"abc\""));
        assert!(raw.contains("\"type\": \"assistant\""));
    }

    #[test]
    fn unparseable_timestamp_passes_through() {
        let mut msg = message("user", None, None);
        msg.timestamp = Some("yesterday".to_string());
        assert_eq!(format_timestamp(&msg), "yesterday");
        msg.timestamp = None;
        assert_eq!(format_timestamp(&msg), "");
    }
}
