//! Typed view over raw rollout records.
//!
//! A rollout log is a JSONL file where every line is one loosely structured JSON
//! object. Only a handful of fields matter for filtering, so each record keeps its
//! original [`Value`] untouched (it is written back verbatim) and carries a small
//! typed [`RecordKind`] derived from it. Anything that does not fit the known shapes
//! falls into [`RecordKind::Other`] or [`RecordKind::Untyped`]; building the view
//! never fails.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Row kind of lifecycle events (`task_started`, `token_count`, ...).
pub const EVENT_MSG: &str = "event_msg";

/// Row kind of conversational items (messages, reasoning, tool calls, ...).
pub const RESPONSE_ITEM: &str = "response_item";

/// Event type that opens a new task.
pub const TASK_STARTED: &str = "task_started";

/// Response item type for chat messages.
pub const MESSAGE: &str = "message";

/// Content part type carrying user-authored text.
pub const INPUT_TEXT: &str = "input_text";

/// Content part type carrying assistant-authored text.
pub const OUTPUT_TEXT: &str = "output_text";

/// Author of a conversational message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

impl Author {
    /// Role string as it appears in `payload.role`.
    pub fn role(&self) -> &'static str {
        match self {
            Author::User => "user",
            Author::Assistant => "assistant",
        }
    }

    /// Content part type holding this author's text.
    pub fn text_part(&self) -> &'static str {
        match self {
            Author::User => INPUT_TEXT,
            Author::Assistant => OUTPUT_TEXT,
        }
    }
}

/// Payload of an `event_msg` row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventMsg {
    /// `payload.type`, when it is a non-empty string.
    pub event_type: Option<String>,
}

/// Payload of a `response_item` row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseItem {
    /// `payload.type`, when it is a non-empty string.
    pub item_type: Option<String>,
    /// `payload.role`, when it is a non-empty string.
    pub role: Option<String>,
    /// Object entries of `payload.content`; other entries are ignored.
    pub content: Vec<ContentPart>,
}

/// One entry of a message's `content` array.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentPart {
    pub part_type: Option<String>,
    pub text: Option<String>,
}

/// Known record shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    /// `type == "event_msg"`
    Event(EventMsg),
    /// `type == "response_item"`
    Response(ResponseItem),
    /// Any other non-empty `type` string, kept as written.
    Other(String),
    /// `type` missing, empty or not a string.
    Untyped,
}

/// One rollout record: the raw JSON plus its typed view.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    raw: Value,
    kind: RecordKind,
}

impl Record {
    /// Build a record from any JSON value. Never fails.
    pub fn from_value(raw: Value) -> Self {
        let kind = RecordKind::from_value(&raw);
        Self { raw, kind }
    }

    /// The original JSON, exactly as parsed.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }

    pub fn kind(&self) -> &RecordKind {
        &self.kind
    }

    /// The top-level `type` string, if present and non-empty.
    pub fn row_type(&self) -> Option<&str> {
        match &self.kind {
            RecordKind::Event(_) => Some(EVENT_MSG),
            RecordKind::Response(_) => Some(RESPONSE_ITEM),
            RecordKind::Other(row_type) => Some(row_type),
            RecordKind::Untyped => None,
        }
    }

    /// The `timestamp` field, if it is a string.
    pub fn timestamp(&self) -> Option<&str> {
        self.raw.get("timestamp").and_then(Value::as_str)
    }

    /// Whether this row is the `task_started` lifecycle event.
    pub fn is_task_started(&self) -> bool {
        matches!(
            &self.kind,
            RecordKind::Event(EventMsg { event_type: Some(t) }) if t == TASK_STARTED
        )
    }

    /// The message payload when this row is a `message` written by `author`.
    pub fn message_from(&self, author: Author) -> Option<&ResponseItem> {
        match &self.kind {
            RecordKind::Response(item)
                if item.item_type.as_deref() == Some(MESSAGE)
                    && item.role.as_deref() == Some(author.role()) =>
            {
                Some(item)
            }
            _ => None,
        }
    }

    /// Whether this row is a user-authored message.
    pub fn is_user_message(&self) -> bool {
        self.message_from(Author::User).is_some()
    }

    /// Concatenated `input_text` of a user message, or an empty string.
    pub fn user_text(&self) -> String {
        self.author_text(Author::User)
    }

    /// Concatenated `output_text` of an assistant message, or an empty string.
    pub fn assistant_text(&self) -> String {
        self.author_text(Author::Assistant)
    }

    fn author_text(&self, author: Author) -> String {
        let Some(item) = self.message_from(author) else {
            return String::new();
        };

        let parts: Vec<&str> = item
            .content
            .iter()
            .filter(|part| part.part_type.as_deref() == Some(author.text_part()))
            .filter_map(|part| part.text.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .collect();

        parts.join("\n").trim().to_string()
    }
}

impl From<Value> for Record {
    fn from(raw: Value) -> Self {
        Self::from_value(raw)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl RecordKind {
    fn from_value(raw: &Value) -> Self {
        let Some(row_type) = non_empty_str(raw.get("type")) else {
            return RecordKind::Untyped;
        };
        let payload = raw.get("payload").filter(|p| p.is_object());

        match row_type {
            EVENT_MSG => RecordKind::Event(EventMsg {
                event_type: payload.and_then(|p| non_empty_str(p.get("type"))).map(String::from),
            }),
            RESPONSE_ITEM => RecordKind::Response(
                payload.map(ResponseItem::from_payload).unwrap_or_default(),
            ),
            other => RecordKind::Other(other.to_string()),
        }
    }
}

impl ResponseItem {
    fn from_payload(payload: &Value) -> Self {
        let content = payload
            .get("content")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter(|item| item.is_object())
                    .map(|item| ContentPart {
                        part_type: item.get("type").and_then(Value::as_str).map(String::from),
                        text: item.get("text").and_then(Value::as_str).map(String::from),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            item_type: non_empty_str(payload.get("type")).map(String::from),
            role: non_empty_str(payload.get("role")).map(String::from),
            content,
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
