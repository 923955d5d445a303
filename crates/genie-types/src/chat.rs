//! Chat turn types for Genie conversations.
//!
//! A chat turn reaches the bridge in one of two shapes: as a typed
//! [`ChatTurn`] struct, or as a loose key-value mapping (a JSON object or a
//! string map) straight from the host framework. [`ChatTurnLike`] gives both
//! shapes the same `role`/`content` accessors.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single message in a conversation.
///
/// `role` is free-form ("user", "assistant", "tool", ...) and is never
/// validated. Missing `content` is rendered as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ChatTurn {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: Some(content.into()),
        }
    }

    /// A turn with a role but no content.
    pub fn without_content(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: None,
        }
    }
}

/// Read access to the `role` and `content` of a chat turn, whatever its shape.
///
/// Mapping shapes look up the `role` and `content` keys; a missing key reads
/// as absent. Object shapes read their fields directly.
pub trait ChatTurnLike {
    fn role(&self) -> Cow<'_, str>;

    /// `None` when the turn carries no content (absent key or JSON null).
    fn content(&self) -> Option<Cow<'_, str>>;
}

impl ChatTurnLike for ChatTurn {
    fn role(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.role)
    }

    fn content(&self) -> Option<Cow<'_, str>> {
        self.content.as_deref().map(Cow::Borrowed)
    }
}

/// Render a JSON field as text. Strings are taken verbatim, null counts as
/// absent, anything else becomes its compact JSON form.
fn json_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<Cow<'a, str>> {
    match map.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        other => Some(Cow::Owned(other.to_string())),
    }
}

impl ChatTurnLike for Map<String, Value> {
    fn role(&self) -> Cow<'_, str> {
        json_field(self, "role").unwrap_or(Cow::Borrowed(""))
    }

    fn content(&self) -> Option<Cow<'_, str>> {
        json_field(self, "content")
    }
}

impl ChatTurnLike for Value {
    fn role(&self) -> Cow<'_, str> {
        match self.as_object() {
            Some(map) => map.role(),
            None => Cow::Borrowed(""),
        }
    }

    fn content(&self) -> Option<Cow<'_, str>> {
        self.as_object().and_then(|map| map.content())
    }
}

impl ChatTurnLike for HashMap<String, String> {
    fn role(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.get("role").map(String::as_str).unwrap_or(""))
    }

    fn content(&self) -> Option<Cow<'_, str>> {
        self.get("content").map(|c| Cow::Borrowed(c.as_str()))
    }
}

impl ChatTurnLike for BTreeMap<String, String> {
    fn role(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.get("role").map(String::as_str).unwrap_or(""))
    }

    fn content(&self) -> Option<Cow<'_, str>> {
        self.get("content").map(|c| Cow::Borrowed(c.as_str()))
    }
}

impl<T: ChatTurnLike + ?Sized> ChatTurnLike for &T {
    fn role(&self) -> Cow<'_, str> {
        (**self).role()
    }

    fn content(&self) -> Option<Cow<'_, str>> {
        (**self).content()
    }
}
