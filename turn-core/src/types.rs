//! Core types: activity kind, activity, attachment, and suggested actions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of an activity. Only [`ActivityKind::Message`] carries user input that prompts recognize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityKind {
    Message,
    ConversationUpdate,
    Typing,
    Event,
    /// Any kind the transport delivers that this crate does not name.
    Other(String),
}

impl From<String> for ActivityKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "message" => ActivityKind::Message,
            "conversationUpdate" => ActivityKind::ConversationUpdate,
            "typing" => ActivityKind::Typing,
            "event" => ActivityKind::Event,
            _ => ActivityKind::Other(s),
        }
    }
}

impl From<ActivityKind> for String {
    fn from(kind: ActivityKind) -> Self {
        match kind {
            ActivityKind::Message => "message".to_string(),
            ActivityKind::ConversationUpdate => "conversationUpdate".to_string(),
            ActivityKind::Typing => "typing".to_string(),
            ActivityKind::Event => "event".to_string(),
            ActivityKind::Other(s) => s,
        }
    }
}

/// A file, card, or media reference carried by an activity. Identity is its position in
/// [`Activity::attachments`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub content_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Attachment {
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            content_url: None,
            content: None,
            name: None,
        }
    }

    pub fn with_content(mut self, content: serde_json::Value) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_content_url(mut self, url: impl Into<String>) -> Self {
        self.content_url = Some(url.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A machine-actionable quick reply. `action_type` is `imBack` for buttons that post their value back as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub title: String,
    pub value: String,
}

impl CardAction {
    /// Action type for buttons whose value is sent back to the bot as a plain message.
    pub const IM_BACK: &'static str = "imBack";

    pub fn im_back(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            action_type: Self::IM_BACK.to_string(),
            title: title.into(),
            value: value.into(),
        }
    }
}

/// Quick replies shown with a message; disappear once the user responds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedActions {
    pub actions: Vec<CardAction>,
}

/// A single inbound or outbound activity: kind, optional text and spoken form, attachments, and quick replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Spoken form (plain text or SSML) for voice channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speak: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_actions: Option<SuggestedActions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Activity {
    /// Creates an empty message activity.
    pub fn message() -> Self {
        Self {
            kind: ActivityKind::Message,
            text: None,
            speak: None,
            attachments: Vec::new(),
            suggested_actions: None,
            timestamp: None,
        }
    }

    /// Creates a message activity with the given text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::message()
        }
    }

    pub fn with_speak(mut self, speak: impl Into<String>) -> Self {
        self.speak = Some(speak.into());
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn with_suggested_actions(mut self, actions: Vec<CardAction>) -> Self {
        self.suggested_actions = Some(SuggestedActions { actions });
        self
    }

    pub fn is_message(&self) -> bool {
        self.kind == ActivityKind::Message
    }
}
