//! Choice data model: the options offered by a choice prompt and the value recognized from a reply.

use serde::{Deserialize, Serialize};
use turn_core::CardAction;

/// One selectable option. Order within a choice list matters: it drives numbering and tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Canonical display value; also what a recognized choice reports back.
    pub value: String,
    /// Alternative phrasings recognized like the display value.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    /// Custom button for suggested-action rendering; its value is recognized like a synonym.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<CardAction>,
}

impl Choice {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            synonyms: Vec::new(),
            action: None,
        }
    }

    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms.extend(synonyms.into_iter().map(Into::into));
        self
    }

    pub fn with_action(mut self, action: CardAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Button title: the action's title when set, else the display value.
    pub fn title(&self) -> &str {
        self.action
            .as_ref()
            .map(|a| a.title.as_str())
            .unwrap_or(&self.value)
    }

    /// Every string that recognizes this choice: display value, synonyms, then action value.
    pub(crate) fn labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.value.as_str())
            .chain(self.synonyms.iter().map(String::as_str))
            .chain(self.action.iter().map(|a| a.value.as_str()))
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Choice::new(value)
    }
}

impl From<String> for Choice {
    fn from(value: String) -> Self {
        Choice::new(value)
    }
}

/// Converts plain strings into choices (e.g. `to_choices(["red", "green", "blue"])`).
pub fn to_choices<I, S>(values: I) -> Vec<Choice>
where
    I: IntoIterator<Item = S>,
    S: Into<Choice>,
{
    values.into_iter().map(Into::into).collect()
}

/// A recognized choice: display value and 0-based position in the offered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundChoice {
    pub value: String,
    pub index: usize,
    /// Similarity in `(0, 1]`; 1.0 for exact or ordinal matches.
    pub score: f32,
    /// The label (value, synonym, action value, or ordinal) that produced the score.
    pub synonym: String,
}
