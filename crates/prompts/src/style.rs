//! List styles: how a choice prompt presents its options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use turn_core::PromptError;

/// Rendering mode for a choice list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListStyle {
    /// Prompt text only; no enumeration.
    None,
    /// Options appended to the prompt text: `red, green, or blue`.
    Inline,
    /// Numbered vertical list below the prompt text.
    List,
    /// Quick-reply buttons, one per choice.
    SuggestedAction,
    /// Suggested actions when the options are few and short, otherwise a numbered list.
    #[default]
    Auto,
}

impl ListStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListStyle::None => "none",
            ListStyle::Inline => "inline",
            ListStyle::List => "list",
            ListStyle::SuggestedAction => "suggestedAction",
            ListStyle::Auto => "auto",
        }
    }
}

impl fmt::Display for ListStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListStyle {
    type Err = PromptError;

    /// Case-insensitive; accepts `suggested_action` and `suggested-action` as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "none" => Ok(ListStyle::None),
            "inline" => Ok(ListStyle::Inline),
            "list" => Ok(ListStyle::List),
            "suggestedaction" | "suggestedactions" => Ok(ListStyle::SuggestedAction),
            "auto" => Ok(ListStyle::Auto),
            _ => Err(PromptError::Config(format!("unknown list style: {}", s))),
        }
    }
}
