//! Choice prompt configuration: list style, recognition threshold, and rendering limits.
//! Loaded from code defaults or from environment variables (`PROMPT_*`).

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use turn_core::{PromptError, Result};

use crate::matcher::DEFAULT_THRESHOLD;
use crate::style::ListStyle;

/// Default cap on quick-reply buttons per message.
pub const DEFAULT_MAX_SUGGESTED_ACTIONS: usize = 10;

/// Longest choice title `auto` still renders as a button.
pub const DEFAULT_MAX_ACTION_TITLE_LENGTH: usize = 20;

/// Instance-level settings of a choice prompt. Fixed at construction, shared by every turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoicePromptConfig {
    pub style: ListStyle,
    /// Minimum match score in `(0, 1]`.
    pub threshold: f32,
    /// Buttons beyond this count are appended to the text as numbered lines.
    pub max_suggested_actions: usize,
    pub max_action_title_length: usize,
    /// Separator between inline items (`", "`).
    pub inline_separator: String,
    /// Separator for exactly two inline items (`" or "`).
    pub inline_or: String,
    /// Separator before the last of three or more inline items (`", or "`).
    pub inline_or_more: String,
    /// Prefix inline items with `(n)`.
    pub include_numbers: bool,
}

impl Default for ChoicePromptConfig {
    fn default() -> Self {
        Self {
            style: ListStyle::Auto,
            threshold: DEFAULT_THRESHOLD,
            max_suggested_actions: DEFAULT_MAX_SUGGESTED_ACTIONS,
            max_action_title_length: DEFAULT_MAX_ACTION_TITLE_LENGTH,
            inline_separator: ", ".to_string(),
            inline_or: " or ".to_string(),
            inline_or_more: ", or ".to_string(),
            include_numbers: false,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| PromptError::Config(format!("{} has an invalid value: {}", name, raw))),
        _ => Ok(None),
    }
}

impl ChoicePromptConfig {
    /// Defaults with the given style.
    pub fn with_style(style: ListStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Load from environment: `PROMPT_LIST_STYLE`, `PROMPT_MATCH_THRESHOLD`,
    /// `PROMPT_MAX_SUGGESTED_ACTIONS`, `PROMPT_MAX_ACTION_TITLE_LENGTH`. Unset variables keep defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(style) = parse_var::<ListStyle>("PROMPT_LIST_STYLE")? {
            config.style = style;
        }
        if let Some(threshold) = parse_var::<f32>("PROMPT_MATCH_THRESHOLD")? {
            config.threshold = threshold;
        }
        if let Some(max) = parse_var::<usize>("PROMPT_MAX_SUGGESTED_ACTIONS")? {
            config.max_suggested_actions = max;
        }
        if let Some(max) = parse_var::<usize>("PROMPT_MAX_ACTION_TITLE_LENGTH")? {
            config.max_action_title_length = max;
        }
        config.validate()?;
        Ok(config)
    }

    /// Rejects thresholds outside `(0, 1]` and an explicit suggested-action style with a zero button cap.
    pub fn validate(&self) -> Result<()> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(PromptError::Config(format!(
                "threshold must be in (0, 1], got {}",
                self.threshold
            )));
        }
        if self.style == ListStyle::SuggestedAction && self.max_suggested_actions == 0 {
            return Err(PromptError::Config(
                "suggestedAction style requires max_suggested_actions > 0".to_string(),
            ));
        }
        Ok(())
    }
}
