//! What a caller hands to `prompt()`: plain text, or a complete activity used as a template.

use turn_core::Activity;

#[derive(Debug, Clone, PartialEq)]
pub enum PromptInput {
    /// Prompt text; the renderer builds the activity around it.
    Text(String),
    /// Caller-built activity. Its fields are never overwritten, only supplemented.
    Activity(Activity),
}

impl From<&str> for PromptInput {
    fn from(text: &str) -> Self {
        PromptInput::Text(text.to_string())
    }
}

impl From<String> for PromptInput {
    fn from(text: String) -> Self {
        PromptInput::Text(text)
    }
}

impl From<Activity> for PromptInput {
    fn from(activity: Activity) -> Self {
        PromptInput::Activity(activity)
    }
}
