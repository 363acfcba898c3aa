//! # Choice rendering
//!
//! Builds the outgoing activity for a choice prompt in one of the [`ListStyle`]s.
//!
//! ## Format
//!
//! - **none**: `{text}`
//! - **inline**: `{text} red, green, or blue` (`(1) red, (2) green, or (3) blue` with numbers)
//! - **list**: `{text}\n\n   1. red\n   2. green\n   3. blue`
//! - **suggestedAction**: `{text}` plus one `imBack` button per choice; choices past the button cap
//!   continue as numbered lines (`   11. ...`).
//! - **auto**: suggestedAction when every title fits and the count is within the cap, else list.
//!
//! Every rendering uses the display values and 1-based ordinals the matcher recognizes, so any
//! rendered option can be typed back verbatim.

use tracing::debug;
use turn_core::{Activity, CardAction};

use crate::choice::Choice;
use crate::config::ChoicePromptConfig;
use crate::input::PromptInput;
use crate::style::ListStyle;

/// Resolves [`ListStyle::Auto`] to a concrete style for these choices. Other styles pass through.
pub fn resolve_style(style: ListStyle, choices: &[Choice], config: &ChoicePromptConfig) -> ListStyle {
    match style {
        ListStyle::Auto => {
            let long_titles = choices
                .iter()
                .any(|c| c.title().chars().count() > config.max_action_title_length);
            if !choices.is_empty() && !long_titles && choices.len() <= config.max_suggested_actions {
                ListStyle::SuggestedAction
            } else {
                ListStyle::List
            }
        }
        other => other,
    }
}

/// Renders a prompt for `choices` using the style in `config`.
///
/// Text input becomes a fresh message activity. A template activity keeps its text and fields;
/// `speak` fills in only when the template has none, and buttons are added only when the resolved
/// style is suggestedAction, the template has none, and all choices fit under the cap.
pub fn render(
    choices: &[Choice],
    input: &PromptInput,
    speak: Option<&str>,
    config: &ChoicePromptConfig,
) -> Activity {
    let style = resolve_style(config.style, choices, config);
    debug!(
        configured = %config.style,
        resolved = %style,
        choices = choices.len(),
        "resolved list style"
    );
    match input {
        PromptInput::Text(text) => {
            let text = text.as_str();
            match style {
                ListStyle::None => none(text, speak),
                ListStyle::Inline => inline(choices, text, speak, config),
                ListStyle::List | ListStyle::Auto => list(choices, text, speak),
                ListStyle::SuggestedAction => {
                    suggested_action(choices, text, speak, config.max_suggested_actions)
                }
            }
        }
        PromptInput::Activity(template) => {
            let mut activity = template.clone();
            if activity.speak.is_none() {
                activity.speak = speak.map(str::to_string);
            }
            if style == ListStyle::SuggestedAction
                && activity.suggested_actions.is_none()
                && !choices.is_empty()
                && choices.len() <= config.max_suggested_actions
            {
                activity = activity.with_suggested_actions(choices.iter().map(to_action).collect());
            }
            activity
        }
    }
}

fn message(text: String, speak: Option<&str>) -> Activity {
    let activity = Activity::text(text);
    match speak {
        Some(speak) => activity.with_speak(speak),
        None => activity,
    }
}

/// Prompt text verbatim.
pub fn none(text: &str, speak: Option<&str>) -> Activity {
    message(text.to_string(), speak)
}

/// Prompt text followed by the choices on the same line.
pub fn inline(
    choices: &[Choice],
    text: &str,
    speak: Option<&str>,
    config: &ChoicePromptConfig,
) -> Activity {
    let items: Vec<String> = choices
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if config.include_numbers {
                format!("({}) {}", i + 1, c.value)
            } else {
                c.value.clone()
            }
        })
        .collect();

    let joined = match items.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{}{}{}", first, config.inline_or, second),
        [rest @ .., last] => format!(
            "{}{}{}",
            rest.join(config.inline_separator.as_str()),
            config.inline_or_more,
            last
        ),
    };

    let out = match (text.is_empty(), joined.is_empty()) {
        (_, true) => text.to_string(),
        (true, false) => joined,
        (false, false) => format!("{} {}", text, joined),
    };
    message(out, speak)
}

/// Numbered lines starting at `first_number`.
fn numbered_lines(choices: &[Choice], first_number: usize) -> String {
    choices
        .iter()
        .enumerate()
        .map(|(i, c)| format!("   {}. {}", first_number + i, c.value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn append_block(text: &str, block: &str) -> String {
    if block.is_empty() {
        text.to_string()
    } else if text.is_empty() {
        block.to_string()
    } else {
        format!("{}\n\n{}", text, block)
    }
}

/// Prompt text followed by a numbered vertical list.
pub fn list(choices: &[Choice], text: &str, speak: Option<&str>) -> Activity {
    message(append_block(text, &numbered_lines(choices, 1)), speak)
}

fn to_action(choice: &Choice) -> CardAction {
    choice
        .action
        .clone()
        .unwrap_or_else(|| CardAction::im_back(&choice.value, &choice.value))
}

/// Prompt text with one button per choice, up to `max_actions`; the rest are appended as numbered lines.
pub fn suggested_action(
    choices: &[Choice],
    text: &str,
    speak: Option<&str>,
    max_actions: usize,
) -> Activity {
    let split = choices.len().min(max_actions);
    let (buttons, overflow) = choices.split_at(split);
    let body = append_block(text, &numbered_lines(overflow, split + 1));
    let activity = message(body, speak);
    if buttons.is_empty() {
        activity
    } else {
        activity.with_suggested_actions(buttons.iter().map(to_action).collect())
    }
}
