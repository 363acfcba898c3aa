//! # Prompts
//!
//! Reusable prompts for a turn-based conversational agent. A prompt renders a question on one
//! turn and recognizes a typed value from the reply on a later turn.
//!
//! - [`ChoicePrompt`]: presents a closed list of [`Choice`]s in a [`ListStyle`] and recognizes a
//!   [`FoundChoice`] from free text (display value, synonym, or 1-based ordinal).
//! - [`AttachmentPrompt`]: asks for an upload and recognizes the turn's attachments.
//!
//! Recognition never fails the call: a prompt returns `Ok(None)` for no input, no match,
//! ambiguity, or validator rejection, and the caller re-prompts. Every `recognize()` runs the
//! prompt's [`Validator`] exactly once, and its return value is the final result.
//!
//! Prompts hold only construction-time configuration. Turn sequencing lives with the caller,
//! optionally via [`dialog::step`] and a stored [`PromptState`].
//!
//! ## External interactions
//!
//! - **Transport**: activities go out through [`turn_core::Turn::send_activities`].

pub mod attachment;
pub mod attachment_prompt;
pub mod choice;
pub mod choice_prompt;
pub mod config;
pub mod dialog;
pub mod factory;
pub mod input;
pub mod matcher;
pub mod style;
pub mod tokenizer;
pub mod validator;

pub use attachment::extract_attachments;
pub use attachment_prompt::AttachmentPrompt;
pub use choice::{to_choices, Choice, FoundChoice};
pub use choice_prompt::ChoicePrompt;
pub use config::ChoicePromptConfig;
pub use dialog::{step, AttachmentQuestion, ChoiceQuestion, PromptState, Question, StepOutcome};
pub use input::PromptInput;
pub use matcher::{find_choice, match_choice, MatchOutcome, DEFAULT_THRESHOLD};
pub use style::ListStyle;
pub use tokenizer::tokenize;
pub use validator::{FnValidator, PassThrough, Validator};
