//! Attachment prompt: asks the user to upload something, then recognizes the uploaded attachments.

use std::sync::Arc;

use tracing::{info, instrument};
use turn_core::{Activity, Attachment, Result, Turn};

use crate::attachment::extract_attachments;
use crate::input::PromptInput;
use crate::validator::{PassThrough, Validator};

/// Stateless between turns; see [`crate::dialog`] for caller-owned prompt state.
#[derive(Clone)]
pub struct AttachmentPrompt {
    validator: Arc<dyn Validator<Vec<Attachment>>>,
}

impl Default for AttachmentPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl AttachmentPrompt {
    /// Creates a prompt with a pass-through validator.
    pub fn new() -> Self {
        Self {
            validator: Arc::new(PassThrough),
        }
    }

    /// Replaces the validator.
    pub fn with_validator(mut self, validator: impl Validator<Vec<Attachment>> + 'static) -> Self {
        self.validator = Arc::new(validator);
        self
    }

    /// Sends exactly one activity. A template keeps its fields; `speak` fills in only when absent.
    #[instrument(skip(self, turn, input, speak))]
    pub async fn prompt(
        &self,
        turn: &dyn Turn,
        input: impl Into<PromptInput>,
        speak: Option<&str>,
    ) -> Result<()> {
        let mut activity = match input.into() {
            PromptInput::Text(text) => Activity::text(text),
            PromptInput::Activity(template) => template,
        };
        if activity.speak.is_none() {
            activity.speak = speak.map(str::to_string);
        }
        turn.send_activity(activity).await?;
        info!("step: attachment prompt sent");
        Ok(())
    }

    /// Collects the turn's attachments, then returns whatever the validator returns.
    ///
    /// The candidate is `None` when the turn carries no attachments (or no request at all).
    #[instrument(skip(self, turn))]
    pub async fn recognize(&self, turn: &dyn Turn) -> Result<Option<Vec<Attachment>>> {
        let attachments = extract_attachments(turn);
        info!(count = attachments.len(), "step: attachments extracted");

        let candidate = if attachments.is_empty() {
            None
        } else {
            Some(attachments)
        };
        let result = self.validator.validate(turn, candidate).await?;
        info!(recognized = result.is_some(), "step: attachments validated");
        Ok(result)
    }
}
