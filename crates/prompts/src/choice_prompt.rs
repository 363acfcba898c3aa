//! Choice prompt: asks the user to pick one of a closed list of choices, then recognizes the pick.

use std::sync::Arc;

use tracing::{debug, info, instrument};
use turn_core::{Result, Turn};

use crate::choice::{Choice, FoundChoice};
use crate::config::ChoicePromptConfig;
use crate::factory;
use crate::input::PromptInput;
use crate::matcher::match_choice;
use crate::style::ListStyle;
use crate::validator::{PassThrough, Validator};

/// Stateless between turns: only the configuration and validator live on the instance, so one
/// prompt can serve concurrent turns. Whether a prompt is outstanding is the caller's state.
#[derive(Clone)]
pub struct ChoicePrompt {
    config: ChoicePromptConfig,
    validator: Arc<dyn Validator<FoundChoice>>,
}

impl Default for ChoicePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoicePrompt {
    /// Creates a prompt with default configuration (`auto` style) and a pass-through validator.
    pub fn new() -> Self {
        Self {
            config: ChoicePromptConfig::default(),
            validator: Arc::new(PassThrough),
        }
    }

    /// Creates a prompt with the given configuration. Fails when the configuration is invalid.
    pub fn with_config(config: ChoicePromptConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            validator: Arc::new(PassThrough),
        })
    }

    /// Shorthand for a default configuration with `style`.
    pub fn with_style(style: ListStyle) -> Self {
        Self {
            config: ChoicePromptConfig::with_style(style),
            validator: Arc::new(PassThrough),
        }
    }

    /// Replaces the validator.
    pub fn with_validator(mut self, validator: impl Validator<FoundChoice> + 'static) -> Self {
        self.validator = Arc::new(validator);
        self
    }

    pub fn config(&self) -> &ChoicePromptConfig {
        &self.config
    }

    pub fn style(&self) -> ListStyle {
        self.config.style
    }

    /// Sends exactly one activity presenting `choices` with the configured style.
    #[instrument(skip(self, turn, choices, input, speak), fields(style = %self.config.style, choices = choices.len()))]
    pub async fn prompt(
        &self,
        turn: &dyn Turn,
        choices: &[Choice],
        input: impl Into<PromptInput>,
        speak: Option<&str>,
    ) -> Result<()> {
        let input = input.into();
        let activity = factory::render(choices, &input, speak, &self.config);
        debug!(
            buttons = activity.suggested_actions.as_ref().map_or(0, |s| s.actions.len()),
            "step: choice prompt rendered"
        );
        turn.send_activity(activity).await?;
        info!("step: choice prompt sent");
        Ok(())
    }

    /// Matches the turn's text against `choices`, then returns whatever the validator returns.
    ///
    /// The validator runs exactly once, with `None` when nothing was recognized.
    #[instrument(skip(self, turn, choices), fields(choices = choices.len()))]
    pub async fn recognize(&self, turn: &dyn Turn, choices: &[Choice]) -> Result<Option<FoundChoice>> {
        let text = turn
            .activity()
            .filter(|a| a.is_message())
            .and_then(|a| a.text.as_deref());
        let outcome = match_choice(text, choices, self.config.threshold);
        info!(outcome = outcome.kind(), "step: choice matched");

        let candidate = outcome.found();
        let result = self.validator.validate(turn, candidate).await?;
        info!(
            recognized = result.is_some(),
            index = ?result.as_ref().map(|f| f.index),
            "step: choice validated"
        );
        Ok(result)
    }
}
