//! Caller-owned prompt state.
//!
//! Prompts keep nothing between turns. A dialog manager that needs to know whether it is waiting
//! on an answer stores a [`PromptState`] itself (alongside its conversation state) and threads it
//! through [`step`], which either asks the question or recognizes the answer. `step` never
//! re-prompts on its own: after [`StepOutcome::NotRecognized`] the caller decides what to send.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use turn_core::{Attachment, Result, Turn};

use crate::attachment_prompt::AttachmentPrompt;
use crate::choice::{Choice, FoundChoice};
use crate::choice_prompt::ChoicePrompt;
use crate::input::PromptInput;

/// Whether a question is outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PromptState {
    #[default]
    Idle,
    AwaitingResponse,
}

/// What a [`step`] did this turn.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome<T> {
    /// The question was sent.
    Prompted,
    /// The answer was recognized (and accepted by the validator).
    Recognized(T),
    /// The answer was not recognized or was rejected; still awaiting a response.
    NotRecognized,
}

/// A fully specified question: prompt plus everything needed to ask and recognize it.
#[async_trait]
pub trait Question: Send + Sync {
    type Value: Send;

    async fn ask(&self, turn: &dyn Turn) -> Result<()>;
    async fn answer(&self, turn: &dyn Turn) -> Result<Option<Self::Value>>;
}

/// Advances one turn from `state`. Returns the next state and what happened.
#[instrument(skip(question, turn))]
pub async fn step<Q>(
    question: &Q,
    turn: &dyn Turn,
    state: PromptState,
) -> Result<(PromptState, StepOutcome<Q::Value>)>
where
    Q: Question + ?Sized,
{
    match state {
        PromptState::Idle => {
            question.ask(turn).await?;
            info!("step: question asked, awaiting response");
            Ok((PromptState::AwaitingResponse, StepOutcome::Prompted))
        }
        PromptState::AwaitingResponse => match question.answer(turn).await? {
            Some(value) => {
                info!("step: answer recognized");
                Ok((PromptState::Idle, StepOutcome::Recognized(value)))
            }
            None => {
                info!("step: answer not recognized");
                Ok((PromptState::AwaitingResponse, StepOutcome::NotRecognized))
            }
        },
    }
}

/// A choice prompt bound to its choices and prompt text.
#[derive(Clone)]
pub struct ChoiceQuestion {
    pub prompt: ChoicePrompt,
    pub choices: Vec<Choice>,
    pub input: PromptInput,
    pub speak: Option<String>,
}

impl ChoiceQuestion {
    pub fn new(prompt: ChoicePrompt, choices: Vec<Choice>, input: impl Into<PromptInput>) -> Self {
        Self {
            prompt,
            choices,
            input: input.into(),
            speak: None,
        }
    }

    pub fn with_speak(mut self, speak: impl Into<String>) -> Self {
        self.speak = Some(speak.into());
        self
    }
}

#[async_trait]
impl Question for ChoiceQuestion {
    type Value = FoundChoice;

    async fn ask(&self, turn: &dyn Turn) -> Result<()> {
        self.prompt
            .prompt(turn, &self.choices, self.input.clone(), self.speak.as_deref())
            .await
    }

    async fn answer(&self, turn: &dyn Turn) -> Result<Option<FoundChoice>> {
        self.prompt.recognize(turn, &self.choices).await
    }
}

/// An attachment prompt bound to its prompt text.
#[derive(Clone)]
pub struct AttachmentQuestion {
    pub prompt: AttachmentPrompt,
    pub input: PromptInput,
    pub speak: Option<String>,
}

impl AttachmentQuestion {
    pub fn new(prompt: AttachmentPrompt, input: impl Into<PromptInput>) -> Self {
        Self {
            prompt,
            input: input.into(),
            speak: None,
        }
    }
}

#[async_trait]
impl Question for AttachmentQuestion {
    type Value = Vec<Attachment>;

    async fn ask(&self, turn: &dyn Turn) -> Result<()> {
        self.prompt
            .prompt(turn, self.input.clone(), self.speak.as_deref())
            .await
    }

    async fn answer(&self, turn: &dyn Turn) -> Result<Option<Vec<Attachment>>> {
        self.prompt.recognize(turn).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::to_choices;
    use crate::style::ListStyle;
    use turn_core::{Activity, MemoryTurn};

    fn color_question() -> ChoiceQuestion {
        ChoiceQuestion::new(
            ChoicePrompt::with_style(ListStyle::None),
            to_choices(["red", "green", "blue"]),
            "favorite color?",
        )
    }

    #[tokio::test]
    async fn test_idle_asks_and_awaits() {
        let question = color_question();
        let turn = MemoryTurn::new(Activity::text("hi"));
        let (state, outcome) = step(&question, &turn, PromptState::Idle).await.unwrap();
        assert_eq!(state, PromptState::AwaitingResponse);
        assert_eq!(outcome, StepOutcome::Prompted);
        assert_eq!(turn.sent()[0].text.as_deref(), Some("favorite color?"));
    }

    #[tokio::test]
    async fn test_awaiting_recognizes_and_returns_to_idle() {
        let question = color_question();
        let turn = MemoryTurn::new(Activity::text("blue"));
        let (state, outcome) = step(&question, &turn, PromptState::AwaitingResponse)
            .await
            .unwrap();
        assert_eq!(state, PromptState::Idle);
        match outcome {
            StepOutcome::Recognized(found) => assert_eq!(found.index, 2),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(turn.sent().is_empty());
    }

    #[tokio::test]
    async fn test_unrecognized_keeps_awaiting_without_reprompt() {
        let question = color_question();
        let turn = MemoryTurn::new(Activity::text("purple"));
        let (state, outcome) = step(&question, &turn, PromptState::AwaitingResponse)
            .await
            .unwrap();
        assert_eq!(state, PromptState::AwaitingResponse);
        assert_eq!(outcome, StepOutcome::NotRecognized);
        assert!(turn.sent().is_empty());
    }

    #[tokio::test]
    async fn test_attachment_question_steps() {
        let question = AttachmentQuestion::new(AttachmentPrompt::new(), "please add an attachment.");
        let turn = MemoryTurn::new(Activity::message().with_attachment(Attachment::new("foo")));
        let (state, outcome) = step(&question, &turn, PromptState::AwaitingResponse)
            .await
            .unwrap();
        assert_eq!(state, PromptState::Idle);
        assert_eq!(outcome, StepOutcome::Recognized(vec![Attachment::new("foo")]));
    }

    #[test]
    fn test_prompt_state_serializes() {
        let json = serde_json::to_string(&PromptState::AwaitingResponse).unwrap();
        assert_eq!(json, "\"awaitingResponse\"");
        assert_eq!(PromptState::default(), PromptState::Idle);
    }
}
