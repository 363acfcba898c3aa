//! Integration tests for [`prompts::ChoicePrompt`].
//!
//! Covers: rendering in every list style (text and template prompts, with and without speak),
//! recognizing by value and by ordinal, rejecting unrelated text, and the validator contract
//! (called exactly once, including when nothing was recognized; its result is final).

mod common;

use common::{text_turn, RecordingValidator};
use prompts::{
    factory, to_choices, Choice, ChoicePrompt, ChoicePromptConfig, FnValidator, FoundChoice,
    ListStyle,
};
use turn_core::{Activity, MemoryTurn, Turn};

fn colors() -> Vec<Choice> {
    to_choices(["red", "green", "blue"])
}

/// Prompts once on an empty turn and returns the single sent activity.
async fn sent_prompt(prompt: &ChoicePrompt, input: impl Into<prompts::PromptInput>, speak: Option<&str>) -> Activity {
    let turn = MemoryTurn::empty();
    prompt.prompt(&turn, &colors(), input, speak).await.unwrap();
    let mut sent = turn.take_sent();
    assert_eq!(sent.len(), 1, "prompt must send exactly one activity");
    sent.remove(0)
}

/// **Test: style none sends the prompt text verbatim with no enumeration.**
#[tokio::test]
async fn test_send_prompt_with_style_none() {
    let prompt = ChoicePrompt::with_style(ListStyle::None);
    let activity = sent_prompt(&prompt, "favorite color?", None).await;
    assert_eq!(activity.text.as_deref(), Some("favorite color?"));
    assert!(activity.speak.is_none());
    assert!(activity.suggested_actions.is_none());
}

/// **Test: style none with speak attaches the spoken form and still adds no list.**
#[tokio::test]
async fn test_send_prompt_without_list_but_with_ssml() {
    let prompt = ChoicePrompt::with_style(ListStyle::None);
    let activity = sent_prompt(&prompt, "favorite color?", Some("spoken prompt")).await;
    assert_eq!(activity.text.as_deref(), Some("favorite color?"));
    assert_eq!(activity.speak.as_deref(), Some("spoken prompt"));
}

/// **Test: inline style appends `red, green, or blue`.**
#[tokio::test]
async fn test_send_prompt_as_inline_list() {
    let prompt = ChoicePrompt::with_style(ListStyle::Inline);
    let activity = sent_prompt(&prompt, "favorite color?", None).await;
    assert_eq!(activity.text.as_deref(), Some("favorite color? red, green, or blue"));
}

/// **Test: list style appends a 1-based numbered list.**
#[tokio::test]
async fn test_send_prompt_as_numbered_list() {
    let prompt = ChoicePrompt::with_style(ListStyle::List);
    let activity = sent_prompt(&prompt, "favorite color?", None).await;
    assert_eq!(
        activity.text.as_deref(),
        Some("favorite color?\n\n   1. red\n   2. green\n   3. blue")
    );
}

/// **Test: suggestedAction style keeps the text and adds one button per choice, in order.**
#[tokio::test]
async fn test_send_prompt_using_suggested_actions() {
    let prompt = ChoicePrompt::with_style(ListStyle::SuggestedAction);
    let activity = sent_prompt(&prompt, "favorite color?", None).await;
    assert_eq!(activity.text.as_deref(), Some("favorite color?"));
    let titles: Vec<_> = activity
        .suggested_actions
        .unwrap()
        .actions
        .into_iter()
        .map(|a| a.title)
        .collect();
    assert_eq!(titles, vec!["red", "green", "blue"]);
}

/// **Test: an activity template is sent with its text untouched; speak is added when given.**
#[tokio::test]
async fn test_send_activity_based_prompt_with_ssml() {
    let prompt = ChoicePrompt::new();
    let activity = sent_prompt(&prompt, Activity::text("test"), Some("spoken test")).await;
    assert_eq!(activity.text.as_deref(), Some("test"));
    assert_eq!(activity.speak.as_deref(), Some("spoken test"));

    let plain = sent_prompt(&ChoicePrompt::with_style(ListStyle::None), Activity::text("test"), None).await;
    assert_eq!(plain, Activity::text("test"));
}

/// **Test: recognize a choice by its display value.**
///
/// **Setup:** choices red/green/blue, style none. **Action:** reply "green".
/// **Expected:** value "green", index 1.
#[tokio::test]
async fn test_recognize_a_choice() {
    let prompt = ChoicePrompt::with_style(ListStyle::None);
    let found = prompt
        .recognize(&text_turn("green"), &colors())
        .await
        .unwrap()
        .expect("green should be recognized");
    assert_eq!(found.value, "green");
    assert_eq!(found.index, 1);
}

/// **Test: recognize a choice by the ordinal shown in a numbered list.**
#[tokio::test]
async fn test_recognize_ordinal_from_list() {
    let prompt = ChoicePrompt::with_style(ListStyle::List);
    let found = prompt
        .recognize(&text_turn("2"), &colors())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.value, "green");
    assert_eq!(found.index, 1);
}

/// **Test: every numbered line rendered by list style parses back to its choice.**
#[tokio::test]
async fn test_list_rendering_round_trips_through_recognize() {
    let prompt = ChoicePrompt::with_style(ListStyle::List);
    let choices = to_choices(["red", "light green", "blue", "dark green"]);
    let turn = MemoryTurn::empty();
    prompt.prompt(&turn, &choices, "favorite color?", None).await.unwrap();
    let text = turn.take_sent().remove(0).text.unwrap();

    for (expected, line) in text.lines().skip(2).enumerate() {
        let number = line.trim().split('.').next().unwrap();
        let found = prompt
            .recognize(&text_turn(number), &choices)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.index, expected);

        let whole_line = prompt
            .recognize(&text_turn(line), &choices)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(whole_line.index, expected);
    }
}

/// **Test: unrelated text is not recognized.**
#[tokio::test]
async fn test_not_recognize_other_text() {
    let prompt = ChoicePrompt::with_style(ListStyle::None);
    let found = prompt.recognize(&text_turn("purple"), &colors()).await.unwrap();
    assert!(found.is_none());
}

/// **Test: ambiguous input is not recognized.**
#[tokio::test]
async fn test_ambiguous_reply_is_not_recognized() {
    let prompt = ChoicePrompt::new();
    let choices = to_choices(["light blue", "dark blue"]);
    let found = prompt.recognize(&text_turn("blue"), &choices).await.unwrap();
    assert!(found.is_none());
}

/// **Test: a custom validator is called once with the recognized candidate; returning None wins.**
#[tokio::test]
async fn test_call_custom_validator() {
    let validator = RecordingValidator::<FoundChoice>::rejecting();
    let prompt = ChoicePrompt::with_style(ListStyle::None).with_validator(validator.clone());

    let found = prompt.recognize(&text_turn("red"), &colors()).await.unwrap();

    assert!(found.is_none(), "validator result must be final");
    assert_eq!(validator.call_count(), 1);
    let seen = validator.seen.lock().unwrap();
    assert_eq!(seen[0].as_ref().map(|f| f.value.as_str()), Some("red"));
}

/// **Test: the validator still runs when nothing was recognized, and may reply through the turn.**
#[tokio::test]
async fn test_validator_called_on_failed_recognition() {
    let validator = RecordingValidator::<FoundChoice>::accepting().with_reply("I didn't understand.");
    let prompt = ChoicePrompt::new().with_validator(validator.clone());
    let turn = text_turn("purple");

    let found = prompt.recognize(&turn, &colors()).await.unwrap();

    assert!(found.is_none());
    assert_eq!(validator.call_count(), 1);
    assert!(validator.seen.lock().unwrap()[0].is_none());
    assert_eq!(turn.sent()[0].text.as_deref(), Some("I didn't understand."));
}

/// **Test: a turn with no request is handled; the validator sees None.**
#[tokio::test]
async fn test_handle_an_undefined_request() {
    let validator = RecordingValidator::<FoundChoice>::accepting();
    let prompt = ChoicePrompt::with_style(ListStyle::None).with_validator(validator.clone());

    let found = prompt.recognize(&MemoryTurn::empty(), &colors()).await.unwrap();

    assert!(found.is_none());
    assert_eq!(validator.call_count(), 1);
}

/// **Test: a closure validator can substitute a default when recognition fails.**
#[tokio::test]
async fn test_closure_validator_overrides_with_default() {
    let prompt = ChoicePrompt::new().with_validator(FnValidator::new(
        |_turn: &dyn Turn, found: Option<FoundChoice>| {
            found.or(Some(FoundChoice {
                value: "blue".to_string(),
                index: 2,
                score: 1.0,
                synonym: "default".to_string(),
            }))
        },
    ));
    let found = prompt.recognize(&text_turn("no idea"), &colors()).await.unwrap().unwrap();
    assert_eq!(found.value, "blue");
}

/// **Test: a stricter configured threshold rejects partial matches the default accepts.**
#[tokio::test]
async fn test_configured_threshold() {
    let choices = to_choices(["light blue", "red"]);
    let lenient = ChoicePrompt::new();
    assert!(lenient.recognize(&text_turn("blue"), &choices).await.unwrap().is_some());

    let strict = ChoicePrompt::with_config(ChoicePromptConfig {
        threshold: 0.9,
        ..ChoicePromptConfig::default()
    })
    .unwrap();
    assert!(strict.recognize(&text_turn("blue"), &choices).await.unwrap().is_none());
}

/// **Test: auto style with many choices falls back to a numbered list.**
#[tokio::test]
async fn test_auto_style_falls_back_to_list() {
    let choices: Vec<Choice> = (1..=12).map(|i| Choice::new(format!("option {}", i))).collect();
    let config = ChoicePromptConfig::default();
    assert_eq!(factory::resolve_style(ListStyle::Auto, &choices, &config), ListStyle::List);

    let turn = MemoryTurn::empty();
    ChoicePrompt::new()
        .prompt(&turn, &choices, "pick one", None)
        .await
        .unwrap();
    let activity = turn.take_sent().remove(0);
    assert!(activity.suggested_actions.is_none());
    assert!(activity.text.unwrap().ends_with("   12. option 12"));
}
