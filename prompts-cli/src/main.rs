//! prompt-demo: asks one question on the console and loops until the answer is recognized.
//! Each stdin line is one turn; the dialog state lives here, not in the prompt.

use anyhow::{Context, Result};
use clap::Parser;
use prompts::{
    step, to_choices, AttachmentPrompt, AttachmentQuestion, ChoiceQuestion, PromptState, Question,
    StepOutcome,
};
use prompts_cli::{build_choice_prompt, parse_line, render_activity, Cli, Commands};
use std::fmt::Debug;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use turn_core::{init_tracing, MemoryTurn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let log_file = std::env::var("LOG_FILE").ok();
    init_tracing(log_file.as_deref())?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Choice {
            choices,
            text,
            style,
            threshold,
            speak,
        } => {
            let prompt = build_choice_prompt(style, threshold)?;
            let mut question = ChoiceQuestion::new(prompt, to_choices(choices), text);
            if let Some(speak) = speak {
                question = question.with_speak(speak);
            }
            run(&question).await
        }
        Commands::Attachment { text } => {
            let question = AttachmentQuestion::new(AttachmentPrompt::new(), text);
            run(&question).await
        }
    }
}

/// Flushes whatever the prompt sent during a turn to stdout.
fn print_sent(turn: &MemoryTurn) {
    for activity in turn.take_sent() {
        println!("bot> {}", render_activity(&activity).replace('\n', "\n     "));
    }
}

async fn run<Q>(question: &Q) -> Result<()>
where
    Q: Question,
    Q::Value: Debug,
{
    let opening = MemoryTurn::empty();
    let (mut state, _) = step(question, &opening, PromptState::Idle).await?;
    print_sent(&opening);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Read stdin")? {
        let turn = MemoryTurn::new(parse_line(&line));
        let (next, outcome) = step(question, &turn, state).await?;
        print_sent(&turn);
        state = next;

        match outcome {
            StepOutcome::Recognized(value) => {
                info!(?value, "step: demo finished");
                println!("recognized: {:?}", value);
                return Ok(());
            }
            StepOutcome::NotRecognized => {
                // Re-prompting is this caller's policy, not the prompt's.
                println!("bot> Sorry, I didn't get that.");
                let retry = MemoryTurn::empty();
                question.ask(&retry).await?;
                print_sent(&retry);
            }
            StepOutcome::Prompted => {}
        }
    }

    println!("no answer recognized before end of input");
    Ok(())
}
