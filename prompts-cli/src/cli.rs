//! CLI parser and prompt construction.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use prompts::{ChoicePrompt, ChoicePromptConfig, ListStyle};

#[derive(Parser)]
#[command(name = "prompt-demo")]
#[command(about = "Ask a question on the console and recognize the answer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask for one of a list of choices (config from PROMPT_* env; flags override).
    Choice {
        /// Comma-separated choices, e.g. "red,green,blue".
        #[arg(short, long, value_delimiter = ',', required = true)]
        choices: Vec<String>,
        #[arg(short, long, default_value = "Please choose one.")]
        text: String,
        /// none | inline | list | suggestedAction | auto
        #[arg(short, long)]
        style: Option<ListStyle>,
        #[arg(long)]
        threshold: Option<f32>,
        #[arg(long)]
        speak: Option<String>,
    },
    /// Ask for an attachment; reply with `file:<path>` tokens.
    Attachment {
        #[arg(short, long, default_value = "Please add an attachment.")]
        text: String,
    },
}

/// Loads [`ChoicePromptConfig`] from env, applies flag overrides, and builds the prompt.
pub fn build_choice_prompt(style: Option<ListStyle>, threshold: Option<f32>) -> Result<ChoicePrompt> {
    let mut config = ChoicePromptConfig::from_env().context("Load PROMPT_* settings from env")?;
    if let Some(style) = style {
        config.style = style;
    }
    if let Some(threshold) = threshold {
        config.threshold = threshold;
    }
    ChoicePrompt::with_config(config).context("Invalid choice prompt settings")
}
