//! # prompts-cli
//!
//! Console harness for the prompts crate: argument parsing, prompt construction, and a line-based
//! console transport where each stdin line is one inbound turn.

pub mod cli;
pub mod console;

pub use cli::{build_choice_prompt, Cli, Commands};
pub use console::{parse_line, render_activity};
