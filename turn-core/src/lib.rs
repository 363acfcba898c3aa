//! # turn-core
//!
//! Core types and traits for a single conversation turn: [`Turn`], [`Activity`], [`Attachment`],
//! suggested actions, and tracing initialization. Transport-agnostic; used by the prompts crate
//! and by any adapter that delivers activities.

pub mod error;
pub mod logger;
pub mod turn;
pub mod types;

pub use error::{PromptError, Result};
pub use logger::init_tracing;
pub use turn::{MemoryTurn, Turn};
pub use types::{Activity, ActivityKind, Attachment, CardAction, SuggestedActions};
