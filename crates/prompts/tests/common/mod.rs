//! Shared helpers for prompt integration tests: inbound turns and a validator that records its calls.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use prompts::Validator;
use turn_core::{Activity, MemoryTurn, Result, Turn};

/// A turn whose inbound activity is a text message.
pub fn text_turn(text: &str) -> MemoryTurn {
    MemoryTurn::new(Activity::text(text))
}

/// Validator that counts calls, records every candidate, and returns a fixed decision.
pub struct RecordingValidator<T> {
    pub calls: Arc<AtomicUsize>,
    pub seen: Arc<Mutex<Vec<Option<T>>>>,
    /// When true the candidate is returned unchanged; otherwise `None`.
    accept: bool,
    /// Optional reply sent through the turn on every call.
    reply: Option<String>,
}

impl<T> RecordingValidator<T> {
    pub fn accepting() -> Self {
        Self::new(true)
    }

    pub fn rejecting() -> Self {
        Self::new(false)
    }

    fn new(accept: bool) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            seen: Arc::new(Mutex::new(Vec::new())),
            accept,
            reply: None,
        }
    }

    pub fn with_reply(mut self, reply: &str) -> Self {
        self.reply = Some(reply.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<T> Clone for RecordingValidator<T> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
            seen: self.seen.clone(),
            accept: self.accept,
            reply: self.reply.clone(),
        }
    }
}

#[async_trait]
impl<T: Clone + Send + 'static> Validator<T> for RecordingValidator<T> {
    async fn validate(&self, turn: &dyn Turn, candidate: Option<T>) -> Result<Option<T>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(candidate.clone());
        if let Some(reply) = &self.reply {
            turn.send_activity(Activity::text(reply.as_str())).await?;
        }
        Ok(if self.accept { candidate } else { None })
    }
}
