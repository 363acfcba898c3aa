//! Turn abstraction: the inbound activity of one conversation turn plus a way to send replies.
//!
//! [`Turn`] is transport-agnostic; [`MemoryTurn`] implements it by buffering outbound activities
//! so a caller (console harness, test, batching adapter) can deliver them afterwards.

use crate::error::Result;
use crate::types::Activity;
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One inbound/outbound cycle. Owned by the transport for the duration of a call; prompts never retain it.
#[async_trait]
pub trait Turn: Send + Sync {
    /// The inbound activity for this turn. `None` when the transport delivered no request.
    fn activity(&self) -> Option<&Activity>;
    /// Sends activities back to the user, in order.
    async fn send_activities(&self, activities: Vec<Activity>) -> Result<()>;
    /// Sends a single activity.
    async fn send_activity(&self, activity: Activity) -> Result<()> {
        self.send_activities(vec![activity]).await
    }
}

/// [`Turn`] that keeps sent activities in memory.
#[derive(Debug, Default)]
pub struct MemoryTurn {
    request: Option<Activity>,
    sent: Mutex<Vec<Activity>>,
}

impl MemoryTurn {
    /// Creates a turn for the given inbound activity.
    pub fn new(request: Activity) -> Self {
        Self {
            request: Some(request),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Creates a turn with no inbound activity.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a copy of every activity sent so far.
    pub fn sent(&self) -> Vec<Activity> {
        self.buffer().clone()
    }

    /// Drains and returns the sent activities.
    pub fn take_sent(&self) -> Vec<Activity> {
        std::mem::take(&mut *self.buffer())
    }

    /// Locks the outbound buffer, ignoring poison: it only ever holds completed sends.
    fn buffer(&self) -> MutexGuard<'_, Vec<Activity>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Turn for MemoryTurn {
    fn activity(&self) -> Option<&Activity> {
        self.request.as_ref()
    }

    async fn send_activities(&self, activities: Vec<Activity>) -> Result<()> {
        self.buffer().extend(activities);
        Ok(())
    }
}
