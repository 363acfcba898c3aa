//! Attachment extraction from the inbound activity of a turn.

use turn_core::{Attachment, Turn};

/// Returns the attachments of the turn's inbound activity, in order.
///
/// Never fails: a missing request or an activity without attachments yields an empty vector.
/// No filtering by content type happens here; that is a validator's job.
pub fn extract_attachments(turn: &dyn Turn) -> Vec<Attachment> {
    turn.activity()
        .map(|activity| activity.attachments.clone())
        .unwrap_or_default()
}
