//! Line-based console transport: stdin lines become inbound activities, outbound activities become
//! printable text.

use std::path::Path;

use turn_core::{Activity, Attachment};

/// Prefix marking a whitespace-separated token as a file attachment.
pub const FILE_PREFIX: &str = "file:";

/// Parses one input line into an inbound message.
///
/// `file:<path>` tokens become attachments (named after the file, content type from the
/// extension); the remaining tokens form the text. A line of only file tokens has no text.
pub fn parse_line(line: &str) -> Activity {
    let mut activity = Activity::message();
    let mut words = Vec::new();
    for token in line.split_whitespace() {
        match token.strip_prefix(FILE_PREFIX) {
            Some(path) if !path.is_empty() => {
                activity = activity.with_attachment(file_attachment(path));
            }
            _ => words.push(token),
        }
    }
    if !words.is_empty() {
        activity.text = Some(words.join(" "));
    }
    activity.timestamp = Some(chrono::Utc::now());
    activity
}

fn file_attachment(path: &str) -> Attachment {
    let p = Path::new(path);
    let content_type = match p.extension().and_then(|e| e.to_str()).map(str::to_lowercase) {
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "gif" => "image/gif",
        Some(ext) if ext == "pdf" => "application/pdf",
        Some(ext) if ext == "txt" => "text/plain",
        _ => "application/octet-stream",
    };
    let mut attachment = Attachment::new(content_type).with_content_url(path);
    if let Some(name) = p.file_name().and_then(|n| n.to_str()) {
        attachment = attachment.with_name(name);
    }
    attachment
}

/// Formats an outbound activity for the terminal: text, then buttons as `[title]`.
pub fn render_activity(activity: &Activity) -> String {
    let mut out = activity.text.clone().unwrap_or_default();
    if let Some(suggested) = &activity.suggested_actions {
        let buttons: Vec<String> = suggested
            .actions
            .iter()
            .map(|a| format!("[{}]", a.title))
            .collect();
        if !buttons.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&buttons.join(" "));
        }
    }
    for attachment in &activity.attachments {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!(
            "<{}: {}>",
            attachment.content_type,
            attachment.name.as_deref().unwrap_or("unnamed")
        ));
    }
    out
}
