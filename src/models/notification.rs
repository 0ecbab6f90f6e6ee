use serde::{Deserialize, Serialize};

/// Display category of a notification. Styling concern only, no retry or
/// escalation semantics attached.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
    Price,
}

/// An ephemeral user-facing message. Lives at most 4 seconds, at most 5
/// on screen at once (see NotificationQueue).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub created_at: i64,
}
