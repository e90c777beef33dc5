//! Task records as stored and as submitted by clients.

use nextdue_rule::TaskDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted reminder.
///
/// `repeat` holds the canonical rule text; an empty string means the task
/// does not repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub date: TaskDate,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

/// Task fields as received from a client, before validation.
///
/// Every field is optional on the wire; missing strings deserialize empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskDraft {
    pub id: String,
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}
