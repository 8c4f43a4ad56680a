use crate::shared::entity::ID;
use serde::{Deserialize, Serialize};

/// Where the user ends up when activating a notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "destination", rename_all = "camelCase")]
pub enum DeepLink {
    #[serde(rename_all = "camelCase")]
    NoteEditor {
        note_id: ID,
        /// Shared element transition to run when opening the editor.
        /// Empty when the editor is opened from outside the app
        transition_name: String,
    },
}

impl DeepLink {
    pub fn note_editor(note_id: ID) -> Self {
        Self::NoteEditor {
            note_id,
            transition_name: String::new(),
        }
    }

    pub fn to_uri(&self) -> String {
        match self {
            Self::NoteEditor { note_id, .. } => format!("notes://editor/{}", note_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    Default,
    High,
}

/// A one-shot notification produced when a `Reminder` fires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderNotification {
    /// Id of the `Reminder` that fired. Showing another notification
    /// with the same id replaces this one
    pub trigger_id: ID,
    pub channel_id: String,
    pub title: String,
    pub body: String,
    pub action: DeepLink,
    pub priority: NotificationPriority,
    /// Dismiss the notification when the user activates it
    pub auto_cancel: bool,
}

impl ReminderNotification {
    pub fn new(
        trigger_id: ID,
        channel_id: String,
        title: String,
        body: String,
        note_id: ID,
    ) -> Self {
        Self {
            trigger_id,
            channel_id,
            title,
            body,
            action: DeepLink::note_editor(note_id),
            priority: NotificationPriority::High,
            auto_cancel: true,
        }
    }
}
