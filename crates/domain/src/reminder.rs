use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// A `Reminder` is a single wall-clock trigger attached to a note.
///
/// A `Reminder` fires at most once. After it has fired, been cancelled or
/// been found stale at startup it is deleted from the store, there is no
/// state where a retired `Reminder` is kept around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Assigned by the store when the `Reminder` is created
    pub id: ID,
    /// The note this `Reminder` is attached to. Many `Reminder`s may
    /// point to the same note
    pub note_id: ID,
    /// Label shown in the notification body. This is a snapshot taken when
    /// the `Reminder` was saved and is not updated when the note changes
    pub name: String,
    /// Epoch seconds at which the `Reminder` should fire
    pub date: i64,
}

impl Reminder {
    /// A `Reminder` is stale when its trigger instant passed without it
    /// being fired, e.g. while the process was not running.
    /// A `Reminder` due exactly now is not stale.
    pub fn is_stale(&self, now_millis: i64) -> bool {
        self.date.saturating_mul(1000) < now_millis
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// A `Reminder` that has not been given an id by the store yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewReminder {
    pub note_id: ID,
    pub name: String,
    pub date: i64,
}

impl NewReminder {
    pub fn into_reminder(self, id: ID) -> Reminder {
        Reminder {
            id,
            note_id: self.note_id,
            name: self.name,
            date: self.date,
        }
    }
}
