mod inmemory;
mod sqlite;

pub use inmemory::InMemoryReminderRepo;
use note_reminders_domain::{NewReminder, Reminder, ID};
pub use sqlite::SqliteReminderRepo;

/// Durable store of `Reminder`s and the source of truth for which
/// `Reminder`s should be armed.
///
/// Every read is a point in time snapshot.
#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// Stores the `Reminder` and assigns it a new id. Ids are never reused
    async fn insert(&self, reminder: &NewReminder) -> anyhow::Result<Reminder>;
    /// Replaces a stored `Reminder`. Returns `false` when there was no
    /// `Reminder` with that id to replace
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<bool>;
    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    async fn find_by_note(&self, note_id: &ID) -> anyhow::Result<Vec<Reminder>>;
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>>;
    /// Deleting a `Reminder` that does not exist is not an error, it
    /// just returns `None`
    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
}
