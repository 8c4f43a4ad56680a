use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use note_reminders_domain::{NewReminder, Reminder, ID};
use std::sync::atomic::{AtomicI64, Ordering};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
    last_id: AtomicI64,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
            last_id: AtomicI64::new(0),
        }
    }
}

impl Default for InMemoryReminderRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &NewReminder) -> anyhow::Result<Reminder> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let reminder = reminder.clone().into_reminder(ID::new(id));
        insert(&reminder, &self.reminders);
        Ok(reminder)
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<bool> {
        Ok(save(reminder, &self.reminders))
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(find(reminder_id, &self.reminders))
    }

    async fn find_by_note(&self, note_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |r| r.note_id == *note_id))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |_| true))
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(delete(reminder_id, &self.reminders))
    }
}
