use super::IReminderRepo;
use note_reminders_domain::{NewReminder, Reminder, ID};
use sqlx::{FromRow, SqlitePool};
use tracing::error;

pub struct SqliteReminderRepo {
    pool: SqlitePool,
}

impl SqliteReminderRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    id: i64,
    note_id: i64,
    name: String,
    date: i64,
}

impl From<ReminderRaw> for Reminder {
    fn from(raw: ReminderRaw) -> Self {
        Reminder {
            id: raw.id.into(),
            note_id: raw.note_id.into(),
            name: raw.name,
            date: raw.date,
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for SqliteReminderRepo {
    async fn insert(&self, reminder: &NewReminder) -> anyhow::Result<Reminder> {
        let raw: ReminderRaw = sqlx::query_as(
            r#"
            INSERT INTO reminders
            (note_id, name, date)
            VALUES(?1, ?2, ?3)
            RETURNING *
            "#,
        )
        .bind(reminder.note_id.inner())
        .bind(&reminder.name)
        .bind(reminder.date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to insert reminder {:?}. DB returned error: {:?}", reminder, e);
            e
        })?;

        Ok(raw.into())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE reminders
            SET note_id = ?2,
            name = ?3,
            date = ?4
            WHERE id = ?1
            "#,
        )
        .bind(reminder.id.inner())
        .bind(reminder.note_id.inner())
        .bind(&reminder.name)
        .bind(reminder.date)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to save reminder {:?}. DB returned error: {:?}", reminder, e);
            e
        })?;

        Ok(res.rows_affected() > 0)
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let raw: Option<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.id = ?1
            "#,
        )
        .bind(reminder_id.inner())
        .fetch_optional(&self.pool)
        .await?;

        Ok(raw.map(|r| r.into()))
    }

    async fn find_by_note(&self, note_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        let raws: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.note_id = ?1
            ORDER BY r.id
            "#,
        )
        .bind(note_id.inner())
        .fetch_all(&self.pool)
        .await?;

        Ok(raws.into_iter().map(|r| r.into()).collect())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let raws: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders AS r
            ORDER BY r.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(raws.into_iter().map(|r| r.into()).collect())
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let raw: Option<ReminderRaw> = sqlx::query_as(
            r#"
            DELETE FROM reminders
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner())
        .fetch_optional(&self.pool)
        .await?;

        Ok(raw.map(|r| r.into()))
    }
}
