mod inmemory;
mod tokio_alarm;

pub use inmemory::{AlarmCall, InMemoryAlarmPort};
use note_reminders_domain::ID;
pub use tokio_alarm::TokioAlarmPort;
use tokio::sync::mpsc::UnboundedReceiver;

/// What is delivered back when an arming fires
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlarmTrigger {
    pub reminder_id: ID,
    pub note_id: ID,
}

/// Fired triggers are delivered on this channel, in the order they fired
pub type FiredTriggerReceiver = UnboundedReceiver<AlarmTrigger>;

/// The facility that is able to wake the process at a wall-clock instant.
///
/// The armed set is partitioned by `reminder_id`: there is at most one
/// arming per `Reminder` and operations on different ids never interact.
pub trait IAlarmPort: Send + Sync {
    /// Arms `trigger` to fire at `fire_at` epoch seconds. Arming an already
    /// armed `reminder_id` replaces the previous arming
    fn arm(&self, trigger: AlarmTrigger, fire_at: i64);
    /// Disarming an id that is not armed does nothing
    fn disarm(&self, reminder_id: &ID);
}
