use super::{AlarmTrigger, IAlarmPort};
use note_reminders_domain::ID;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq)]
pub enum AlarmCall {
    Arm { trigger: AlarmTrigger, fire_at: i64 },
    Disarm { reminder_id: ID },
}

#[derive(Default)]
struct State {
    calls: Vec<AlarmCall>,
    armed: HashMap<ID, (AlarmTrigger, i64)>,
}

/// Alarm port that never fires by itself. It keeps a log of every call
/// so that the order of arm and disarm can be inspected, and armed
/// triggers can be fired by hand.
#[derive(Default)]
pub struct InMemoryAlarmPort {
    state: Mutex<State>,
}

impl InMemoryAlarmPort {
    pub fn new() -> Self {
        Default::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn calls(&self) -> Vec<AlarmCall> {
        self.state().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    /// The instant the `Reminder` is armed for, if it is armed
    pub fn armed_at(&self, reminder_id: &ID) -> Option<i64> {
        self.state().armed.get(reminder_id).map(|(_, fire_at)| *fire_at)
    }

    pub fn armed_count(&self) -> usize {
        self.state().armed.len()
    }

    /// Fires the arming for `reminder_id`. Returns `None` if it was not armed
    pub fn fire(&self, reminder_id: &ID) -> Option<AlarmTrigger> {
        self.state()
            .armed
            .remove(reminder_id)
            .map(|(trigger, _)| trigger)
    }
}

impl IAlarmPort for InMemoryAlarmPort {
    fn arm(&self, trigger: AlarmTrigger, fire_at: i64) {
        let mut state = self.state();
        state.calls.push(AlarmCall::Arm { trigger, fire_at });
        state.armed.insert(trigger.reminder_id, (trigger, fire_at));
    }

    fn disarm(&self, reminder_id: &ID) {
        let mut state = self.state();
        state.calls.push(AlarmCall::Disarm {
            reminder_id: *reminder_id,
        });
        state.armed.remove(reminder_id);
    }
}
