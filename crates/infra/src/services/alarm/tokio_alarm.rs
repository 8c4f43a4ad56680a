use super::{AlarmTrigger, FiredTriggerReceiver, IAlarmPort};
use crate::system::ISys;
use note_reminders_domain::ID;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

struct Arming {
    generation: u64,
    handle: JoinHandle<()>,
}

type ArmedSet = Arc<Mutex<HashMap<ID, Arming>>>;

fn lock(armed: &ArmedSet) -> MutexGuard<'_, HashMap<ID, Arming>> {
    armed.lock().unwrap_or_else(|e| e.into_inner())
}

/// Alarm port backed by one tokio timer per armed `Reminder`.
///
/// Armings live in process memory, so they are lost when the process
/// exits and have to be recreated from the store on startup.
pub struct TokioAlarmPort {
    armed: ArmedSet,
    next_generation: AtomicU64,
    fired: UnboundedSender<AlarmTrigger>,
    sys: Arc<dyn ISys>,
    runtime: Handle,
}

impl TokioAlarmPort {
    pub fn new(sys: Arc<dyn ISys>, runtime: Handle) -> (Self, FiredTriggerReceiver) {
        let (fired, receiver) = mpsc::unbounded_channel();
        let port = Self {
            armed: Default::default(),
            next_generation: AtomicU64::new(0),
            fired,
            sys,
            runtime,
        };
        (port, receiver)
    }

    pub fn armed_count(&self) -> usize {
        lock(&self.armed).len()
    }
}

impl IAlarmPort for TokioAlarmPort {
    fn arm(&self, trigger: AlarmTrigger, fire_at: i64) {
        let delay_millis = fire_at
            .saturating_mul(1000)
            .saturating_sub(self.sys.get_timestamp_millis())
            .max(0) as u64;
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst);
        let reminder_id = trigger.reminder_id;
        let armed = self.armed.clone();
        let fired = self.fired.clone();

        // The lock is held until the arming is registered so that a timer
        // with zero delay cannot look for its entry before it exists
        let mut armed_set = lock(&self.armed);
        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_millis)).await;

            let still_armed = {
                let mut armed = lock(&armed);
                match armed.get(&reminder_id) {
                    Some(arming) if arming.generation == generation => {
                        armed.remove(&reminder_id);
                        true
                    }
                    _ => false,
                }
            };
            if still_armed && fired.send(trigger).is_err() {
                warn!(
                    "Reminder {} fired but nobody is listening for fired reminders",
                    reminder_id
                );
            }
        });

        if let Some(previous) = armed_set.insert(reminder_id, Arming { generation, handle }) {
            previous.handle.abort();
        }
        debug!("Armed reminder {} to fire in {} ms", reminder_id, delay_millis);
    }

    fn disarm(&self, reminder_id: &ID) {
        if let Some(arming) = lock(&self.armed).remove(reminder_id) {
            arming.handle.abort();
            debug!("Disarmed reminder {}", reminder_id);
        }
    }
}

impl Drop for TokioAlarmPort {
    fn drop(&mut self) {
        for (_, arming) in lock(&self.armed).drain() {
            arming.handle.abort();
        }
    }
}
