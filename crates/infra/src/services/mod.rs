mod alarm;
mod notification;

pub use alarm::{
    AlarmCall, AlarmTrigger, FiredTriggerReceiver, IAlarmPort, InMemoryAlarmPort, TokioAlarmPort,
};
pub use notification::{
    INotificationSink, InMemoryNotificationSink, LogNotificationSink, WebhookNotificationSink,
};
