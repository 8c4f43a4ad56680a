mod notification;
mod reminder;
mod shared;

pub use notification::{DeepLink, NotificationPriority, ReminderNotification};
pub use reminder::{NewReminder, Reminder};
pub use shared::entity::{Entity, InvalidIDError, ID};
