pub mod forward;

pub use forward::{compose_notification, forward_appointment, Notification};
