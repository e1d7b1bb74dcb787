pub mod appointment_service;
pub mod relay_service;

pub use appointment_service::{BookingForm, PendingSubmission, RelayClient, RelayMode};
pub use relay_service::forward_appointment;
