// src/models/appointments/mod.rs

pub mod appointment;
pub mod locale;
pub mod status;

pub use appointment::{AppointmentDraft, DraftField, Service};
pub use locale::Locale;
pub use status::SubmissionStatus;
