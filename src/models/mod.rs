// src/models/mod.rs

pub mod api;
pub mod app;
pub mod appointments;
pub mod clinic;

pub use app::AppState;
pub use appointments::{AppointmentDraft, DraftField, Locale, Service, SubmissionStatus};
pub use clinic::{ClinicInfo, ClinicLinks};
