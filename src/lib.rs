pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use api::router;
pub use config::AppConfig;
pub use error::{DraftError, SubmitError};
pub use models::{AppState, AppointmentDraft, DraftField, Locale, Service, SubmissionStatus};
pub use services::{BookingForm, RelayClient, RelayMode};
