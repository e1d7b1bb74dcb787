pub mod booking_form;
pub mod relay;

pub use booking_form::{BookingForm, PendingSubmission};
pub use relay::{RelayClient, RelayMode};
