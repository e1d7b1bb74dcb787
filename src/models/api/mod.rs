pub mod params;

pub use params::{
    BookingRequest, BookingResponse, ClinicResponse, LinkResponse, RelayAck, RelaySubmission,
    WhatsAppParams,
};
