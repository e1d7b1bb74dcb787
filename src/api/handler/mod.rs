pub mod booking;
pub mod clinic;
pub mod submit;

pub use booking::book_handler;
pub use clinic::{clinic_handler, whatsapp_link_handler};
pub use submit::relay_submit_handler;
