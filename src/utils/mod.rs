pub mod links;
pub mod log_utils;
pub mod mail;

pub use links::{mail_link, tel_link, whatsapp_link};
pub use log_utils::init_logging;
pub use mail::Mailer;
