use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{AppointmentDraft, ClinicInfo, ClinicLinks, Service, SubmissionStatus};

// Raw WhatsApp query; service stays text so an unknown label gets a JSON error
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct WhatsAppParams {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub service: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LinkResponse {
    pub url: String,
}

/// Form inputs keyed by their `name` attribute.
pub type BookingRequest = BTreeMap<String, String>;

#[derive(Serialize, Debug)]
pub struct BookingResponse {
    pub status: SubmissionStatus,
    pub draft: AppointmentDraft,
}

#[derive(Serialize, Debug)]
pub struct ClinicResponse {
    #[serde(flatten)]
    pub info: ClinicInfo,
    pub links: ClinicLinks,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct RelayAck {
    pub ok: bool,
}

/// Payload of the email-forwarding relay. Any service text is passed on
/// as sent, so it is not limited to the bookable services.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RelaySubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub service: String,
    pub message: String,
}

impl Default for RelaySubmission {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            date: String::new(),
            time: String::new(),
            service: Service::default().label().to_string(),
            message: String::new(),
        }
    }
}

impl RelaySubmission {
    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.phone.is_empty() && !self.date.is_empty()
    }

    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("name", self.name.as_str()),
            ("phone", self.phone.as_str()),
            ("email", self.email.as_str()),
            ("date", self.date.as_str()),
            ("time", self.time.as_str()),
            ("service", self.service.as_str()),
            ("message", self.message.as_str()),
        ]
    }
}
