use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DraftError;

// Services offered in the booking form
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Service {
    #[default]
    #[serde(rename = "Ultrasound (USG)")]
    Ultrasound,
    #[serde(rename = "Doppler")]
    Doppler,
    #[serde(rename = "Fetal Doppler")]
    FetalDoppler,
    #[serde(rename = "X-ray")]
    XRay,
    #[serde(rename = "Other")]
    Other,
}

impl Service {
    pub const ALL: [Service; 5] = [
        Service::Ultrasound,
        Service::Doppler,
        Service::FetalDoppler,
        Service::XRay,
        Service::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Service::Ultrasound => "Ultrasound (USG)",
            Service::Doppler => "Doppler",
            Service::FetalDoppler => "Fetal Doppler",
            Service::XRay => "X-ray",
            Service::Other => "Other",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Service {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|service| service.label() == s)
            .ok_or_else(|| DraftError::UnknownService(s.to_string()))
    }
}

/// One editable input of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Phone,
    Email,
    Date,
    Time,
    Service,
    Message,
}

impl DraftField {
    pub fn key(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Phone => "phone",
            DraftField::Email => "email",
            DraftField::Date => "date",
            DraftField::Time => "time",
            DraftField::Service => "service",
            DraftField::Message => "message",
        }
    }
}

impl FromStr for DraftField {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(DraftField::Name),
            "phone" => Ok(DraftField::Phone),
            "email" => Ok(DraftField::Email),
            "date" => Ok(DraftField::Date),
            "time" => Ok(DraftField::Time),
            "service" => Ok(DraftField::Service),
            "message" => Ok(DraftField::Message),
            other => Err(DraftError::UnknownField(other.to_string())),
        }
    }
}

/// In-progress appointment request as typed into the booking form.
///
/// Every key is optional on the wire so a partially filled form still
/// deserializes; required fields are checked at submission time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AppointmentDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub service: Service,
    pub message: String,
}

impl AppointmentDraft {
    /// Replaces exactly one field, leaving the others as they were.
    pub fn set(&mut self, field: DraftField, value: &str) -> Result<(), DraftError> {
        match field {
            DraftField::Name => self.name = value.to_string(),
            DraftField::Phone => self.phone = value.to_string(),
            DraftField::Email => self.email = value.to_string(),
            DraftField::Date => self.date = value.to_string(),
            DraftField::Time => self.time = value.to_string(),
            DraftField::Service => self.service = value.parse()?,
            DraftField::Message => self.message = value.to_string(),
        }
        Ok(())
    }

    /// Name, phone and date must be filled before anything is sent.
    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.phone.is_empty() && !self.date.is_empty()
    }

    /// All seven fields in form order, as sent to the relay.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("name", self.name.as_str()),
            ("phone", self.phone.as_str()),
            ("email", self.email.as_str()),
            ("date", self.date.as_str()),
            ("time", self.time.as_str()),
            ("service", self.service.label()),
            ("message", self.message.as_str()),
        ]
    }
}
