use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigError;

/// Language of the status messages shown to the visitor.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Hi,
    En,
}

impl Locale {
    pub fn missing_required(&self) -> &'static str {
        match self {
            Locale::Hi => "कृपया नाम, फोन और तारीख भरें।",
            Locale::En => "Please fill in name, phone and date.",
        }
    }

    pub fn submitted(&self) -> &'static str {
        match self {
            Locale::Hi => {
                "आपकी अपॉइंटमेंट का अनुरोध भेज दिया गया है। हम शीघ्र ही संपर्क करेंगे।"
            }
            Locale::En => "Your appointment request has been sent. We will contact you shortly.",
        }
    }

    pub fn rejected(&self) -> &'static str {
        match self {
            Locale::Hi => "सबमिशन में समस्या हुई।",
            Locale::En => "There was a problem with the submission.",
        }
    }

    pub fn network_error(&self) -> &'static str {
        match self {
            Locale::Hi => "नेटवर्क त्रुटि — कृपया बाद में पुनः प्रयास करें।",
            Locale::En => "Network error, please try again later.",
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hi" => Ok(Locale::Hi),
            "en" => Ok(Locale::En),
            _ => Err(ConfigError::invalid("LOCALE", s)),
        }
    }
}
