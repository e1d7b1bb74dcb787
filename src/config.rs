use std::net::SocketAddr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::models::Locale;
use crate::services::RelayMode;

pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/YOUR_FORMSPREE_ID";
pub const DEFAULT_MAIL_API_URL: &str = "https://api.zeptomail.com/v1.1/email";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub api_url: String,
    pub api_key: String,
    pub from: String,
    pub contact_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub form_endpoint: String,
    pub relay_mode: RelayMode,
    pub relay_timeout: Duration,
    pub locale: Locale,
    pub whatsapp_phone: Option<String>,
    pub clinic_email: Option<String>,
    /// `None` when MAIL_API_KEY or MAIL_FROM is missing.
    pub mail: Option<MailConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = match get("BIND_ADDR") {
            Some(raw) => raw
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::invalid("BIND_ADDR", raw))?,
            None => SocketAddr::from(([0, 0, 0, 0], 3043)),
        };

        let relay_mode = match get("RELAY_MODE") {
            Some(raw) => raw.parse::<RelayMode>()?,
            None => RelayMode::default(),
        };

        let relay_timeout = match get("RELAY_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or_else(|| ConfigError::invalid("RELAY_TIMEOUT_SECS", raw))?,
            None => Duration::from_secs(15),
        };

        let locale = match get("LOCALE") {
            Some(raw) => raw.parse::<Locale>()?,
            None => Locale::default(),
        };

        let mail = match (get("MAIL_API_KEY"), get("MAIL_FROM")) {
            (Some(api_key), Some(from)) => Some(MailConfig {
                api_url: get("MAIL_API_URL").unwrap_or_else(|| DEFAULT_MAIL_API_URL.to_string()),
                api_key,
                contact_email: get("CONTACT_EMAIL").unwrap_or_else(|| from.clone()),
                from,
            }),
            _ => None,
        };

        Ok(Self {
            bind_addr,
            form_endpoint: get("FORM_ENDPOINT").unwrap_or_else(|| DEFAULT_FORM_ENDPOINT.to_string()),
            relay_mode,
            relay_timeout,
            locale,
            whatsapp_phone: get("WHATSAPP_PHONE"),
            clinic_email: get("CLINIC_EMAIL"),
            mail,
        })
    }
}
