use log::{info, warn};
use reqwest::{header::ACCEPT, multipart::Form, Client};
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{ConfigError, SubmitError};
use crate::models::AppointmentDraft;

/// Body encoding expected by the relay endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelayMode {
    /// Multipart form data, as a hosted form relay accepts it.
    #[default]
    Form,
    /// JSON object with the same keys, for the email-forwarding relay.
    Json,
}

impl FromStr for RelayMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "form" | "multipart" => Ok(RelayMode::Form),
            "json" => Ok(RelayMode::Json),
            _ => Err(ConfigError::invalid("RELAY_MODE", s)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RelayClient {
    http: Client,
    endpoint: String,
    mode: RelayMode,
}

impl RelayClient {
    pub fn new(endpoint: impl Into<String>, mode: RelayMode) -> Self {
        Self::with_client(Client::new(), endpoint, mode)
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        mode: RelayMode,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, endpoint, mode))
    }

    pub fn with_client(http: Client, endpoint: impl Into<String>, mode: RelayMode) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            mode,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn mode(&self) -> RelayMode {
        self.mode
    }

    /// Posts the draft once. Any 2xx counts as accepted.
    pub async fn send(&self, draft: &AppointmentDraft) -> Result<(), SubmitError> {
        let request = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json");

        let request = match self.mode {
            RelayMode::Form => {
                let form = draft
                    .fields()
                    .into_iter()
                    .fold(Form::new(), |form, (key, value)| {
                        form.text(key, value.to_string())
                    });
                request.multipart(form)
            }
            RelayMode::Json => request.json(draft),
        };

        let response = request.send().await.map_err(|e| {
            warn!("Relay {} unreachable: {}", self.endpoint, e);
            SubmitError::Transport(e)
        })?;

        let status = response.status();
        if status.is_success() {
            info!("Relay {} accepted submission ({})", self.endpoint, status);
            return Ok(());
        }

        // Error text is optional and the body may not be JSON at all
        let message = response
            .json::<RelayErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .filter(|msg| !msg.is_empty());

        warn!("Relay {} rejected submission ({})", self.endpoint, status);
        Err(SubmitError::RelayRejection {
            status: status.as_u16(),
            message,
        })
    }
}
