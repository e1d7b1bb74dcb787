use log::{info, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::Serialize;

use crate::config::MailConfig;
use crate::error::MailError;

#[derive(Serialize)]
pub struct EmailAddress {
    pub address: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct Sender {
    pub address: String,
}

#[derive(Serialize)]
pub struct Recipient {
    pub email_address: EmailAddress,
}

#[derive(Serialize)]
pub struct EmailRequest {
    pub from: Sender,
    pub to: Vec<Recipient>,
    pub subject: String,
    pub htmlbody: String,
}

/// Client for the transactional mail HTTP API.
#[derive(Debug, Clone)]
pub struct Mailer {
    http: Client,
    config: MailConfig,
}

impl Mailer {
    pub fn new(http: Client, config: MailConfig) -> Self {
        Self { http, config }
    }

    pub fn contact_email(&self) -> &str {
        &self.config.contact_email
    }

    pub async fn send_mail(
        &self,
        recipient_email: &str,
        recipient_name: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), MailError> {
        let email_request = EmailRequest {
            from: Sender {
                address: self.config.from.clone(),
            },
            to: vec![Recipient {
                email_address: EmailAddress {
                    address: recipient_email.to_string(),
                    name: recipient_name.to_string(),
                },
            }],
            subject: subject.to_string(),
            htmlbody: html_body.to_string(),
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, &self.config.api_key)
            .json(&email_request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("Mail '{}' accepted by API ({})", subject, status);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!("Mail API answered {}: {}", status, body);
        Err(MailError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
