use chrono::{DateTime, Local};
use log::{error, info};
use uuid::Uuid;

use crate::error::{MailError, RelayError};
use crate::models::api::RelaySubmission;
use crate::utils::mail::Mailer;

pub struct Notification {
    pub reference: Uuid,
    pub subject: String,
    pub html: String,
}

pub fn compose_notification(
    submission: &RelaySubmission,
    reference: Uuid,
    received_at: DateTime<Local>,
) -> Notification {
    let rows: String = submission
        .fields()
        .iter()
        .map(|(key, value)| {
            format!(
                "    <p><strong>{}:</strong> {}</p>\n",
                capitalize(key),
                escape_html(value)
            )
        })
        .collect();

    let html = format!(
        "<h3>New appointment request</h3>\n{}    <p><small>Reference {} received {}</small></p>\n",
        rows,
        reference,
        received_at.format("%Y-%m-%d %H:%M:%S %:z")
    );

    Notification {
        reference,
        subject: format!("Appointment request - {}", submission.name),
        html,
    }
}

/// Forwards an accepted submission to the clinic's inbox.
pub async fn forward_appointment(
    mailer: Option<&Mailer>,
    submission: &RelaySubmission,
) -> Result<Uuid, RelayError> {
    if !submission.has_required_fields() {
        return Err(RelayError::Invalid(
            "name, phone and date are required".to_string(),
        ));
    }

    let mailer = mailer.ok_or_else(|| {
        error!("Appointment received but no mail API is configured");
        MailError::NotConfigured
    })?;

    let notification = compose_notification(submission, Uuid::new_v4(), Local::now());
    mailer
        .send_mail(
            mailer.contact_email(),
            "Clinic",
            &notification.subject,
            &notification.html,
        )
        .await
        .inspect_err(|e| error!("Forwarding {} failed: {}", notification.reference, e))?;

    info!("Forwarded appointment request {}", notification.reference);
    Ok(notification.reference)
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
