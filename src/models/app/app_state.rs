use crate::config::AppConfig;
use crate::models::ClinicInfo;
use crate::services::RelayClient;
use crate::utils::Mailer;

pub struct AppState {
    pub config: AppConfig,
    pub clinic: ClinicInfo,
    pub relay: RelayClient,
    pub mailer: Option<Mailer>,
}

impl AppState {
    pub fn from_config(config: AppConfig) -> Result<Self, reqwest::Error> {
        let relay = RelayClient::with_timeout(
            config.form_endpoint.clone(),
            config.relay_mode,
            config.relay_timeout,
        )?;
        let mailer = match config.mail.clone() {
            Some(mail) => {
                let http = reqwest::Client::builder()
                    .timeout(config.relay_timeout)
                    .build()?;
                Some(Mailer::new(http, mail))
            }
            None => None,
        };

        let mut clinic = ClinicInfo::default();
        if let Some(phone) = &config.whatsapp_phone {
            clinic.whatsapp_phone = phone.clone();
        }
        if let Some(email) = &config.clinic_email {
            clinic.email = email.clone();
        }

        Ok(Self {
            config,
            clinic,
            relay,
            mailer,
        })
    }
}
