use serde::Serialize;

use crate::models::{AppointmentDraft, Service};
use crate::utils::links;

#[derive(Serialize, Debug, Clone)]
pub struct Timing {
    pub days: String,
    pub hours: String,
}

/// Published details of the clinic, served alongside the booking form.
#[derive(Serialize, Debug, Clone)]
pub struct ClinicInfo {
    pub name: String,
    pub address: String,
    pub phones: Vec<String>,
    pub email: String,
    pub whatsapp_phone: String,
    pub services: Vec<String>,
    pub bookable_services: Vec<Service>,
    pub timings: Vec<Timing>,
    pub map_url: String,
}

impl Default for ClinicInfo {
    fn default() -> Self {
        Self {
            name: "Mayank Sonography and Diagnostic Center".to_string(),
            address: "Opposite Nehru Garden, Govt. Hospital Road, Dhamtari, Chhattisgarh 493773"
                .to_string(),
            phones: vec!["+918982050533".to_string(), "+919713586177".to_string()],
            email: "manky2106@gmail.com".to_string(),
            whatsapp_phone: "+918982050533".to_string(),
            services: vec![
                "Ultrasound (USG): Obstetric & General".to_string(),
                "Doppler Studies".to_string(),
                "Diagnostic Imaging".to_string(),
            ],
            bookable_services: Service::ALL.to_vec(),
            timings: vec![
                Timing {
                    days: "Mon-Sat".to_string(),
                    hours: "9:00 AM - 6:00 PM".to_string(),
                },
                Timing {
                    days: "Sun".to_string(),
                    hours: "Closed".to_string(),
                },
            ],
            map_url: "https://www.google.com/maps?q=Opposite%20Nehru%20Garden%2C%20Dhamtari%2C%20Chhattisgarh&output=embed".to_string(),
        }
    }
}

impl ClinicInfo {
    pub fn whatsapp_link(&self, draft: &AppointmentDraft) -> String {
        links::whatsapp_link(&self.whatsapp_phone, &self.name, draft)
    }

    pub fn tel_links(&self) -> Vec<String> {
        self.phones.iter().map(|phone| links::tel_link(phone)).collect()
    }

    pub fn mail_link(&self) -> String {
        links::mail_link(&self.email, links::MAIL_SUBJECT)
    }

    pub fn links(&self) -> ClinicLinks {
        ClinicLinks {
            tel: self.tel_links(),
            mail: self.mail_link(),
            whatsapp: self.whatsapp_link(&AppointmentDraft::default()),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ClinicLinks {
    pub tel: Vec<String>,
    pub mail: String,
    pub whatsapp: String,
}
