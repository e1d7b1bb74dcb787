use crate::models::AppointmentDraft;

pub const MAIL_SUBJECT: &str = "Appointment Request";

/// `https://wa.me/<digits>?text=<message>` with the draft pre-filled.
pub fn whatsapp_link(phone: &str, clinic_name: &str, draft: &AppointmentDraft) -> String {
    let text = format!(
        "Hello, I want to book an appointment at {}.\nName: {}\nPhone: {}\nPreferred date: {}\nPreferred time: {}\nService: {}",
        clinic_name, draft.name, draft.phone, draft.date, draft.time, draft.service
    );
    format!(
        "https://wa.me/{}?text={}",
        digits_only(phone),
        urlencoding::encode(&text)
    )
}

pub fn tel_link(phone: &str) -> String {
    let phone: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", phone)
}

pub fn mail_link(address: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", address, urlencoding::encode(subject))
}

fn digits_only(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}
