// src/domain/contact.rs

use url::form_urlencoded;

pub fn tel_href(phone: &str) -> String {
    let number: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{number}")
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// wa.me wants the number as bare digits, without `+` or spaces.
pub fn whatsapp_href(phone: &str, listing_title: &str) -> String {
    let number: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '+')
        .collect();
    let message = format!("Hi, I'm interested in your property: {listing_title}");
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("text", &message)
        .finish();
    format!("https://wa.me/{number}?{query}")
}
