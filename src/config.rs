use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const BRAND: &str = "TRYQ";
pub const LOGO_PATH: &str = "logo.png";

pub const PHONE_E164: &str = "+919823782121";
pub const PHONE_DISPLAY: &str = "+91 98237 82121";
pub const WHATSAPP_NUMBER: &str = "919823782121";
pub const WHATSAPP_TEMPLATE: &str = "Hi, I am interested in the Video Mastery Program";
pub const CONTACT_EMAIL: &str = "contact@tryq.in";
pub const HEADQUARTERS: &str = "Pune, Maharashtra, India";

/// How long the home page gets to mount before a cross-page anchor scroll.
pub const ANCHOR_SCROLL_DELAY_MS: u32 = 100;

/// Hero background drifts at this fraction of the page scroll.
pub const PARALLAX_FACTOR: f64 = 0.4;

pub fn whatsapp_link() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(WHATSAPP_TEMPLATE)
    )
}

pub fn tel_link() -> String {
    format!("tel:{}", PHONE_E164)
}

pub fn mailto_link() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_carries_encoded_template() {
        assert_eq!(
            whatsapp_link(),
            "https://wa.me/919823782121?text=Hi%2C%20I%20am%20interested%20in%20the%20Video%20Mastery%20Program"
        );
    }

    #[test]
    fn tel_and_mail_links() {
        assert_eq!(tel_link(), "tel:+919823782121");
        assert_eq!(mailto_link(), "mailto:contact@tryq.in");
    }
}
