pub const EMAIL: &str = "hello@teamserpens.com";
pub const PHONE_DISPLAY: &str = "(94) 777 14 24 33";
pub const BRAND: &str = "Serpens";

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

/// `tel:` URL in international form (digits only, `+` prefixed).
pub fn tel() -> String {
    let digits: String = PHONE_DISPLAY.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("tel:+{digits}")
}
