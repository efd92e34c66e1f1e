use anyhow::{Result, anyhow};

pub const KENYA_COUNTRY_CODE: &str = "254";

/// Maps a user-entered phone number to international digits for `wa.me`.
///
/// Best effort only: input that matches none of the Kenyan heuristics comes
/// back as its bare digits.
pub fn normalize_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.starts_with(KENYA_COUNTRY_CODE) {
        digits
    } else if let Some(local) = digits.strip_prefix('0') {
        format!("{}{}", KENYA_COUNTRY_CODE, local)
    } else if digits.starts_with('7') || digits.starts_with('1') {
        format!("{}{}", KENYA_COUNTRY_CODE, digits)
    } else {
        digits
    }
}

/// Checks that a number normalizes to a Kenyan mobile (`2547…` or `2541…`).
pub fn validate_phone(phone: &str) -> Result<()> {
    let normalized = normalize_phone(phone);

    if normalized.is_empty() {
        return Err(anyhow!("Phone number contains no digits"));
    }

    if normalized.len() != 12 {
        return Err(anyhow!(
            "Phone number must have 12 digits after normalization, got {}",
            normalized.len()
        ));
    }

    if !(normalized.starts_with("2547") || normalized.starts_with("2541")) {
        return Err(anyhow!("Phone number is not a Kenyan mobile number"));
    }

    Ok(())
}
