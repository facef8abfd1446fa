//! Phone number utilities.

/// Normalize a raw phone number into a dialable E.164-like form.
///
/// - input is trimmed first
/// - numbers already carrying a `+` country prefix pass through unchanged
/// - anything else gets `default_country_code` prepended exactly once
///
/// No digit-count or character-set validation happens here; the
/// verification provider is the authority on what constitutes a
/// deliverable number, so malformed input is forwarded as-is.
pub fn normalize(phone: &str, default_country_code: &str) -> String {
    let phone = phone.trim();

    if phone.starts_with('+') {
        phone.to_string()
    } else {
        format!("{}{}", default_country_code, phone)
    }
}

/// Mask a phone number for log output, keeping only the last 4 characters.
///
/// Counts characters rather than bytes: the relay forwards arbitrary,
/// even malformed, input to the provider, so the masker sees it too.
pub fn mask(phone: &str) -> String {
    let total = phone.chars().count();
    if total <= 4 {
        return "*".repeat(total);
    }

    let visible = 4;
    let last_digits: String = phone.chars().skip(total - visible).collect();

    if phone.starts_with('+') {
        format!("+{}{}", "*".repeat(total - 1 - visible), last_digits)
    } else {
        format!("{}{}", "*".repeat(total - visible), last_digits)
    }
}
