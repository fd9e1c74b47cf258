use regex::Regex;
use std::sync::LazyLock;

static US_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+?1[\s.-]?)?\(?([2-9]\d{2})\)?[\s.-]?(\d{3})[\s.-]?(\d{4})$")
        .expect("valid US phone regex")
});

pub fn is_valid_us_phone(phone: &str) -> bool {
    US_PHONE.is_match(phone.trim())
}

/// Canonical `(AAA) EEE-NNNN` rendering, or `None` when the number does not parse.
pub fn format_us_phone(phone: &str) -> Option<String> {
    let captures = US_PHONE.captures(phone.trim())?;
    Some(format!(
        "({}) {}-{}",
        &captures[1], &captures[2], &captures[3]
    ))
}
