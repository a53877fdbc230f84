//! Years-of-experience extraction

use regex::Regex;
use std::sync::LazyLock;

/// One or two ASCII digits, optional `+`, optional whitespace, a year unit.
/// Case-sensitive; callers see it through [`extract_max_years`], which lowercases.
static YEARS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})\+?\s*(?:years|yrs|year)").expect("Invalid years regex")
});

/// Largest year count asserted anywhere in `text`, or 0.
///
/// Every mention counts, whatever it refers to: "99 years of debt" yields 99.
/// Longer numbers contribute their last two digits, so "123 years" yields 23.
pub fn extract_max_years(text: &str) -> u32 {
    let text = text.to_lowercase();
    YEARS_PATTERN
        .captures_iter(&text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|digits| digits.as_str().parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}
