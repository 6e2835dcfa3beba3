//! Iranian mobile-number normalization.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

/// Canonicalize to the local `09xxxxxxxxx` form where possible.
///
/// Non-digits are dropped; `0098` / `98` country prefixes become `0`; a bare
/// 10-digit number starting with `9` gains a leading `0`. Anything else is
/// returned as its digits.
#[must_use]
pub fn normalize_iran_mobile(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if let Some(rest) = digits.strip_prefix("0098") {
        return format!("0{rest}");
    }
    if let Some(rest) = digits.strip_prefix("98") {
        return format!("0{rest}");
    }
    if digits.starts_with('9') && digits.len() == 10 {
        return format!("0{digits}");
    }
    digits
}

/// `true` for an 11-digit number shaped `09xxxxxxxxx`.
#[must_use]
pub fn is_valid_iran_mobile(mobile: &str) -> bool {
    mobile.len() == 11 && mobile.starts_with("09") && mobile.chars().all(|c| c.is_ascii_digit())
}
