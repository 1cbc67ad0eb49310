use serde::Serialize;

/// The card details an email is allowed to show: brand and last four digits.
///
/// Construction is the invariant: a `CardInfo` only exists with a `last4` of
/// exactly four ASCII digits. The brand is free text; an empty brand is absent.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct CardInfo {
    pub last4: String,
    pub brand: Option<String>,
}

impl CardInfo {
    /// Builds a `CardInfo`, or nothing if `last4` is not exactly four digits.
    pub fn new(last4: impl Into<String>, brand: impl Into<String>) -> Option<Self> {
        let last4 = last4.into();
        if !is_last4(&last4) {
            return None;
        }
        let brand = brand.into();
        Some(Self {
            last4,
            brand: if brand.is_empty() { None } else { Some(brand) },
        })
    }
}

/// True for a string of exactly four ASCII digits.
pub fn is_last4(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Reduces a raw metadata value to the trailing four digits.
///
/// Strips every non-digit character first, so masked values like
/// `"**** **** **** 4242"` and full PANs alike reduce to their last four.
/// Values with fewer than four digits yield nothing.
pub fn normalize_last4(raw: &str) -> Option<String> {
    let digits: Vec<u8> = raw.bytes().filter(u8::is_ascii_digit).collect();
    if digits.len() < 4 {
        return None;
    }
    String::from_utf8(digits[digits.len() - 4..].to_vec()).ok()
}
