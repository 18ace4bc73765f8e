//! Partial masking shapes
//!
//! Format-preserving masks keep just enough of a value to stay recognizable
//! in logs while hiding the identifying middle. Shapes are fixed per
//! category.

use crate::domain::{Result, VeilError};
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

/// Compiled masking patterns shared by every sanitize call
pub(crate) struct Maskers {
    email: Regex,
    whitespace: Regex,
}

impl Maskers {
    pub(crate) fn new() -> Result<Self> {
        let email = RegexBuilder::new(
            r"\b([A-Za-z0-9._%+-]+)@([A-Za-z0-9.-]+)\.([A-Z|a-z]{2,})\b",
        )
        .case_insensitive(true)
        .build()
        .map_err(|e| VeilError::PatternLibrary(format!("Invalid mask pattern: {e}")))?;
        let whitespace = Regex::new(r"\s+")
            .map_err(|e| VeilError::PatternLibrary(format!("Invalid mask pattern: {e}")))?;
        Ok(Self { email, whitespace })
    }

    /// Mask every email, keeping the first character of each part
    ///
    /// `john@example.com` becomes `j***@e***.c***`.
    pub(crate) fn mask_emails<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.email.replace_all(text, |caps: &regex::Captures<'_>| {
            format!(
                "{}***@{}***.{}***",
                first_char(&caps[1]),
                first_char(&caps[2]),
                first_char(&caps[3]),
            )
        })
    }

    /// Collapse runs of whitespace left behind by removal
    pub(crate) fn normalize_whitespace(&self, text: &str) -> String {
        self.whitespace.replace_all(text, " ").trim().to_string()
    }
}

fn first_char(part: &str) -> String {
    part.chars().take(1).collect()
}

/// Mask a phone value, keeping the prefix and the last four characters
pub(crate) fn mask_phone(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() >= 10 {
        let prefix: String = chars[..3].iter().collect();
        let suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("{prefix}***{suffix}")
    } else {
        "***".to_string()
    }
}

/// Fixed SSN mask
pub(crate) const SSN_MASK: &str = "***-**-****";

/// Mask a credit card number, keeping the first and last four digits
///
/// Values that do not strip down to 16 digits fall back to the fully
/// masked template.
pub(crate) fn mask_credit_card(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 16 {
        format!("{}-****-****-{}", &digits[..4], &digits[12..])
    } else {
        "****-****-****-****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email_keeps_first_characters() {
        let maskers = Maskers::new().unwrap();
        assert_eq!(
            maskers.mask_emails("john@example.com"),
            "j***@e***.c***"
        );
    }

    #[test]
    fn test_mask_email_in_context() {
        let maskers = Maskers::new().unwrap();
        assert_eq!(
            maskers.mask_emails("write to alice@corp.org today"),
            "write to a***@c***.o*** today"
        );
    }

    #[test]
    fn test_mask_phone_long_and_short() {
        assert_eq!(mask_phone("555-123-4567"), "555***4567");
        assert_eq!(mask_phone("(555) 123-4567"), "(55***4567");
        assert_eq!(mask_phone("555-1234"), "***");
    }

    #[test]
    fn test_mask_credit_card_shapes() {
        assert_eq!(
            mask_credit_card("4111-1111-1111-1234"),
            "4111-****-****-1234"
        );
        assert_eq!(mask_credit_card("4111111111111234"), "4111-****-****-1234");
        assert_eq!(mask_credit_card("4111-1111-1111"), "****-****-****-****");
    }

    #[test]
    fn test_normalize_whitespace() {
        let maskers = Maskers::new().unwrap();
        assert_eq!(
            maskers.normalize_whitespace("  My SSN is   \n "),
            "My SSN is"
        );
    }
}
