//! Digits section - rewards `[0-9]`.

use super::{ClassRule, SectionResult};

const DIGITS: ClassRule = ClassRule { fallback: 0.25, target: 1.0, weight: 25.0 };

/// Scores the digits in the password.
pub fn digits_section(password: &str) -> SectionResult {
    DIGITS.apply(password.chars().filter(|c| c.is_ascii_digit()).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_section_none() {
        assert_eq!(digits_section("abcdef"), 6.25);
    }

    #[test]
    fn test_digits_section_one() {
        assert_eq!(digits_section("abc1"), 25.0);
    }

    #[test]
    fn test_digits_section_several_exceed_target() {
        assert!(digits_section("1234") > 25.0);
    }

    #[test]
    fn test_digits_section_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not [0-9]
        assert_eq!(digits_section("\u{0661}\u{0662}"), 6.25);
    }
}
