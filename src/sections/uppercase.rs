//! Uppercase section - rewards `[A-Z]`.

use super::{ClassRule, SectionResult};

const UPPERCASE: ClassRule = ClassRule { fallback: 1.0 / 6.0, target: 1.0, weight: 30.0 };

/// Scores the uppercase ASCII letters in the password.
pub fn uppercase_section(password: &str) -> SectionResult {
    UPPERCASE.apply(password.chars().filter(|c| c.is_ascii_uppercase()).count())
}
