//! Letters section - rewards `[a-zA-Z]`.

use super::{ClassRule, SectionResult};

const LETTERS: ClassRule = ClassRule { fallback: 0.5, target: 3.0, weight: 10.0 };

/// Scores the ASCII letters in the password.
pub fn letters_section(password: &str) -> SectionResult {
    LETTERS.apply(password.chars().filter(|c| c.is_ascii_alphabetic()).count())
}
