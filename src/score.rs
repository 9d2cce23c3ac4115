//! Continuous strength score.

use crate::sections::{digits_section, letters_section, symbols_section, uppercase_section};

/// Upper bound of every score.
pub const MAX_SCORE: f64 = 100.0;

/// Length at which the grade is taken at face value.
const REFERENCE_LENGTH: f64 = 8.0;

/// A scoring section: maps the password to its weighted contribution.
pub(crate) type Section = fn(&str) -> f64;

/// Sections in evaluation order.
pub(crate) const SECTIONS: [(&str, Section); 4] = [
    ("digits", digits_section),
    ("letters", letters_section),
    ("symbols", symbols_section),
    ("uppercase", uppercase_section),
];

/// Scales a raw grade by the password length and clamps it to [`MAX_SCORE`].
pub(crate) fn finish(grade: f64, length: usize) -> f64 {
    let scaled = grade * (length as f64 / REFERENCE_LENGTH);
    scaled.min(MAX_SCORE)
}

/// Scores a password in `[0, 100]`.
///
/// Digits, letters, symbols and uppercase letters each contribute a weighted,
/// normalised amount; the sum grows linearly with the length. An empty string
/// scores 0.
///
/// # Example
///
/// ```
/// assert_eq!(pwd_meter::score(""), 0.0);
/// assert!(pwd_meter::score("aA1!aA1!") > pwd_meter::score("aaaaaaaa"));
/// ```
pub fn score(password: &str) -> f64 {
    let grade: f64 = SECTIONS.iter().map(|(_, section)| section(password)).sum();
    finish(grade, password.chars().count())
}
