//! Pattern-based strength classifier.
//!
//! A password is `Strong` if it matches the strong rule, else `Medium` if it
//! matches the medium rule, else `Weak`. The empty string is `Empty`.

use crate::config::ClassifierConfig;
use crate::level::StrengthLevel;

/// Minimum first-line length for the default strong rule.
pub const STRONG_MIN_LENGTH: usize = 8;

/// Minimum first-line length for the default medium rule.
pub const MEDIUM_MIN_LENGTH: usize = 6;

/// A yes/no rule over a password.
pub trait Predicate: Send + Sync {
    fn matches(&self, input: &str) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn matches(&self, input: &str) -> bool {
        self(input)
    }
}

/// Classifies a password against a medium and a strong rule.
///
/// The strong rule is checked first, so a password matching both is `Strong`.
///
/// # Example
///
/// ```
/// use pwd_meter::{classify, default_medium, default_strong, StrengthLevel};
///
/// assert_eq!(classify("abcdeF1", &default_medium, &default_strong), StrengthLevel::Medium);
/// ```
pub fn classify<M, S>(input: &str, medium: &M, strong: &S) -> StrengthLevel
where
    M: Predicate + ?Sized,
    S: Predicate + ?Sized,
{
    if input.is_empty() {
        StrengthLevel::Empty
    } else if strong.matches(input) {
        StrengthLevel::Strong
    } else if medium.matches(input) {
        StrengthLevel::Medium
    } else {
        StrengthLevel::Weak
    }
}

/// Classifier with its rules bound at construction.
#[derive(Debug, Clone, Default)]
pub struct StrengthClassifier {
    config: ClassifierConfig,
}

impl StrengthClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies `input` with the bound rules.
    pub fn classify(&self, input: &str) -> StrengthLevel {
        classify(input, self.config.medium(), self.config.strong())
    }
}

impl From<ClassifierConfig> for StrengthClassifier {
    fn from(config: ClassifierConfig) -> Self {
        Self::new(config)
    }
}

/// Character classes present in a password's first line.
struct Classes {
    lower: bool,
    upper: bool,
    digit: bool,
    length: usize,
}

impl Classes {
    /// Only the text before the first line terminator is inspected.
    fn of(input: &str) -> Self {
        let line = input
            .split(['\n', '\r', '\u{2028}', '\u{2029}'])
            .next()
            .unwrap_or_default();
        Self {
            lower: line.chars().any(|c| c.is_ascii_lowercase()),
            upper: line.chars().any(|c| c.is_ascii_uppercase()),
            digit: line.chars().any(|c| c.is_ascii_digit()),
            length: line.chars().count(),
        }
    }
}

/// Default strong rule: lowercase, uppercase and digit, 8 chars or more.
pub fn default_strong(input: &str) -> bool {
    let c = Classes::of(input);
    c.lower && c.upper && c.digit && c.length >= STRONG_MIN_LENGTH
}

/// Default medium rule: two of lowercase, uppercase and digit, 6 chars or more.
pub fn default_medium(input: &str) -> bool {
    let c = Classes::of(input);
    let pairs = (c.lower && c.upper) || (c.lower && c.digit) || (c.upper && c.digit);
    pairs && c.length >= MEDIUM_MIN_LENGTH
}
