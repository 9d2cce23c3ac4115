//! Continuous scoring sections
//!
//! Each section scores one character class of the password.

mod digits;
mod letters;
mod symbols;
mod uppercase;

pub use digits::digits_section;
pub use letters::letters_section;
pub use symbols::{SYMBOL_SET, symbols_section};
pub use uppercase::uppercase_section;

/// Weighted contribution of one section to the raw grade.
pub type SectionResult = f64;

/// Scoring parameters for one character class.
pub(crate) struct ClassRule {
    /// Stand-in count when no character of the class is present.
    pub fallback: f64,
    /// Count at which the class is considered satisfied.
    pub target: f64,
    pub weight: f64,
}

impl ClassRule {
    /// Scores `count` matching characters.
    pub fn apply(&self, count: usize) -> SectionResult {
        let x = if count > 0 { count as f64 } else { self.fallback };
        normalize(x, self.target) * self.weight
    }
}

/// Ratio to `y` while at or below it, a bounded bonus in `(1, 1.5)` above it.
pub(crate) fn normalize(x: f64, y: f64) -> f64 {
    let diff = x - y;
    if diff <= 0.0 {
        x / y
    } else {
        1.0 + 0.5 * (x / (x + y / 4.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_below_target() {
        assert_eq!(normalize(1.0, 3.0), 1.0 / 3.0);
        assert_eq!(normalize(0.25, 1.0), 0.25);
    }

    #[test]
    fn test_normalize_at_target() {
        assert_eq!(normalize(3.0, 3.0), 1.0);
    }

    #[test]
    fn test_normalize_above_target() {
        // 2 / (2 + 0.25) = 0.888..
        let n = normalize(2.0, 1.0);
        assert!((n - (1.0 + 0.5 * (2.0 / 2.25))).abs() < 1e-12);
        assert!(n > 1.0 && n < 1.5);
    }

    #[test]
    fn test_class_rule_uses_fallback_when_absent() {
        let rule = ClassRule { fallback: 0.5, target: 1.0, weight: 10.0 };
        assert_eq!(rule.apply(0), 5.0);
        assert_eq!(rule.apply(1), 10.0);
    }
}
