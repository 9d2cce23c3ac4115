//! Symbols section - rewards characters from a fixed symbol set.

use super::{ClassRule, SectionResult};

const SYMBOLS: ClassRule = ClassRule { fallback: 1.0 / 6.0, target: 1.0, weight: 35.0 };

/// Characters counted as symbols. Anything else outside `[a-zA-Z0-9]` scores nothing.
pub const SYMBOL_SET: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '?', '_', '~', '.', ',', ';', '=',
];

/// Scores the symbols in the password.
pub fn symbols_section(password: &str) -> SectionResult {
    SYMBOLS.apply(password.chars().filter(|c| SYMBOL_SET.contains(c)).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_section_none() {
        let score = symbols_section("Password1");
        assert!((score - 35.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_symbols_section_one() {
        assert_eq!(symbols_section("pass!"), 35.0);
    }

    #[test]
    fn test_symbols_section_outside_set() {
        // '-', '+', '(' are not in the set
        assert_eq!(symbols_section("a-b+c("), symbols_section("abc"));
    }

    #[test]
    fn test_symbols_section_every_member_counts() {
        for c in SYMBOL_SET {
            assert_eq!(symbols_section(&c.to_string()), 35.0, "symbol {c:?}");
        }
    }
}
