//! Strength levels and results.

/// Score below which a non-empty password is `Weak`.
pub const MEDIUM_THRESHOLD: f64 = 30.0;

/// Score from which a password is `Strong`.
pub const STRONG_THRESHOLD: f64 = 80.0;

/// Discrete password strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Empty,
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    /// Maps a continuous score onto a level.
    ///
    /// Empty input is always `Empty`, whatever the score.
    pub fn from_score(input_is_empty: bool, score: f64) -> Self {
        if input_is_empty {
            StrengthLevel::Empty
        } else if score < MEDIUM_THRESHOLD {
            StrengthLevel::Weak
        } else if score < STRONG_THRESHOLD {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Strong
        }
    }

    /// Numeric rank: 0 (empty) to 3 (strong).
    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// Result of one evaluation, shaped by the mode that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrengthResult {
    /// Discrete mode.
    Level(StrengthLevel),
    /// Continuous mode, in `[0, 100]`.
    Score(f64),
}

impl StrengthResult {
    /// The level carried by this result.
    ///
    /// A score needs to know whether the input was empty; `Score(0.0)` is the
    /// only score an empty input produces, so it maps to `Empty`.
    pub fn level(&self) -> StrengthLevel {
        match *self {
            StrengthResult::Level(level) => level,
            StrengthResult::Score(score) => StrengthLevel::from_score(score <= 0.0, score),
        }
    }

    pub fn score(&self) -> Option<f64> {
        match *self {
            StrengthResult::Score(score) => Some(score),
            StrengthResult::Level(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_score_empty_wins() {
        assert_eq!(StrengthLevel::from_score(true, 95.0), StrengthLevel::Empty);
    }

    #[test]
    fn test_from_score_thresholds() {
        assert_eq!(StrengthLevel::from_score(false, 0.5), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(false, 29.99), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(false, 30.0), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(false, 79.99), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(false, 80.0), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(false, 100.0), StrengthLevel::Strong);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(StrengthLevel::Empty < StrengthLevel::Weak);
        assert!(StrengthLevel::Weak < StrengthLevel::Medium);
        assert!(StrengthLevel::Medium < StrengthLevel::Strong);
        assert_eq!(StrengthLevel::Strong.rank(), 3);
    }

    #[test]
    fn test_result_level() {
        assert_eq!(
            StrengthResult::Level(StrengthLevel::Medium).level(),
            StrengthLevel::Medium
        );
        assert_eq!(StrengthResult::Score(0.0).level(), StrengthLevel::Empty);
        assert_eq!(StrengthResult::Score(45.0).level(), StrengthLevel::Medium);
        assert_eq!(StrengthResult::Score(45.0).score(), Some(45.0));
        assert_eq!(StrengthResult::Level(StrengthLevel::Weak).score(), None);
    }
}
