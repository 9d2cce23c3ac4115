//! Password strength evaluator - runs one of the two strength modes.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::classifier::{Predicate, StrengthClassifier};
use crate::feedback::{Feedback, FeedbackLabels};
use crate::level::{StrengthLevel, StrengthResult};
use crate::score::{SECTIONS, finish};

/// Delay before an async evaluation starts, so bursts of keystrokes collapse.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Which strength heuristic to run.
///
/// The two modes use unrelated scales and are never mixed.
#[derive(Debug, Clone)]
pub enum StrengthMode {
    /// Weighted character-class score in `[0, 100]`.
    Continuous,
    /// Level from the classifier's medium and strong rules.
    Discrete(StrengthClassifier),
}

impl Default for StrengthMode {
    fn default() -> Self {
        StrengthMode::Discrete(StrengthClassifier::default())
    }
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordEvaluation {
    /// `None` if the evaluation was cancelled.
    pub result: Option<StrengthResult>,
}

impl PasswordEvaluation {
    fn cancelled() -> Self {
        Self { result: None }
    }

    pub fn is_cancelled(&self) -> bool {
        self.result.is_none()
    }

    pub fn level(&self) -> Option<StrengthLevel> {
        self.result.map(|r| r.level())
    }

    pub fn score(&self) -> Option<f64> {
        self.result.and_then(|r| r.score())
    }

    /// Label and meter for this evaluation; `None` if cancelled.
    pub fn feedback(&self, labels: &FeedbackLabels) -> Option<Feedback> {
        self.level().map(|level| Feedback::for_level(level, labels))
    }
}

/// Evaluates password strength with the given mode.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `mode` - Continuous score or discrete level
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `PasswordEvaluation`, without result if the token was cancelled.
pub fn evaluate_password_strength(
    password: &SecretString,
    mode: &StrengthMode,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordEvaluation {
    #[cfg(feature = "async")]
    let is_cancelled = || token.as_ref().is_some_and(|t| t.is_cancelled());

    #[cfg(not(feature = "async"))]
    let is_cancelled = || false;

    let pwd = password.expose_secret();

    let result = match mode {
        StrengthMode::Continuous => {
            let mut grade = 0.0;
            for (_section_name, section) in SECTIONS {
                if is_cancelled() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Evaluation cancelled before section: {}", _section_name);
                    return PasswordEvaluation::cancelled();
                }
                grade += section(pwd);
            }
            StrengthResult::Score(finish(grade, pwd.chars().count()))
        }
        StrengthMode::Discrete(classifier) => {
            let config = classifier.config();
            let rules: [(StrengthLevel, &dyn Predicate); 2] = [
                (StrengthLevel::Strong, config.strong()),
                (StrengthLevel::Medium, config.medium()),
            ];

            if pwd.is_empty() {
                StrengthResult::Level(StrengthLevel::Empty)
            } else {
                // strong first: a password matching both rules is Strong
                let mut level = StrengthLevel::Weak;
                for (candidate, rule) in rules {
                    if is_cancelled() {
                        #[cfg(feature = "tracing")]
                        tracing::debug!("Evaluation cancelled before {:?} rule", candidate);
                        return PasswordEvaluation::cancelled();
                    }
                    if rule.matches(pwd) {
                        level = candidate;
                        break;
                    }
                }
                StrengthResult::Level(level)
            }
        }
    };

    PasswordEvaluation {
        result: Some(result),
    }
}

/// Async version that sends evaluation result via channel.
///
/// Waits [`DEBOUNCE`] first; cancelling the token in the meantime yields a
/// cancelled evaluation.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    mode: &StrengthMode,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    let evaluation = evaluate_password_strength(password, mode, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassifierConfig;
    use crate::score::score;

    fn evaluate(pwd: &str, mode: &StrengthMode) -> PasswordEvaluation {
        let pwd = SecretString::new(pwd.to_string().into());

        #[cfg(feature = "async")]
        let evaluation = evaluate_password_strength(&pwd, mode, None);

        #[cfg(not(feature = "async"))]
        let evaluation = evaluate_password_strength(&pwd, mode);

        evaluation
    }

    #[test]
    fn test_evaluate_continuous_matches_score() {
        for pwd in ["", "a", "password", "MyPass123!", "VeryStrongPassword123!@#"] {
            let evaluation = evaluate(pwd, &StrengthMode::Continuous);
            assert_eq!(evaluation.score(), Some(score(pwd)), "password {pwd:?}");
        }
    }

    #[test]
    fn test_evaluate_continuous_levels() {
        let mode = StrengthMode::Continuous;
        assert_eq!(evaluate("", &mode).level(), Some(StrengthLevel::Empty));
        assert_eq!(evaluate("abc", &mode).level(), Some(StrengthLevel::Weak));
        assert_eq!(evaluate("aA1!aA1!", &mode).level(), Some(StrengthLevel::Strong));
    }

    #[test]
    fn test_evaluate_discrete_default() {
        let mode = StrengthMode::default();
        assert_eq!(evaluate("", &mode).level(), Some(StrengthLevel::Empty));
        assert_eq!(evaluate("abcdef", &mode).level(), Some(StrengthLevel::Weak));
        assert_eq!(evaluate("abcdeF1", &mode).level(), Some(StrengthLevel::Medium));
        assert_eq!(evaluate("abcdeF12", &mode).level(), Some(StrengthLevel::Strong));
        assert_eq!(evaluate("abcdeF12", &mode).score(), None);
    }

    #[test]
    fn test_evaluate_discrete_agrees_with_classifier() {
        let classifier = StrengthClassifier::new(ClassifierConfig::new(
            |s: &str| s.len() >= 3,
            |s: &str| s.starts_with('!'),
        ));
        let mode = StrengthMode::Discrete(classifier.clone());
        for pwd in ["", "ab", "abc", "!a", "!abcdef"] {
            assert_eq!(evaluate(pwd, &mode).level(), Some(classifier.classify(pwd)));
        }
    }

    #[test]
    fn test_evaluate_feedback() {
        let labels = FeedbackLabels::default();
        let feedback = evaluate("abcdeF1", &StrengthMode::default())
            .feedback(&labels)
            .unwrap();
        assert_eq!(feedback.label, "Medium");
        assert_eq!(feedback.meter.unwrap().width_percent(), 66.66);

        let feedback = evaluate("", &StrengthMode::Continuous)
            .feedback(&labels)
            .unwrap();
        assert_eq!(feedback.label, "Enter a password");
        assert!(feedback.meter.is_none());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        for mode in [StrengthMode::Continuous, StrengthMode::default()] {
            assert_eq!(evaluate("Tr0ub4dor&3", &mode), evaluate("Tr0ub4dor&3", &mode));
        }
    }
}
