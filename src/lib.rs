//! Password strength meter library
//!
//! This library scores and classifies password strength and maps the result
//! to the label and meter shown next to a password field.
//!
//! Two independent heuristics are available:
//!
//! - [`score`]: a continuous score in `[0, 100]` from weighted character
//!   classes and length
//! - [`classify`]: a discrete level (`Empty`, `Weak`, `Medium`, `Strong`)
//!   from a medium and a strong rule, with defaults or user-supplied
//!   predicates and patterns
//!
//! # Features
//!
//! - `async` (default): Enables async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_MEDIUM_PATTERN`: Custom regular expression for the medium rule
//! - `PWD_METER_STRONG_PATTERN`: Custom regular expression for the strong rule
//!
//! Both are read by [`ClassifierConfig::from_env`].
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{
//!     evaluate_password_strength, ClassifierConfig, FeedbackLabels, StrengthClassifier,
//!     StrengthLevel, StrengthMode,
//! };
//! use secrecy::SecretString;
//!
//! let classifier = StrengthClassifier::new(ClassifierConfig::default());
//! let mode = StrengthMode::Discrete(classifier);
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let evaluation = evaluate_password_strength(&password, &mode, None);
//!
//! #[cfg(not(feature = "async"))]
//! let evaluation = evaluate_password_strength(&password, &mode);
//!
//! assert_eq!(evaluation.level(), Some(StrengthLevel::Strong));
//! let feedback = evaluation.feedback(&FeedbackLabels::default()).unwrap();
//! println!("{}", feedback.label);
//! ```

// Internal modules
mod classifier;
mod config;
mod evaluator;
mod feedback;
mod level;
mod score;
mod sections;

// Public API
pub use classifier::{
    MEDIUM_MIN_LENGTH, Predicate, STRONG_MIN_LENGTH, StrengthClassifier, classify,
    default_medium, default_strong,
};
pub use config::{
    ClassifierConfig, ConfigError, MEDIUM_PATTERN_ENV, PatternRule, STRONG_PATTERN_ENV,
};
pub use evaluator::{PasswordEvaluation, StrengthMode, evaluate_password_strength};
pub use feedback::{Feedback, FeedbackLabels, Meter, sprite_offset};
pub use level::{MEDIUM_THRESHOLD, STRONG_THRESHOLD, StrengthLevel, StrengthResult};
pub use score::{MAX_SCORE, score};
pub use sections::SYMBOL_SET;

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_strength_tx};
