//! Classifier configuration
//!
//! Holds the medium and strong rules used by the discrete classifier.

use std::env::VarError;
use std::fmt;
use std::sync::Arc;

use fancy_regex::Regex;
use thiserror::Error;

use crate::classifier::{Predicate, default_medium, default_strong};

/// Environment variable overriding the medium rule.
pub const MEDIUM_PATTERN_ENV: &str = "PWD_METER_MEDIUM_PATTERN";

/// Environment variable overriding the strong rule.
pub const STRONG_PATTERN_ENV: &str = "PWD_METER_STRONG_PATTERN";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {rule} pattern: {source}")]
    InvalidPattern {
        rule: &'static str,
        #[source]
        source: fancy_regex::Error,
    },
    #[error("The {0} pattern is empty")]
    EmptyPattern(&'static str),
    #[error("Environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),
}

/// A rule backed by a regular expression; matches anywhere in the input.
///
/// Look-around is supported, so patterns such as `^(?=.*[a-z])(?=.{8,})`
/// work as written.
#[derive(Debug, Clone)]
pub struct PatternRule(Regex);

impl PatternRule {
    fn compile(rule: &'static str, pattern: &str) -> Result<Self, ConfigError> {
        if pattern.trim().is_empty() {
            return Err(ConfigError::EmptyPattern(rule));
        }
        Regex::new(pattern)
            .map(PatternRule)
            .map_err(|source| ConfigError::InvalidPattern { rule, source })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Predicate for PatternRule {
    /// A match that cannot complete (backtrack limit) counts as no match.
    fn matches(&self, input: &str) -> bool {
        match self.0.is_match(input) {
            Ok(matched) => matched,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Pattern {} failed to match: {}", self.0.as_str(), _e);
                false
            }
        }
    }
}

/// The two rules of the discrete classifier. Immutable once built.
#[derive(Clone)]
pub struct ClassifierConfig {
    medium: Arc<dyn Predicate>,
    strong: Arc<dyn Predicate>,
}

impl ClassifierConfig {
    /// Builds a config from any two rules.
    pub fn new(medium: impl Predicate + 'static, strong: impl Predicate + 'static) -> Self {
        Self {
            medium: Arc::new(medium),
            strong: Arc::new(strong),
        }
    }

    /// Builds a config from two regular expressions.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - A pattern is blank
    /// - A pattern does not compile
    pub fn from_patterns(medium: &str, strong: &str) -> Result<Self, ConfigError> {
        let medium = PatternRule::compile("medium", medium)?;
        let strong = PatternRule::compile("strong", strong)?;
        Ok(Self::new(medium, strong))
    }

    /// Builds a config from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_METER_MEDIUM_PATTERN`: regular expression for the medium rule
    /// - `PWD_METER_STRONG_PATTERN`: regular expression for the strong rule
    ///
    /// An unset variable keeps the default rule.
    ///
    /// # Errors
    ///
    /// Same as [`ClassifierConfig::from_patterns`], for each variable that is set,
    /// plus [`ConfigError::NotUnicode`] for a value that is not valid unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(rule) = Self::env_rule(MEDIUM_PATTERN_ENV, "medium")? {
            config.medium = Arc::new(rule);
        }
        if let Some(rule) = Self::env_rule(STRONG_PATTERN_ENV, "strong")? {
            config.strong = Arc::new(rule);
        }

        Ok(config)
    }

    fn env_rule(var: &'static str, rule: &'static str) -> Result<Option<PatternRule>, ConfigError> {
        let pattern = match std::env::var(var) {
            Ok(pattern) => pattern,
            Err(VarError::NotPresent) => return Ok(None),
            Err(VarError::NotUnicode(_)) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Classifier configuration FAILED: {} is not valid unicode", var);
                return Err(ConfigError::NotUnicode(var));
            }
        };

        match PatternRule::compile(rule, &pattern) {
            Ok(compiled) => {
                #[cfg(feature = "tracing")]
                tracing::info!("Using {} pattern from environment: {}", rule, compiled.as_str());
                Ok(Some(compiled))
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Classifier configuration FAILED: {}", e);
                Err(e)
            }
        }
    }

    pub fn medium(&self) -> &dyn Predicate {
        self.medium.as_ref()
    }

    pub fn strong(&self) -> &dyn Predicate {
        self.strong.as_ref()
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::new(default_medium, default_strong)
    }
}

impl fmt::Debug for ClassifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifierConfig").finish_non_exhaustive()
    }
}
