//! Meter feedback: the label and indicator shown for a strength level.

use crate::level::StrengthLevel;

/// Height in pixels of one row of the meter sprite.
const SPRITE_ROW_HEIGHT: i32 = 10;

/// Labels shown next to the meter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackLabels {
    pub prompt: String,
    pub weak: String,
    pub medium: String,
    pub strong: String,
}

impl Default for FeedbackLabels {
    fn default() -> Self {
        Self {
            prompt: "Enter a password".to_string(),
            weak: "Weak".to_string(),
            medium: "Medium".to_string(),
            strong: "Strong".to_string(),
        }
    }
}

impl FeedbackLabels {
    pub fn with_prompt(mut self, label: impl Into<String>) -> Self {
        self.prompt = label.into();
        self
    }

    pub fn with_weak(mut self, label: impl Into<String>) -> Self {
        self.weak = label.into();
        self
    }

    pub fn with_medium(mut self, label: impl Into<String>) -> Self {
        self.medium = label.into();
        self
    }

    pub fn with_strong(mut self, label: impl Into<String>) -> Self {
        self.strong = label.into();
        self
    }

    /// Label for `level`; `Empty` shows the prompt.
    pub fn label(&self, level: StrengthLevel) -> &str {
        match level {
            StrengthLevel::Empty => &self.prompt,
            StrengthLevel::Weak => &self.weak,
            StrengthLevel::Medium => &self.medium,
            StrengthLevel::Strong => &self.strong,
        }
    }
}

/// Levels a meter can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fill {
    Weak,
    Medium,
    Strong,
}

/// Visual indicator for a non-empty password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meter {
    fill: Fill,
}

impl Meter {
    /// `None` for `Empty`: no meter is drawn before the user types.
    pub fn for_level(level: StrengthLevel) -> Option<Self> {
        let fill = match level {
            StrengthLevel::Empty => return None,
            StrengthLevel::Weak => Fill::Weak,
            StrengthLevel::Medium => Fill::Medium,
            StrengthLevel::Strong => Fill::Strong,
        };
        Some(Self { fill })
    }

    pub fn level(&self) -> StrengthLevel {
        match self.fill {
            Fill::Weak => StrengthLevel::Weak,
            Fill::Medium => StrengthLevel::Medium,
            Fill::Strong => StrengthLevel::Strong,
        }
    }

    /// Filled width of the bar, in percent.
    pub fn width_percent(&self) -> f64 {
        match self.fill {
            Fill::Weak => 33.33,
            Fill::Medium => 66.66,
            Fill::Strong => 100.0,
        }
    }

    /// Vertical background offset in pixels for sprite-based meters.
    pub fn background_offset(&self) -> i32 {
        sprite_offset(self.level())
    }

    pub fn css_class(&self) -> &'static str {
        match self.fill {
            Fill::Weak => "weak",
            Fill::Medium => "medium",
            Fill::Strong => "strong",
        }
    }
}

/// Sprite row of `level`: 0 for the prompt, then one row per level.
pub fn sprite_offset(level: StrengthLevel) -> i32 {
    -(level.rank() as i32) * SPRITE_ROW_HEIGHT
}

/// What the meter panel shows for one password.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub label: String,
    pub meter: Option<Meter>,
}

impl Feedback {
    pub fn for_level(level: StrengthLevel, labels: &FeedbackLabels) -> Self {
        Self {
            label: labels.label(level).to_string(),
            meter: Meter::for_level(level),
        }
    }
}
