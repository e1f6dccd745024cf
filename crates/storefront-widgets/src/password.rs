//! Password strength scoring.

use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A single strength rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl PasswordRule {
    /// Rules in the order they are checked and reported.
    pub const ALL: [PasswordRule; 5] = [
        PasswordRule::MinLength,
        PasswordRule::Uppercase,
        PasswordRule::Lowercase,
        PasswordRule::Digit,
        PasswordRule::Symbol,
    ];

    pub fn is_satisfied_by(&self, password: &str) -> bool {
        match self {
            PasswordRule::MinLength => password.chars().count() >= MIN_PASSWORD_LENGTH,
            PasswordRule::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            PasswordRule::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            PasswordRule::Digit => password.chars().any(|c| c.is_ascii_digit()),
            PasswordRule::Symbol => password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    /// Message shown when the rule fails.
    pub fn message(&self) -> &'static str {
        match self {
            PasswordRule::MinLength => "Password must be at least 8 characters",
            PasswordRule::Uppercase => "Password must contain at least one uppercase letter",
            PasswordRule::Lowercase => "Password must contain at least one lowercase letter",
            PasswordRule::Digit => "Password must contain at least one number",
            PasswordRule::Symbol => "Password must contain at least one special character",
        }
    }

    /// Checklist label.
    pub fn label(&self) -> &'static str {
        match self {
            PasswordRule::MinLength => "At least 8 characters",
            PasswordRule::Uppercase => "At least one uppercase letter",
            PasswordRule::Lowercase => "At least one lowercase letter",
            PasswordRule::Digit => "At least one number",
            PasswordRule::Symbol => "At least one special character",
        }
    }
}

/// Strength label for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_score(score: usize) -> Self {
        match score {
            0 => StrengthLabel::VeryWeak,
            1 | 2 => StrengthLabel::Weak,
            3 => StrengthLabel::Medium,
            4 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

/// Result of scoring a candidate password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    satisfied: Vec<PasswordRule>,
}

impl PasswordStrength {
    pub fn evaluate(password: &str) -> Self {
        Self {
            satisfied: PasswordRule::ALL
                .into_iter()
                .filter(|rule| rule.is_satisfied_by(password))
                .collect(),
        }
    }

    /// Number of satisfied rules, 0 to 5.
    pub fn score(&self) -> usize {
        self.satisfied.len()
    }

    pub fn label(&self) -> StrengthLabel {
        StrengthLabel::from_score(self.score())
    }

    /// Meter fill, `score / 5`.
    pub fn fill_ratio(&self) -> f64 {
        self.score() as f64 / PasswordRule::ALL.len() as f64
    }

    pub fn is_satisfied(&self, rule: PasswordRule) -> bool {
        self.satisfied.contains(&rule)
    }

    /// Rules still failing, in check order.
    pub fn unmet(&self) -> Vec<PasswordRule> {
        PasswordRule::ALL
            .into_iter()
            .filter(|rule| !self.is_satisfied(*rule))
            .collect()
    }
}

/// Require every rule. The first failing rule's message is reported.
pub fn validate_password(password: &str) -> WidgetResult<()> {
    match PasswordRule::ALL
        .into_iter()
        .find(|rule| !rule.is_satisfied_by(password))
    {
        Some(rule) => Err(WidgetError::WeakPassword(rule.message().to_string())),
        None => Ok(()),
    }
}
