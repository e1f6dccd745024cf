//! Profile and security settings forms.

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, WidgetError, WidgetResult};
use crate::password::{validate_password, PasswordStrength};

/// Gender choices offered by the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }
}

/// Personal details and notification preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub marketing_emails: bool,
    #[serde(default = "default_true")]
    pub order_updates: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ProfileForm {
    /// The demo account's saved profile.
    fn default() -> Self {
        Self {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone_number: Some("+1 (555) 123-4567".to_string()),
            gender: Some(Gender::Male),
            date_of_birth: Some("1990-01-01".to_string()),
            marketing_emails: true,
            order_updates: true,
        }
    }
}

impl ProfileForm {
    /// Check every field, collecting all failures.
    pub fn validate(&self) -> WidgetResult<()> {
        let mut errors = Vec::new();
        if self.first_name.chars().count() < 2 {
            errors.push(FieldError::new(
                "firstName",
                "First name must be at least 2 characters",
            ));
        }
        if self.last_name.chars().count() < 2 {
            errors.push(FieldError::new(
                "lastName",
                "Last name must be at least 2 characters",
            ));
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError::new("email", "Please enter a valid email address"));
        }
        into_result(errors)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// `local@domain.tld` with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

/// Password change form on the security page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub two_factor_enabled: bool,
}

impl PasswordChangeForm {
    pub fn new(
        current_password: impl Into<String>,
        new_password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            current_password: current_password.into(),
            new_password: new_password.into(),
            confirm_password: confirm_password.into(),
            two_factor_enabled: false,
        }
    }

    pub fn with_two_factor(mut self, enabled: bool) -> Self {
        self.two_factor_enabled = enabled;
        self
    }

    /// Strength meter for the new password.
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::evaluate(&self.new_password)
    }

    /// Check every field. The confirmation is compared only once the other
    /// checks pass.
    pub fn validate(&self) -> WidgetResult<()> {
        let mut errors = Vec::new();
        if self.current_password.is_empty() {
            errors.push(FieldError::new(
                "currentPassword",
                "Current password is required",
            ));
        }
        if let Err(WidgetError::WeakPassword(message)) = validate_password(&self.new_password) {
            errors.push(FieldError::new("newPassword", message));
        }
        if self.confirm_password.is_empty() {
            errors.push(FieldError::new(
                "confirmPassword",
                "Confirm Password is required",
            ));
        }
        if errors.is_empty() && self.new_password != self.confirm_password {
            errors.push(FieldError::new("confirmPassword", "Passwords do not match"));
        }
        into_result(errors)
    }

    /// Clear the password fields, keeping the two-factor setting.
    pub fn reset_passwords(&mut self) {
        *self = Self::default().with_two_factor(self.two_factor_enabled);
    }
}

fn into_result(errors: Vec<FieldError>) -> WidgetResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(WidgetError::Validation(errors))
    }
}
