//! Account settings submission.
//!
//! Forms are validated locally, then handed to an [`AccountService`]. Service
//! failures never propagate: they become a transient [`Notice::Error`] for the
//! user, and the failure is logged.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::{WidgetError, WidgetResult};
use crate::forms::{PasswordChangeForm, ProfileForm};

/// Submit settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitConfig {
    /// Simulated round trip in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_latency_ms() -> u64 {
    1000
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl SubmitConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Backend that stores account changes.
#[async_trait]
pub trait AccountService: Send + Sync {
    async fn update_profile(&self, profile: &ProfileForm) -> WidgetResult<()>;

    async fn update_password(&self, form: &PasswordChangeForm) -> WidgetResult<()>;
}

/// Service that waits, then succeeds or fails as configured.
#[derive(Debug, Clone)]
pub struct SimulatedAccountService {
    latency: Duration,
    fail: bool,
}

impl Default for SimulatedAccountService {
    fn default() -> Self {
        Self::new(&SubmitConfig::default())
    }
}

impl SimulatedAccountService {
    pub fn new(config: &SubmitConfig) -> Self {
        Self {
            latency: config.latency(),
            fail: false,
        }
    }

    /// Make every call fail after the delay.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    async fn round_trip(&self, what: &str) -> WidgetResult<()> {
        debug!(what, latency_ms = self.latency.as_millis() as u64, "simulated submit");
        tokio::time::sleep(self.latency).await;
        if self.fail {
            return Err(WidgetError::OperationFailed(format!("{} rejected", what)));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountService for SimulatedAccountService {
    async fn update_profile(&self, _profile: &ProfileForm) -> WidgetResult<()> {
        self.round_trip("profile update").await
    }

    async fn update_password(&self, _form: &PasswordChangeForm) -> WidgetResult<()> {
        self.round_trip("password update").await
    }
}

/// Whether a submit is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitState {
    Idle,
    Submitting,
}

/// Transient message shown after a submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Error(m) => m,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success(_))
    }
}

/// Holds the state at `Submitting` for its lifetime, including when the
/// submitting future is dropped before it completes.
struct InFlight<'a> {
    state: &'a watch::Sender<SubmitState>,
}

impl<'a> InFlight<'a> {
    fn start(state: &'a watch::Sender<SubmitState>) -> Self {
        state.send_replace(SubmitState::Submitting);
        Self { state }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.send_replace(SubmitState::Idle);
    }
}

/// The profile and security pages' form state.
pub struct AccountSettings<S> {
    service: S,
    pub profile: ProfileForm,
    pub password: PasswordChangeForm,
    state: watch::Sender<SubmitState>,
}

impl<S: AccountService> AccountSettings<S> {
    pub fn new(service: S) -> Self {
        let (state, _) = watch::channel(SubmitState::Idle);
        Self {
            service,
            profile: ProfileForm::default(),
            password: PasswordChangeForm::default(),
            state,
        }
    }

    pub fn state(&self) -> SubmitState {
        *self.state.borrow()
    }

    /// Receiver that observes submit state changes, e.g. to disable inputs.
    pub fn subscribe(&self) -> watch::Receiver<SubmitState> {
        self.state.subscribe()
    }

    /// Validate and save the profile.
    ///
    /// Invalid input is returned as [`WidgetError::Validation`] and nothing is
    /// sent. A service failure yields `Ok(Notice::Error(..))`.
    pub async fn submit_profile(&mut self) -> WidgetResult<Notice> {
        self.profile.validate()?;

        let result = {
            let _in_flight = InFlight::start(&self.state);
            self.service.update_profile(&self.profile).await
        };

        Ok(match result {
            Ok(()) => {
                info!("profile updated");
                Notice::Success("Profile updated successfully".to_string())
            }
            Err(e) => {
                warn!(error = %e, "profile update failed");
                Notice::Error("Failed to update profile".to_string())
            }
        })
    }

    /// Validate and change the password. On success the password fields are
    /// cleared; the two-factor setting is kept.
    pub async fn submit_password(&mut self) -> WidgetResult<Notice> {
        self.password.validate()?;

        let result = {
            let _in_flight = InFlight::start(&self.state);
            self.service.update_password(&self.password).await
        };

        Ok(match result {
            Ok(()) => {
                info!("password updated");
                self.password.reset_passwords();
                Notice::Success("Password updated successfully".to_string())
            }
            Err(e) => {
                warn!(error = %e, "password update failed");
                Notice::Error("Failed to update password".to_string())
            }
        })
    }
}
