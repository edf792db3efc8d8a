use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use super::types::{AuthMode, SignupFields};

/// Reason shown when the account service fails without saying why.
pub const GENERIC_FAILURE: &str = "An error occurred";

/// Error signalled by an [`AccountService`]. The collaborator may or may
/// not provide a human-readable message.
#[derive(Debug, Clone)]
pub struct AccountError {
    reason: Option<String>,
}

impl AccountError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }

    pub fn unspecified() -> Self {
        Self { reason: None }
    }

    /// The collaborator's message, or [`GENERIC_FAILURE`] when it gave none.
    pub fn reason(&self) -> &str {
        self.reason
            .as_deref()
            .filter(|reason| !reason.is_empty())
            .unwrap_or(GENERIC_FAILURE)
    }
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl std::error::Error for AccountError {}

/// Remote account creation/authentication, injected into the form
/// controller so a real client can replace the simulation without touching
/// the submission flow.
#[async_trait]
pub trait AccountService: Send + Sync {
    async fn create_account(
        &self,
        mode: AuthMode,
        fields: &SignupFields,
    ) -> Result<(), AccountError>;
}

/// Stand-in for the real account backend: sleeps for a bit, then succeeds.
pub struct SimulatedAccountService {
    delay: Duration,
}

impl SimulatedAccountService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedAccountService {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl AccountService for SimulatedAccountService {
    async fn create_account(
        &self,
        _mode: AuthMode,
        _fields: &SignupFields,
    ) -> Result<(), AccountError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
