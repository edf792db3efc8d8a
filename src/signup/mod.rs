//! The signup-to-payment handoff workflow: a headless signup/login form
//! controller that validates, runs the injected account service, and hands
//! the resulting identity to the payment continuation.

pub mod account;
pub mod modal;
pub mod types;

pub use account::{AccountError, AccountService, SimulatedAccountService, GENERIC_FAILURE};
pub use modal::{SignupModal, Submission, PASSWORDS_DO_NOT_MATCH, PASSWORD_TOO_SHORT};
pub use types::{AuthMode, FormField, PurchaseContext, SignupFields, UserIdentity};
