use std::sync::{Arc, Mutex};

use log::debug;
use uuid::Uuid;

use super::account::AccountService;
use super::types::{AuthMode, FormField, PurchaseContext, SignupFields, UserIdentity};

pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

const MIN_PASSWORD_CHARS: usize = 6;

/// Lifecycle of one submission. A `Failed` reason is always non-empty and
/// is reachable only from `Submitting`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Idle,
    Submitting,
    Failed(String),
}

impl Submission {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Submission::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Submission::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

struct ModalState {
    visible: bool,
    mode: AuthMode,
    fields: SignupFields,
    submission: Submission,
    purchase: Option<PurchaseContext>,
    // Bumped on every close; a submission started under an older epoch
    // resolves as a no-op.
    epoch: u64,
}

impl ModalState {
    fn new() -> Self {
        Self {
            visible: false,
            mode: AuthMode::SignUp,
            fields: SignupFields::default(),
            submission: Submission::Idle,
            purchase: None,
            epoch: 0,
        }
    }

    fn close(&mut self) {
        self.visible = false;
        self.submission = Submission::Idle;
        self.epoch += 1;
    }
}

/// The signup/login form controller. Owns field state, the signup/login
/// mode toggle and the submission lifecycle; on success it hands a fresh
/// [`UserIdentity`] to the payment continuation.
///
/// Cheap to clone; clones share the same form state. The account service,
/// the close callback, the payment continuation and the id provider are all
/// injected, so the controller performs no I/O of its own.
#[derive(Clone)]
pub struct SignupModal {
    state: Arc<Mutex<ModalState>>,
    service: Arc<dyn AccountService>,
    on_close: Arc<dyn Fn() + Send + Sync>,
    on_proceed_to_payment: Arc<dyn Fn(UserIdentity) + Send + Sync>,
    make_id: Arc<dyn Fn() -> String + Send + Sync>,
}

impl SignupModal {
    pub fn new<C, P>(service: Arc<dyn AccountService>, on_close: C, on_proceed_to_payment: P) -> Self
    where
        C: Fn() + Send + Sync + 'static,
        P: Fn(UserIdentity) + Send + Sync + 'static,
    {
        Self {
            state: Arc::new(Mutex::new(ModalState::new())),
            service,
            on_close: Arc::new(on_close),
            on_proceed_to_payment: Arc::new(on_proceed_to_payment),
            make_id: Arc::new(|| Uuid::new_v4().to_string()),
        }
    }

    /// Replaces the identity id generator (default: UUID v4).
    pub fn with_id_provider<F>(mut self, make_id: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.make_id = Arc::new(make_id);
        self
    }

    /// Shows the form. A second open is a no-op: neither the purchase
    /// context nor the field values are touched, so an interrupted flow can
    /// be resumed.
    pub fn open(&self, purchase: Option<PurchaseContext>) {
        let mut state = self.state.lock().unwrap();
        if state.visible {
            return;
        }
        state.visible = true;
        state.purchase = purchase;
    }

    /// Hides the form and resets the submission lifecycle. Invokable from
    /// any submission state; a submission still in flight resolves as a
    /// no-op afterwards. Field values are kept.
    pub fn close(&self) {
        let closed = {
            let mut state = self.state.lock().unwrap();
            if !state.visible {
                false
            } else {
                state.close();
                true
            }
        };
        if closed {
            (self.on_close)();
        }
    }

    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        self.state.lock().unwrap().fields.set(field, value);
    }

    /// Flips between sign-up and log-in. Refused while a submission is in
    /// flight. A stale failure reason is dropped since it described the
    /// other mode's submission; field values are kept.
    pub fn toggle_mode(&self) {
        let mut state = self.state.lock().unwrap();
        if state.submission.is_submitting() {
            return;
        }
        state.mode = state.mode.toggled();
        if state.submission.error().is_some() {
            state.submission = Submission::Idle;
        }
    }

    /// Runs one submission: validate, call the account service, then either
    /// close and hand the identity to the payment continuation or surface
    /// the failure reason. Re-entrant submits are ignored while one is in
    /// flight, and a submission whose modal was closed mid-flight changes
    /// nothing when it resolves.
    pub async fn submit(&self) {
        let (mode, fields, epoch) = {
            let mut state = self.state.lock().unwrap();
            if !state.visible || state.submission.is_submitting() {
                return;
            }
            state.submission = Submission::Submitting;
            if let Err(reason) = validate(state.mode, &state.fields) {
                state.submission = Submission::Failed(reason.to_string());
                return;
            }
            (state.mode, state.fields.clone(), state.epoch)
        };

        let outcome = self.service.create_account(mode, &fields).await;

        // Callbacks run outside the lock so they may call back into the
        // controller.
        let handoff = {
            let mut state = self.state.lock().unwrap();
            if state.epoch != epoch {
                debug!("submission resolved after close, dropping outcome");
                return;
            }
            match outcome {
                Ok(()) => {
                    // The identity carries the form's current values, not the
                    // pre-await snapshot: an edit made while the service ran
                    // is included.
                    let identity = UserIdentity {
                        id: (self.make_id)(),
                        username: state.fields.username.clone(),
                        email: state.fields.email.clone(),
                        full_name: state.fields.full_name.clone(),
                        phone: state.fields.phone.clone(),
                    };
                    state.close();
                    Some(identity)
                }
                Err(err) => {
                    state.submission = Submission::Failed(err.reason().to_string());
                    None
                }
            }
        };

        if let Some(identity) = handoff {
            (self.on_close)();
            (self.on_proceed_to_payment)(identity);
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().unwrap().visible
    }

    pub fn mode(&self) -> AuthMode {
        self.state.lock().unwrap().mode
    }

    pub fn submission(&self) -> Submission {
        self.state.lock().unwrap().submission.clone()
    }

    pub fn fields(&self) -> SignupFields {
        self.state.lock().unwrap().fields.clone()
    }

    pub fn purchase(&self) -> Option<PurchaseContext> {
        self.state.lock().unwrap().purchase.clone()
    }

    /// Header line for the form, derived from the pending purchase.
    pub fn prompt(&self) -> String {
        let state = self.state.lock().unwrap();
        let action = match state.mode {
            AuthMode::SignUp => "Sign up",
            AuthMode::LogIn => "Log in",
        };
        match &state.purchase {
            Some(beat) => format!(
                "{} to buy \"{}\" by {} for ${:.2}",
                action, beat.title, beat.producer_name, beat.price
            ),
            None => format!("{} to BeatCrest", action),
        }
    }
}

fn validate(mode: AuthMode, fields: &SignupFields) -> Result<(), &'static str> {
    if mode == AuthMode::SignUp && fields.password != fields.confirm_password {
        return Err(PASSWORDS_DO_NOT_MATCH);
    }
    if fields.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(PASSWORD_TOO_SHORT);
    }
    Ok(())
}
