use serde::{Deserialize, Serialize};

/// Which account path a submission exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignUp,
    LogIn,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignUp => AuthMode::LogIn,
            AuthMode::LogIn => AuthMode::SignUp,
        }
    }
}

/// Name key for a single form input, the counterpart of the form's
/// name-keyed change handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Username,
    Email,
    Password,
    ConfirmPassword,
    FullName,
    Phone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupFields {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub phone: String,
}

impl SignupFields {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Username => self.username = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
            FormField::FullName => self.full_name = value,
            FormField::Phone => self.phone = value,
        }
    }
}

/// The catalog item that motivated opening the form. Display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseContext {
    pub beat_id: i32,
    pub title: String,
    pub price: f64,
    pub producer_name: String,
}

/// Minimal identity record handed to the payment continuation after a
/// successful submission. Never persisted by the form controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserIdentity {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
}
