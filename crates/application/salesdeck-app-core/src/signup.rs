//! Account registration.
//!
//! Failures never escape as raw transport errors: each one is classified into
//! a [`RegistrationError`] whose `Display` is the message shown to the user.

use salesdeck_infra::{ApiClient, ApiError, ApiErrorKind, RegisterRequest};
use tracing::{debug, error};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("{0} is required.")]
    MissingField(&'static str),
    /// Message supplied by the server in the error body.
    #[error("{0}")]
    Rejected(String),
    #[error("Invalid registration data. Please check your information.")]
    InvalidData,
    #[error("User with this email already exists.")]
    DuplicateAccount,
    #[error("Server error. Please try again later.")]
    ServerError,
    #[error("No response from server. Please check your connection.")]
    NoResponse,
    #[error("An error occurred during registration. Please try again.")]
    Unknown,
}

impl From<&ApiError> for RegistrationError {
    fn from(err: &ApiError) -> Self {
        if let Some(message) = err.server_message() {
            return RegistrationError::Rejected(message.to_string());
        }
        match (err.kind(), err.status()) {
            (_, Some(400)) => RegistrationError::InvalidData,
            (_, Some(409)) => RegistrationError::DuplicateAccount,
            (ApiErrorKind::ServerError, _) => RegistrationError::ServerError,
            (ApiErrorKind::NoResponse, _) => RegistrationError::NoResponse,
            (ApiErrorKind::InvalidUrl, _) => RegistrationError::Rejected(err.to_string()),
            _ => RegistrationError::Unknown,
        }
    }
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), RegistrationError> {
        for (field, value) in [
            ("Full name", &self.name),
            ("Email address", &self.email),
            ("Password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(RegistrationError::MissingField(field));
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Submits the form. On success the form is cleared.
    pub async fn submit(&mut self, api: &ApiClient) -> Result<(), RegistrationError> {
        self.validate()?;

        match api.register(&self.to_request()).await {
            Ok(_) => {}
            // A 2xx with a body we can't read still created the account.
            Err(e) if e.kind() == ApiErrorKind::Decode => {
                debug!("Registration succeeded with unreadable body: {e}");
            }
            Err(e) => {
                error!("Registration error: {e}");
                return Err(RegistrationError::from(&e));
            }
        }

        self.clear();
        Ok(())
    }
}
