use super::types::{IdentityCredential, LoginRequest};
use crate::error::AppError;
use leptos::*;

pub const IDENTITY_LOGIN_FAILED: &str = "Google login failed. Please try again.";

/// Global function name the identity provider's button calls back into.
pub const IDENTITY_CALLBACK: &str = "handleIdentityCredential";

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, AppError> {
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        validate_credentials(&email, &password)?;
        Ok(LoginRequest {
            email: email.trim().to_string(),
            password,
        })
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), AppError> {
    let mut missing = Vec::new();
    if email.trim().is_empty() {
        missing.push("Email".to_string());
    }
    if password.is_empty() {
        missing.push("Password".to_string());
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingFields(missing))
    }
}

/// Turns the provider's callback payload into a credential, treating a
/// missing or blank token as a failed sign-in.
pub fn credential_from_response(
    token: Option<String>,
    client_id: Option<String>,
) -> Result<IdentityCredential, AppError> {
    match token.map(|t| t.trim().to_string()) {
        Some(credential) if !credential.is_empty() => Ok(IdentityCredential {
            credential,
            client_id,
        }),
        _ => Err(AppError::login_failed(IDENTITY_LOGIN_FAILED)),
    }
}
