use super::types::{HostIdentity, IdentityCredential, LoginMethod, LoginRequest};
use crate::error::AppError;
use async_trait::async_trait;
use std::rc::Rc;

/// Decides whether submitted credentials identify a host.
#[async_trait(?Send)]
pub trait CredentialVerifier {
    async fn verify_password(&self, request: &LoginRequest) -> Result<HostIdentity, AppError>;

    async fn verify_identity_token(
        &self,
        credential: &IdentityCredential,
    ) -> Result<HostIdentity, AppError>;
}

/// Mock verifier: every email/password pair and every identity token is
/// accepted. This is not authentication; swap in a real verifier before
/// relying on host identity for anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAnyCredentials;

#[async_trait(?Send)]
impl CredentialVerifier for AcceptAnyCredentials {
    async fn verify_password(&self, request: &LoginRequest) -> Result<HostIdentity, AppError> {
        let email = request.email.trim().to_string();
        Ok(HostIdentity {
            display_name: email.clone(),
            email: Some(email),
            method: LoginMethod::Password,
        })
    }

    async fn verify_identity_token(
        &self,
        _credential: &IdentityCredential,
    ) -> Result<HostIdentity, AppError> {
        Ok(HostIdentity {
            display_name: "Google account".into(),
            email: None,
            method: LoginMethod::IdentityProvider,
        })
    }
}

#[derive(Clone)]
pub struct LoginRepository {
    verifier: Rc<dyn CredentialVerifier>,
}

impl Default for LoginRepository {
    fn default() -> Self {
        Self::new(Rc::new(AcceptAnyCredentials))
    }
}

impl LoginRepository {
    pub fn new(verifier: Rc<dyn CredentialVerifier>) -> Self {
        Self { verifier }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<HostIdentity, AppError> {
        self.verifier.verify_password(request).await
    }

    pub async fn login_with_identity(
        &self,
        credential: &IdentityCredential,
    ) -> Result<HostIdentity, AppError> {
        self.verifier.verify_identity_token(credential).await
    }
}
