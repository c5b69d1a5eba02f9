#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token returned by the identity provider's sign-in callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityCredential {
    pub credential: String,
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginMethod {
    Password,
    IdentityProvider,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostIdentity {
    pub display_name: String,
    pub email: Option<String>,
    pub method: LoginMethod,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    pub fn switch_prompt(&self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account? ",
            AuthMode::Register => "Already have an account? ",
        }
    }
}
