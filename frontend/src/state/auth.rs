use crate::{
    error::AppError,
    pages::login::{
        repository::LoginRepository,
        types::{HostIdentity, IdentityCredential, LoginRequest},
        utils::IDENTITY_LOGIN_FAILED,
    },
};
use leptos::*;
use log::{info, warn};

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub host: Option<HostIdentity>,
    pub is_authenticated: bool,
    pub loading: bool,
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context::<AuthContext>(create_signal(AuthState::default()));
    if use_context::<LoginRepository>().is_none() {
        provide_context(LoginRepository::default());
    }
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

fn use_login_repository() -> LoginRepository {
    use_context::<LoginRepository>().unwrap_or_default()
}

fn finish_login(
    result: Result<HostIdentity, AppError>,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<HostIdentity, AppError> {
    match result {
        Ok(host) => {
            info!("host {} logged in", host.display_name);
            set_auth_state.update(|state| {
                state.host = Some(host.clone());
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(host)
        }
        Err(error) => {
            warn!("login rejected: {error}");
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<HostIdentity, AppError> {
    set_auth_state.update(|state| state.loading = true);
    let result = repo.login(&request).await;
    finish_login(result, set_auth_state)
}

/// Handles the identity provider's callback. A failed callback, or a token
/// the verifier refuses, leaves the current auth state as it was.
pub async fn identity_login(
    response: Result<IdentityCredential, AppError>,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<HostIdentity, AppError> {
    let credential = match response {
        Ok(credential) => credential,
        Err(error) => {
            warn!("identity provider reported failure: {error}");
            return Err(error);
        }
    };
    set_auth_state.update(|state| state.loading = true);
    let result = repo
        .login_with_identity(&credential)
        .await
        .map_err(|_| AppError::login_failed(IDENTITY_LOGIN_FAILED));
    finish_login(result, set_auth_state)
}

pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    set_auth_state.update(|state| {
        state.host = None;
        state.is_authenticated = false;
        state.loading = false;
    });
    info!("host logged out");
}

pub fn use_login_action() -> Action<LoginRequest, Result<HostIdentity, AppError>> {
    let (_auth, set_auth) = use_auth();
    let repo = use_login_repository();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_identity_login_action(
) -> Action<Result<IdentityCredential, AppError>, Result<HostIdentity, AppError>> {
    let (_auth, set_auth) = use_auth();
    let repo = use_login_repository();

    create_action(move |response: &Result<IdentityCredential, AppError>| {
        let response = response.clone();
        let repo = repo.clone();
        async move { identity_login(response, &repo, set_auth).await }
    })
}
