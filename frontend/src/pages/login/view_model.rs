use super::types::{AuthMode, HostIdentity, IdentityCredential, LoginRequest};
use super::utils::{credential_from_response, LoginFormState};
use crate::error::AppError;
use crate::router::use_go_to;
use crate::state::{
    auth,
    notice::{use_notice, NoticeState},
};
use leptos::*;

pub const PASSWORD_LOGIN_SUCCESS: &str = "Logged in successfully!";
pub const IDENTITY_LOGIN_SUCCESS: &str = "Logged in with Google successfully!";

/// Notice left by a finished identity-provider login.
fn record_identity_result(notice: &mut NoticeState, result: &Result<HostIdentity, AppError>) {
    match result {
        Ok(_) => notice.set_success(IDENTITY_LOGIN_SUCCESS),
        Err(err) => notice.set_error(err.clone()),
    }
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub mode: RwSignal<AuthMode>,
    pub error: RwSignal<Option<AppError>>,
    pub login_action: Action<LoginRequest, Result<HostIdentity, AppError>>,
    pub identity_action: Action<Result<IdentityCredential, AppError>, Result<HostIdentity, AppError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    /// Entry point for the identity provider's sign-in callback.
    pub fn identity_response(&self, token: Option<String>, client_id: Option<String>) {
        self.identity_action
            .dispatch(credential_from_response(token, client_id));
    }

    pub fn toggle_mode(&self) {
        self.mode.update(|mode| *mode = mode.toggled());
        self.error.set(None);
    }

    pub fn pending(&self) -> Signal<bool> {
        let password = self.login_action.pending();
        let identity = self.identity_action.pending();
        Signal::derive(move || password.get() || identity.get())
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<AppError>);
    let login_action = auth::use_login_action();
    let identity_action = auth::use_identity_login_action();
    let notice = use_notice();
    let go_to = use_go_to();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    form.password.set(String::new());
                    notice.update(|n| n.set_success(PASSWORD_LOGIN_SUCCESS));
                    go_to.call("/host".to_string());
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = identity_action.value().get() {
            notice.update(|n| record_identity_result(n, &result));
            if result.is_ok() {
                go_to.call("/host".to_string());
            }
        }
    });

    LoginViewModel {
        form,
        mode: create_rw_signal(AuthMode::default()),
        error,
        login_action,
        identity_action,
    }
}
