#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::pages::login::types::{HostIdentity, LoginMethod};
    use crate::sessions::{Session, SessionDraft, Vacancy};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn session(id: &str, time_start: &str, time_end: &str) -> Session {
        Session {
            id: id.into(),
            title: format!("Session {id}"),
            player_level: "Intermediate".into(),
            location: "Hong Kong Sports Centre".into(),
            price: 60.0,
            date: "2024-10-01".into(),
            time_start: time_start.into(),
            time_end: time_end.into(),
            remarks: None,
            host: None,
            vacancies: Vacancy::Available,
        }
    }

    pub fn draft(title: &str, player_level: &str) -> SessionDraft {
        SessionDraft {
            title: title.into(),
            player_level: player_level.into(),
            location: "Hong Kong Sports Centre".into(),
            price: 50.0,
            date: "2024-10-05".into(),
            time_start: "10:00".into(),
            time_end: "12:00".into(),
            remarks: None,
            host: None,
        }
    }

    pub fn host() -> HostIdentity {
        HostIdentity {
            display_name: "host@example.com".into(),
            email: Some("host@example.com".into()),
            method: LoginMethod::Password,
        }
    }

    pub fn provide_auth(
        host: Option<HostIdentity>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: host.is_some(),
            host,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
