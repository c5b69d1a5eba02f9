use crate::{
    pages::login::types::HostIdentity,
    sessions::Session,
    state::{auth::AuthState, sessions::SessionsState},
};
use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders `view` with a seeded session list and, optionally, a logged-in host.
pub fn render_with_state<F, N>(sessions: Vec<Session>, host: Option<HostIdentity>, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_context(SessionsState::new(sessions));
        provide_context(create_signal(AuthState {
            is_authenticated: host.is_some(),
            host,
            loading: false,
        }));
        view()
    })
}
