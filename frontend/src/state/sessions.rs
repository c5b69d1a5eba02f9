use crate::{
    config,
    error::AppError,
    sessions::{Session, SessionDraft, SessionQuery, SessionStore, Vacancy},
};
use leptos::*;

/// Session list and directory query, owned by the application root.
#[derive(Clone, Copy)]
pub struct SessionsState {
    pub store: RwSignal<SessionStore>,
    pub query: RwSignal<SessionQuery>,
}

impl SessionsState {
    pub fn new(seed: Vec<Session>) -> Self {
        Self {
            store: create_rw_signal(SessionStore::from(seed)),
            query: create_rw_signal(SessionQuery::default()),
        }
    }

    pub fn visible(&self) -> Signal<Vec<Session>> {
        let store = self.store;
        let query = self.query;
        Signal::derive(move || query.with(|q| store.with(|s| q.apply(s.sessions()))))
    }

    pub fn all(&self) -> Signal<Vec<Session>> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.sessions().to_vec()))
    }

    pub fn find(&self, id: &str) -> Option<Session> {
        self.store.with_untracked(|s| s.get(id).cloned())
    }

    /// New session id, or `None` once the owning scope has been disposed.
    pub fn post(&self, draft: SessionDraft) -> Option<String> {
        self.store.try_update(|store| store.add(draft))
    }

    pub fn save(&self, id: &str, session: Session) -> Result<(), AppError> {
        self.store
            .try_update(|store| store.update(id, session))
            .unwrap_or_else(|| Err(AppError::SessionNotFound(id.to_string())))
    }

    pub fn toggle_vacancy(&self, id: &str) -> Result<Vacancy, AppError> {
        self.store
            .try_update(|store| store.toggle_vacancy(id))
            .unwrap_or_else(|| Err(AppError::SessionNotFound(id.to_string())))
    }
}

#[component]
pub fn SessionsProvider(children: Children) -> impl IntoView {
    let state = SessionsState::new(config::runtime_config().sessions.clone());
    provide_context(state);
    view! { <>{children()}</> }
}

pub fn use_sessions() -> SessionsState {
    match use_context::<SessionsState>() {
        Some(state) => state,
        None => {
            let state = SessionsState::new(Vec::new());
            provide_context(state);
            state
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::sessions::TimePeriod;
    use crate::test_support::helpers::{draft, session};
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn visible_follows_query_changes() {
        with_runtime(|| {
            let state = SessionsState::new(vec![
                session("A1", "07:00", "08:00"),
                session("A2", "19:00", "20:00"),
            ]);
            let visible = state.visible();
            assert_eq!(visible.get().len(), 2);
            state.query.update(|q| q.period = TimePeriod::Morning);
            let ids: Vec<String> = visible.get().into_iter().map(|s| s.id).collect();
            assert_eq!(ids, vec!["A1".to_string()]);
        });
    }

    #[test]
    fn post_then_toggle_marks_full() {
        with_runtime(|| {
            let state = use_sessions();
            let id = state.post(draft("Casual Play", "Beginner")).unwrap();
            assert_eq!(state.find(&id).unwrap().vacancies, Vacancy::Available);
            assert_eq!(state.toggle_vacancy(&id).unwrap(), Vacancy::Full);
            assert_eq!(state.all().get().len(), 1);
        });
    }

    #[test]
    fn save_reports_unknown_ids() {
        with_runtime(|| {
            let state = SessionsState::new(vec![session("A1", "07:00", "08:00")]);
            let err = state
                .save("nope", session("nope", "07:00", "08:00"))
                .unwrap_err();
            assert_eq!(err.code(), "NOT_FOUND");
            assert_eq!(state.all().get().len(), 1);
        });
    }
}
