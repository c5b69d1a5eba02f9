use crate::error::AppError;
use crate::pages::host::utils::SessionFormState;
use crate::router::use_go_to;
use crate::sessions::{submit_edits, Session, SessionDraft};
use crate::state::{
    auth::use_auth,
    notice::{use_notice, NoticeState},
    sessions::{use_sessions, SessionsState},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct HostDashboardViewModel {
    pub sessions: SessionsState,
    pub form: SessionFormState,
    pub editing: RwSignal<Option<String>>,
    pub notice: RwSignal<NoticeState>,
    pub go_to: Callback<String>,
}

impl HostDashboardViewModel {
    pub fn new() -> Self {
        Self {
            sessions: use_sessions(),
            form: SessionFormState::default(),
            editing: create_rw_signal(None),
            notice: use_notice(),
            go_to: use_go_to(),
        }
    }

    pub fn listing(&self) -> Signal<Vec<Session>> {
        self.sessions.all()
    }

    pub fn start_edit(&self, id: String) {
        match self.sessions.find(&id) {
            Some(session) => {
                self.form.load_from_session(&session);
                self.editing.set(Some(id));
            }
            None => self
                .notice
                .update(|n| n.set_error(AppError::SessionNotFound(id))),
        }
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
        self.form.reset();
    }

    /// Validates the open form and replaces the session being edited.
    pub fn save_edit(&self) -> Result<(), AppError> {
        let result = self.try_save();
        match &result {
            Ok(title) => {
                self.notice
                    .update(|n| n.set_success(format!("Session \"{title}\" updated successfully")));
                self.cancel_edit();
            }
            Err(err) => {
                log::warn!("session edit rejected: {err}");
                self.notice.update(|n| n.set_error(err.clone()));
            }
        }
        result.map(|_| ())
    }

    fn try_save(&self) -> Result<String, AppError> {
        let Some(id) = self.editing.get_untracked() else {
            return Err(AppError::SessionNotFound(String::new()));
        };
        let original = self
            .sessions
            .find(&id)
            .ok_or_else(|| AppError::SessionNotFound(id.clone()))?;
        let updated = submit_edits(&original, &self.form.edits())?;
        let title = updated.title.clone();
        self.sessions.save(&id, updated)?;
        Ok(title)
    }

    pub fn toggle(&self, id: String) {
        match self.sessions.toggle_vacancy(&id) {
            Ok(status) => {
                let title = self.sessions.find(&id).map(|s| s.title).unwrap_or_default();
                self.notice.update(|n| {
                    n.set_success(format!("Session \"{title}\" vacancies updated to {status}"))
                });
            }
            Err(err) => self.notice.update(|n| n.set_error(err)),
        }
    }

    pub fn post_new(&self) {
        self.go_to.call("/host/new".to_string());
    }
}

impl Default for HostDashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct PostSessionViewModel {
    pub sessions: SessionsState,
    pub form: SessionFormState,
    pub notice: RwSignal<NoticeState>,
    pub host_name: Signal<Option<String>>,
    pub go_to: Callback<String>,
}

impl PostSessionViewModel {
    pub fn new() -> Self {
        let (auth, _) = use_auth();
        Self {
            sessions: use_sessions(),
            form: SessionFormState::default(),
            notice: use_notice(),
            host_name: Signal::derive(move || auth.get().host.map(|host| host.display_name)),
            go_to: use_go_to(),
        }
    }

    /// Posts the form as a new session and returns to the dashboard.
    pub fn submit(&self) -> Result<(), AppError> {
        let mut draft = match SessionDraft::try_from(&self.form.edits()) {
            Ok(draft) => draft,
            Err(err) => {
                self.notice.update(|n| n.set_error(err.clone()));
                return Err(err);
            }
        };
        draft.host = self.host_name.get_untracked();
        match self.sessions.post(draft) {
            Some(id) => log::info!("host posted session {id}"),
            None => log::warn!("session store dropped before posting"),
        }
        self.notice
            .update(|n| n.set_success("Session posted successfully!"));
        self.form.reset();
        self.go_to.call("/host".to_string());
        Ok(())
    }

    pub fn cancel(&self) {
        self.form.reset();
        self.go_to.call("/host".to_string());
    }
}

impl Default for PostSessionViewModel {
    fn default() -> Self {
        Self::new()
    }
}
