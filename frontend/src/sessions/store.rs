use super::id::generate_session_id;
use super::model::{Session, SessionDraft, Vacancy};
use crate::error::AppError;
use log::{debug, info};
use rand::Rng;

/// In-memory list of sessions, in posting order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore {
    sessions: Vec<Session>,
}

impl From<Vec<Session>> for SessionStore {
    fn from(sessions: Vec<Session>) -> Self {
        Self { sessions }
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|session| session.id == id)
    }

    /// Appends a posted session under a freshly generated id and returns it.
    pub fn add(&mut self, draft: SessionDraft) -> String {
        self.add_with_rng(draft, &mut rand::thread_rng())
    }

    pub fn add_with_rng<R: Rng + ?Sized>(&mut self, draft: SessionDraft, rng: &mut R) -> String {
        let id = generate_session_id(&draft.player_level, rng);
        if self.get(&id).is_some() {
            debug!("session id {id} is already in use");
        }
        info!("adding session {id}");
        self.sessions.push(Session::from_draft(id.clone(), draft));
        id
    }

    /// Appends an already identified session, as seeding does.
    pub fn insert(&mut self, session: Session) {
        self.sessions.push(session);
    }

    /// Replaces every session whose id matches. Positions are preserved.
    pub fn update(&mut self, id: &str, session: Session) -> Result<(), AppError> {
        let mut replaced = 0;
        for slot in self.sessions.iter_mut().filter(|existing| existing.id == id) {
            *slot = session.clone();
            replaced += 1;
        }
        if replaced == 0 {
            return Err(AppError::SessionNotFound(id.to_string()));
        }
        info!("updated {replaced} session(s) with id {id}");
        Ok(())
    }

    /// Flips the status of every session with this id and reports the new
    /// status of the first one.
    pub fn toggle_vacancy(&mut self, id: &str) -> Result<Vacancy, AppError> {
        let mut first = None;
        for session in self.sessions.iter_mut().filter(|existing| existing.id == id) {
            session.vacancies = session.vacancies.toggled();
            first.get_or_insert(session.vacancies);
        }
        let status = first.ok_or_else(|| AppError::SessionNotFound(id.to_string()))?;
        info!("session {id} vacancies now {status}");
        Ok(status)
    }
}
