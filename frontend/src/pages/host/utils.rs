use crate::sessions::{Session, SessionEdits, SessionField};
use leptos::*;

/// One text signal per editable session field.
#[derive(Clone, Copy)]
pub struct SessionFormState {
    title: RwSignal<String>,
    player_level: RwSignal<String>,
    location: RwSignal<String>,
    price: RwSignal<String>,
    date: RwSignal<String>,
    time_start: RwSignal<String>,
    time_end: RwSignal<String>,
    remarks: RwSignal<String>,
}

impl Default for SessionFormState {
    fn default() -> Self {
        Self {
            title: create_rw_signal(String::new()),
            player_level: create_rw_signal(String::new()),
            location: create_rw_signal(String::new()),
            price: create_rw_signal(String::new()),
            date: create_rw_signal(String::new()),
            time_start: create_rw_signal(String::new()),
            time_end: create_rw_signal(String::new()),
            remarks: create_rw_signal(String::new()),
        }
    }
}

impl SessionFormState {
    pub fn signal(&self, field: SessionField) -> RwSignal<String> {
        match field {
            SessionField::Title => self.title,
            SessionField::PlayerLevel => self.player_level,
            SessionField::Location => self.location,
            SessionField::Price => self.price,
            SessionField::Date => self.date,
            SessionField::TimeStart => self.time_start,
            SessionField::TimeEnd => self.time_end,
            SessionField::Remarks => self.remarks,
        }
    }

    pub fn load_from_session(&self, session: &Session) {
        for field in SessionField::ALL {
            self.signal(field).set(field.read(session));
        }
    }

    pub fn reset(&self) {
        for field in SessionField::ALL {
            self.signal(field).set(String::new());
        }
    }

    /// Snapshot of every field as typed.
    pub fn edits(&self) -> SessionEdits {
        SessionField::ALL
            .into_iter()
            .map(|field| (field, self.signal(field).get_untracked()))
            .collect()
    }
}

pub fn input_type(field: SessionField) -> &'static str {
    match field {
        SessionField::Price => "number",
        SessionField::Date => "date",
        SessionField::TimeStart | SessionField::TimeEnd => "time",
        _ => "text",
    }
}

pub fn field_label(field: SessionField) -> String {
    if field.is_required() {
        format!("{} *", field.label())
    } else {
        format!("{} (optional)", field.label())
    }
}

/// Dashboard row key: position first since ids may collide, then the full
/// record so an edited row is rebuilt.
pub fn row_key((index, session): &(usize, Session)) -> (usize, String) {
    (*index, format!("{session:?}"))
}

pub fn vacancy_toggle_label(session: &Session) -> &'static str {
    if session.is_full() {
        "Mark Available"
    } else {
        "Mark Full"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sessions::Vacancy;
    use crate::test_support::helpers::session;

    #[test]
    fn input_types_match_fields() {
        assert_eq!(input_type(SessionField::Price), "number");
        assert_eq!(input_type(SessionField::TimeEnd), "time");
        assert_eq!(input_type(SessionField::Title), "text");
    }

    #[test]
    fn labels_mark_required_fields() {
        assert_eq!(field_label(SessionField::Title), "Title *");
        assert_eq!(field_label(SessionField::Remarks), "Remarks (optional)");
    }

    #[test]
    fn row_keys_differ_for_identical_colliding_posts() {
        let twin = session("BEG_042", "07:00", "08:00");
        let first = row_key(&(0, twin.clone()));
        let second = row_key(&(1, twin));
        assert_ne!(first, second);
    }

    #[test]
    fn toggle_label_flips_with_status() {
        let mut s = session("A1", "07:00", "08:00");
        assert_eq!(vacancy_toggle_label(&s), "Mark Full");
        s.vacancies = Vacancy::Full;
        assert_eq!(vacancy_toggle_label(&s), "Mark Available");
    }
}
