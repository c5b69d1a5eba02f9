use crate::pages::directory::utils::{date_input_value, optional_filter, parse_date_input};
use crate::sessions::{PriceBand, Session, SessionQuery, TimePeriod};
use crate::state::sessions::{use_sessions, SessionsState};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DirectoryViewModel {
    pub sessions: SessionsState,
    pub search_input: RwSignal<String>,
    pub visible: Signal<Vec<Session>>,
}

impl DirectoryViewModel {
    pub fn new() -> Self {
        let sessions = use_sessions();
        let search_input =
            create_rw_signal(sessions.query.with_untracked(|query| query.search.clone()));
        Self {
            sessions,
            search_input,
            visible: sessions.visible(),
        }
    }

    fn query(&self) -> RwSignal<SessionQuery> {
        self.sessions.query
    }

    /// The id search only applies on submit, the rest of the filters apply
    /// as soon as they change.
    pub fn apply_search(&self) {
        let needle = self.search_input.get_untracked().trim().to_string();
        log::debug!("directory search for {needle:?}");
        self.query().update(|query| query.search = needle);
    }

    pub fn period(&self) -> Signal<TimePeriod> {
        let query = self.query();
        Signal::derive(move || query.with(|q| q.period))
    }

    pub fn set_period(&self, period: TimePeriod) {
        self.query().update(|query| query.period = period);
    }

    pub fn level_value(&self) -> Signal<String> {
        let query = self.query();
        Signal::derive(move || query.with(|q| q.level.clone().unwrap_or_default()))
    }

    pub fn set_level(&self, value: String) {
        self.query().update(|query| query.level = optional_filter(value));
    }

    pub fn location_value(&self) -> Signal<String> {
        let query = self.query();
        Signal::derive(move || query.with(|q| q.location.clone().unwrap_or_default()))
    }

    pub fn set_location(&self, value: String) {
        self.query().update(|query| query.location = optional_filter(value));
    }

    pub fn price_value(&self) -> Signal<String> {
        let query = self.query();
        Signal::derive(move || query.with(|q| q.price.as_str().to_string()))
    }

    pub fn set_price(&self, value: String) {
        let band = value.parse::<PriceBand>().unwrap_or_default();
        self.query().update(|query| query.price = band);
    }

    pub fn date_from_value(&self) -> Signal<String> {
        let query = self.query();
        Signal::derive(move || query.with(|q| date_input_value(q.date_from)))
    }

    pub fn set_date_from(&self, value: String) {
        self.query().update(|query| query.date_from = parse_date_input(&value));
    }

    pub fn date_to_value(&self) -> Signal<String> {
        let query = self.query();
        Signal::derive(move || query.with(|q| date_input_value(q.date_to)))
    }

    pub fn set_date_to(&self, value: String) {
        self.query().update(|query| query.date_to = parse_date_input(&value));
    }

    pub fn has_filters(&self) -> Signal<bool> {
        let query = self.query();
        Signal::derive(move || query.with(|q| !q.is_default()))
    }

    pub fn clear(&self) {
        self.search_input.set(String::new());
        self.query().set(SessionQuery::default());
    }
}

impl Default for DirectoryViewModel {
    fn default() -> Self {
        Self::new()
    }
}
