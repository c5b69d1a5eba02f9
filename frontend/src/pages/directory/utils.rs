use crate::sessions::{Session, Vacancy};
use chrono::NaiveDate;

pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${price:.0}")
    } else {
        format!("${price:.2}")
    }
}

pub fn time_window(session: &Session) -> String {
    format!("{} - {}", session.time_start, session.time_end)
}

pub fn vacancy_badge_class(vacancy: Vacancy) -> &'static str {
    match vacancy {
        Vacancy::Available => "bg-green-500 text-white",
        Vacancy::Full => "bg-red-500 text-white",
    }
}

/// Pairs each session with its position. Ids may collide, so list keys
/// start with the position.
pub fn indexed(sessions: Vec<Session>) -> Vec<(usize, Session)> {
    sessions.into_iter().enumerate().collect()
}

pub fn card_key((index, session): &(usize, Session)) -> (usize, String, &'static str) {
    (*index, session.id.clone(), session.vacancies.as_str())
}

/// Value of an `<input type="date">`; blank clears the bound.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn optional_filter(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
