use super::model::{Session, SessionDraft};
use crate::error::AppError;
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SessionField {
    Title,
    PlayerLevel,
    Location,
    Price,
    Date,
    TimeStart,
    TimeEnd,
    Remarks,
}

impl SessionField {
    pub const ALL: [SessionField; 8] = [
        SessionField::Title,
        SessionField::PlayerLevel,
        SessionField::Location,
        SessionField::Price,
        SessionField::Date,
        SessionField::TimeStart,
        SessionField::TimeEnd,
        SessionField::Remarks,
    ];

    /// Form input name.
    pub fn name(&self) -> &'static str {
        match self {
            SessionField::Title => "title",
            SessionField::PlayerLevel => "playerLevel",
            SessionField::Location => "location",
            SessionField::Price => "price",
            SessionField::Date => "date",
            SessionField::TimeStart => "timeStart",
            SessionField::TimeEnd => "timeEnd",
            SessionField::Remarks => "remarks",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionField::Title => "Title",
            SessionField::PlayerLevel => "Player Level",
            SessionField::Location => "Location",
            SessionField::Price => "Price",
            SessionField::Date => "Date",
            SessionField::TimeStart => "Time Start",
            SessionField::TimeEnd => "Time End",
            SessionField::Remarks => "Remarks",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, SessionField::Remarks)
    }

    /// Current value of this field rendered as form text.
    pub fn read(&self, session: &Session) -> String {
        match self {
            SessionField::Title => session.title.clone(),
            SessionField::PlayerLevel => session.player_level.clone(),
            SessionField::Location => session.location.clone(),
            SessionField::Price => format_price_input(session.price),
            SessionField::Date => session.date.clone(),
            SessionField::TimeStart => session.time_start.clone(),
            SessionField::TimeEnd => session.time_end.clone(),
            SessionField::Remarks => session.remarks.clone().unwrap_or_default(),
        }
    }
}

impl FromStr for SessionField {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SessionField::ALL
            .into_iter()
            .find(|field| field.name() == value)
            .ok_or_else(|| AppError::invalid_field(value, "is not an editable field"))
    }
}

/// Field edits keyed by field; setting a field twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionEdits(BTreeMap<SessionField, String>);

impl SessionEdits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: SessionField, value: impl Into<String>) -> &mut Self {
        self.0.insert(field, value.into());
        self
    }

    pub fn with(mut self, field: SessionField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: SessionField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SessionField, &str)> {
        self.0.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every field of `session` as an edit, used to prefill forms.
    pub fn from_session(session: &Session) -> Self {
        SessionField::ALL
            .into_iter()
            .map(|field| (field, field.read(session)))
            .collect()
    }

    fn missing(&self, fields: impl Iterator<Item = SessionField>) -> Vec<String> {
        fields
            .filter(|field| field.is_required())
            .filter(|field| self.get(*field).map_or(true, |v| v.trim().is_empty()))
            .map(|field| field.label().to_string())
            .collect()
    }
}

impl FromIterator<(SessionField, String)> for SessionEdits {
    fn from_iter<T: IntoIterator<Item = (SessionField, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Rejects edits that blank out a required field. Fields not being edited
/// keep their current value and are not checked.
pub fn validate_required(edits: &SessionEdits) -> Result<(), AppError> {
    let missing = edits.missing(edits.0.keys().copied());
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingFields(missing))
    }
}

/// Copy of `original` with each edited field overwritten.
///
/// Id, host and vacancy status are not editable. The only failure is a price
/// that does not parse as a finite number.
pub fn merge_edits(original: &Session, edits: &SessionEdits) -> Result<Session, AppError> {
    let mut merged = original.clone();
    for (field, value) in edits.iter() {
        match field {
            SessionField::Title => merged.title = value.to_string(),
            SessionField::PlayerLevel => merged.player_level = value.to_string(),
            SessionField::Location => merged.location = value.to_string(),
            SessionField::Price => merged.price = parse_price(value)?,
            SessionField::Date => merged.date = value.to_string(),
            SessionField::TimeStart => merged.time_start = value.to_string(),
            SessionField::TimeEnd => merged.time_end = value.to_string(),
            SessionField::Remarks => merged.remarks = optional_string(value),
        }
    }
    Ok(merged)
}

pub fn submit_edits(original: &Session, edits: &SessionEdits) -> Result<Session, AppError> {
    validate_required(edits)?;
    merge_edits(original, edits)
}

impl TryFrom<&SessionEdits> for SessionDraft {
    type Error = AppError;

    fn try_from(edits: &SessionEdits) -> Result<Self, Self::Error> {
        let missing = edits.missing(SessionField::ALL.into_iter());
        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }
        let text = |field: SessionField| edits.get(field).unwrap_or_default().to_string();
        Ok(SessionDraft {
            title: text(SessionField::Title),
            player_level: text(SessionField::PlayerLevel),
            location: text(SessionField::Location),
            price: parse_price(&text(SessionField::Price))?,
            date: text(SessionField::Date),
            time_start: text(SessionField::TimeStart),
            time_end: text(SessionField::TimeEnd),
            remarks: optional_string(&text(SessionField::Remarks)),
            host: None,
        })
    }
}

fn parse_price(value: &str) -> Result<f64, AppError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| AppError::invalid_field("Price", "must be a number"))
}

fn format_price_input(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        price.to_string()
    }
}

fn optional_string(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sessions::model::Vacancy;
    use crate::test_support::helpers::session;

    #[test]
    fn field_names_round_trip() {
        for field in SessionField::ALL {
            assert_eq!(field.name().parse::<SessionField>().unwrap(), field);
        }
        assert!("vacancies".parse::<SessionField>().is_err());
        assert!("id".parse::<SessionField>().is_err());
    }

    #[test]
    fn merge_overwrites_only_named_fields() {
        let mut original = session("A1", "07:00", "08:00");
        original.vacancies = Vacancy::Full;
        original.host = Some("alice@example.com".into());
        let edits = SessionEdits::new()
            .with(SessionField::Title, "Sunrise Smash")
            .with(SessionField::Price, "95.5");
        let merged = merge_edits(&original, &edits).unwrap();
        assert_eq!(merged.title, "Sunrise Smash");
        assert_eq!(merged.price, 95.5);
        assert_eq!(merged.id, original.id);
        assert_eq!(merged.location, original.location);
        assert_eq!(merged.time_start, original.time_start);
        assert_eq!(merged.vacancies, Vacancy::Full);
        assert_eq!(merged.host, original.host);
    }

    #[test]
    fn empty_edits_reproduce_original() {
        let original = session("A1", "07:00", "08:00");
        assert_eq!(merge_edits(&original, &SessionEdits::new()).unwrap(), original);
    }

    #[test]
    fn later_edit_of_same_field_wins() {
        let mut edits = SessionEdits::new();
        edits
            .set(SessionField::Location, "Kowloon Park")
            .set(SessionField::Location, "Victoria Park");
        let merged = merge_edits(&session("A1", "07:00", "08:00"), &edits).unwrap();
        assert_eq!(merged.location, "Victoria Park");
    }

    #[test]
    fn times_are_not_cross_checked() {
        let edits = SessionEdits::new()
            .with(SessionField::TimeStart, "22:00")
            .with(SessionField::TimeEnd, "08:00");
        let merged = submit_edits(&session("A1", "07:00", "08:00"), &edits).unwrap();
        assert_eq!(merged.time_start, "22:00");
        assert_eq!(merged.time_end, "08:00");
    }

    #[test]
    fn blank_remarks_clear_the_field() {
        let mut original = session("A1", "07:00", "08:00");
        original.remarks = Some("Bring shuttles".into());
        let edits = SessionEdits::new().with(SessionField::Remarks, "  ");
        assert!(submit_edits(&original, &edits).unwrap().remarks.is_none());
    }

    #[test]
    fn submit_rejects_blank_required_field() {
        let original = session("A1", "07:00", "08:00");
        let edits = SessionEdits::new()
            .with(SessionField::Title, "")
            .with(SessionField::Date, " ");
        let err = submit_edits(&original, &edits).unwrap_err();
        assert_eq!(
            err,
            AppError::MissingFields(vec!["Title".into(), "Date".into()])
        );
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let edits = SessionEdits::new().with(SessionField::Price, "cheap");
        let err = merge_edits(&session("A1", "07:00", "08:00"), &edits).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn from_session_prefills_every_field() {
        let mut original = session("A1", "07:00", "08:00");
        original.price = 80.0;
        let edits = SessionEdits::from_session(&original);
        assert_eq!(edits.get(SessionField::Price), Some("80"));
        assert_eq!(edits.get(SessionField::Remarks), Some(""));
        assert_eq!(submit_edits(&original, &edits).unwrap(), original);
    }

    #[test]
    fn draft_requires_every_required_field() {
        let edits = SessionEdits::new()
            .with(SessionField::Title, "Casual Play")
            .with(SessionField::PlayerLevel, "Beginner");
        let err = SessionDraft::try_from(&edits).unwrap_err();
        assert_eq!(
            err.details(),
            &[
                "Location".to_string(),
                "Price".to_string(),
                "Date".to_string(),
                "Time Start".to_string(),
                "Time End".to_string(),
            ]
        );
    }

    #[test]
    fn draft_from_complete_edits() {
        let edits = SessionEdits::new()
            .with(SessionField::Title, "Casual Play")
            .with(SessionField::PlayerLevel, "Beginner")
            .with(SessionField::Location, "Hong Kong Sports Centre")
            .with(SessionField::Price, "50")
            .with(SessionField::Date, "2024-10-05")
            .with(SessionField::TimeStart, "10:00")
            .with(SessionField::TimeEnd, "12:00");
        let draft = SessionDraft::try_from(&edits).unwrap();
        assert_eq!(draft.price, 50.0);
        assert!(draft.remarks.is_none());
        assert!(draft.host.is_none());
    }
}
