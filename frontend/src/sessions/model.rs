use serde::{Deserialize, Serialize};

pub const PLAYER_LEVELS: &[&str] = &["Beginner", "Intermediate", "Advanced"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vacancy {
    #[default]
    Available,
    #[serde(rename = "FULL")]
    Full,
}

impl Vacancy {
    pub fn toggled(self) -> Self {
        match self {
            Vacancy::Available => Vacancy::Full,
            Vacancy::Full => Vacancy::Available,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Vacancy::Available => "Available",
            Vacancy::Full => "FULL",
        }
    }
}

impl std::fmt::Display for Vacancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub title: String,
    pub player_level: String,
    pub location: String,
    pub price: f64,
    pub date: String,
    pub time_start: String,
    pub time_end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default)]
    pub vacancies: Vacancy,
}

/// A session as entered on the posting form, before it has an id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionDraft {
    pub title: String,
    pub player_level: String,
    pub location: String,
    pub price: f64,
    pub date: String,
    pub time_start: String,
    pub time_end: String,
    pub remarks: Option<String>,
    pub host: Option<String>,
}

impl Session {
    pub fn from_draft(id: String, draft: SessionDraft) -> Self {
        Self {
            id,
            title: draft.title,
            player_level: draft.player_level,
            location: draft.location,
            price: draft.price,
            date: draft.date,
            time_start: draft.time_start,
            time_end: draft.time_end,
            remarks: draft.remarks,
            host: draft.host,
            vacancies: Vacancy::Available,
        }
    }

    pub fn is_full(&self) -> bool {
        self.vacancies == Vacancy::Full
    }
}
