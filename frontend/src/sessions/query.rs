use super::filter::{filter_by_period, TimePeriod};
use super::model::Session;
use chrono::NaiveDate;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceBand {
    #[default]
    Any,
    UpTo50,
    From51To100,
    Over100,
}

impl PriceBand {
    pub const ALL: [PriceBand; 4] = [
        PriceBand::Any,
        PriceBand::UpTo50,
        PriceBand::From51To100,
        PriceBand::Over100,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBand::Any => "",
            PriceBand::UpTo50 => "0-50",
            PriceBand::From51To100 => "51-100",
            PriceBand::Over100 => "101+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceBand::Any => "All Prices",
            PriceBand::UpTo50 => "$0 - $50",
            PriceBand::From51To100 => "$51 - $100",
            PriceBand::Over100 => "$101+",
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        match self {
            PriceBand::Any => true,
            PriceBand::UpTo50 => price <= 50.0,
            PriceBand::From51To100 => price > 50.0 && price <= 100.0,
            PriceBand::Over100 => price > 100.0,
        }
    }
}

impl FromStr for PriceBand {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(PriceBand::ALL
            .into_iter()
            .find(|band| band.as_str() == value)
            .unwrap_or_default())
    }
}

/// Everything the directory can narrow the list by.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionQuery {
    pub period: TimePeriod,
    pub search: String,
    pub level: Option<String>,
    pub location: Option<String>,
    pub price: PriceBand,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl SessionQuery {
    pub fn with_period(period: TimePeriod) -> Self {
        Self {
            period,
            ..Self::default()
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Period bucket first, then the remaining criteria. Order is kept.
    pub fn apply(&self, sessions: &[Session]) -> Vec<Session> {
        let mut visible = filter_by_period(sessions, self.period);
        visible.retain(|session| self.matches_details(session));
        visible
    }

    fn matches_details(&self, session: &Session) -> bool {
        self.matches_search(session)
            && self.matches_level(session)
            && self.matches_location(session)
            && self.price.contains(session.price)
            && self.matches_dates(session)
    }

    fn matches_search(&self, session: &Session) -> bool {
        let needle = self.search.trim();
        needle.is_empty() || contains_ignore_case(&session.id, needle)
    }

    fn matches_level(&self, session: &Session) -> bool {
        match non_blank(&self.level) {
            Some(level) => session.player_level.eq_ignore_ascii_case(level),
            None => true,
        }
    }

    fn matches_location(&self, session: &Session) -> bool {
        match non_blank(&self.location) {
            Some(location) => contains_ignore_case(&session.location, location),
            None => true,
        }
    }

    fn matches_dates(&self, session: &Session) -> bool {
        if self.date_from.is_none() && self.date_to.is_none() {
            return true;
        }
        let Ok(date) = NaiveDate::parse_from_str(session.date.trim(), "%Y-%m-%d") else {
            return false;
        };
        self.date_from.map_or(true, |from| date >= from) && self.date_to.map_or(true, |to| date <= to)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::session;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ids(sessions: &[Session]) -> Vec<&str> {
        sessions.iter().map(|s| s.id.as_str()).collect()
    }

    fn catalogue() -> Vec<Session> {
        let mut beg = session("BEG_001", "07:00", "09:00");
        beg.player_level = "Beginner".into();
        beg.price = 40.0;
        beg.location = "Hong Kong Sports Centre".into();
        beg.date = "2024-10-01".into();

        let mut int = session("INT_120", "13:00", "15:00");
        int.player_level = "Intermediate".into();
        int.price = 75.0;
        int.location = "Kowloon Park".into();
        int.date = "2024-10-03".into();

        let mut adv = session("ADV_777", "20:00", "22:00");
        adv.player_level = "Advanced".into();
        adv.price = 120.0;
        adv.location = "Victoria Park".into();
        adv.date = "2024-10-07".into();

        vec![beg, int, adv]
    }

    #[test]
    fn default_query_shows_everything() {
        let sessions = catalogue();
        let query = SessionQuery::default();
        assert!(query.is_default());
        assert_eq!(query.apply(&sessions), sessions);
    }

    #[test]
    fn search_matches_id_substring_case_insensitively() {
        let query = SessionQuery {
            search: "int_".into(),
            ..SessionQuery::default()
        };
        assert_eq!(ids(&query.apply(&catalogue())), ["INT_120"]);
    }

    #[test]
    fn level_and_location_filters() {
        let query = SessionQuery {
            level: Some("advanced".into()),
            ..SessionQuery::default()
        };
        assert_eq!(ids(&query.apply(&catalogue())), ["ADV_777"]);

        let query = SessionQuery {
            location: Some("park".into()),
            ..SessionQuery::default()
        };
        assert_eq!(ids(&query.apply(&catalogue())), ["INT_120", "ADV_777"]);

        let query = SessionQuery {
            level: Some("  ".into()),
            ..SessionQuery::default()
        };
        assert_eq!(query.apply(&catalogue()).len(), 3);
    }

    #[test]
    fn price_bands_partition_prices() {
        assert!(PriceBand::UpTo50.contains(50.0));
        assert!(!PriceBand::UpTo50.contains(50.5));
        assert!(PriceBand::From51To100.contains(50.5));
        assert!(PriceBand::From51To100.contains(100.0));
        assert!(PriceBand::Over100.contains(100.01));
        assert_eq!("51-100".parse::<PriceBand>().unwrap(), PriceBand::From51To100);
        assert_eq!("whatever".parse::<PriceBand>().unwrap(), PriceBand::Any);

        let query = SessionQuery {
            price: PriceBand::Over100,
            ..SessionQuery::default()
        };
        assert_eq!(ids(&query.apply(&catalogue())), ["ADV_777"]);
    }

    #[test]
    fn date_range_is_inclusive() {
        let query = SessionQuery {
            date_from: Some(ymd(2024, 10, 3)),
            date_to: Some(ymd(2024, 10, 7)),
            ..SessionQuery::default()
        };
        assert_eq!(ids(&query.apply(&catalogue())), ["INT_120", "ADV_777"]);

        let open_ended = SessionQuery {
            date_to: Some(ymd(2024, 10, 1)),
            ..SessionQuery::default()
        };
        assert_eq!(ids(&open_ended.apply(&catalogue())), ["BEG_001"]);
    }

    #[test]
    fn unparseable_date_only_hidden_when_range_set() {
        let mut odd = session("ODD_001", "10:00", "11:00");
        odd.date = "next week".into();
        let sessions = vec![odd];
        assert_eq!(SessionQuery::default().apply(&sessions).len(), 1);
        let ranged = SessionQuery {
            date_from: Some(ymd(2024, 1, 1)),
            ..SessionQuery::default()
        };
        assert!(ranged.apply(&sessions).is_empty());
    }

    #[test]
    fn period_combines_with_other_criteria() {
        let query = SessionQuery {
            period: TimePeriod::Night,
            location: Some("kowloon".into()),
            ..SessionQuery::default()
        };
        assert!(query.apply(&catalogue()).is_empty());
        let query = SessionQuery {
            location: Some("victoria".into()),
            ..SessionQuery::with_period(TimePeriod::Night)
        };
        assert_eq!(ids(&query.apply(&catalogue())), ["ADV_777"]);
    }
}
