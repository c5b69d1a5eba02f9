use super::model::Session;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimePeriod {
    #[default]
    Whole,
    Morning,
    Afternoon,
    Night,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::Whole,
        TimePeriod::Morning,
        TimePeriod::Afternoon,
        TimePeriod::Night,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::Whole => "WHOLE",
            TimePeriod::Morning => "MORNING",
            TimePeriod::Afternoon => "AFTERNOON",
            TimePeriod::Night => "NIGHT",
        }
    }

    /// Whether a start hour falls in this bucket. Night wraps past midnight.
    pub fn contains_hour(&self, hour: i32) -> bool {
        match self {
            TimePeriod::Whole => true,
            TimePeriod::Morning => (6..12).contains(&hour),
            TimePeriod::Afternoon => (12..18).contains(&hour),
            TimePeriod::Night => hour >= 18 || hour < 6,
        }
    }

    pub fn matches(&self, session: &Session) -> bool {
        if *self == TimePeriod::Whole {
            return true;
        }
        start_hour(&session.time_start)
            .map(|hour| self.contains_hour(hour))
            .unwrap_or(false)
    }
}

impl FromStr for TimePeriod {
    type Err = std::convert::Infallible;

    /// Unrecognized names select the whole day.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value {
            "MORNING" => TimePeriod::Morning,
            "AFTERNOON" => TimePeriod::Afternoon,
            "NIGHT" => TimePeriod::Night,
            _ => TimePeriod::Whole,
        })
    }
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hour part of an `HH:MM` string. `None` when it is not an integer.
pub fn start_hour(time: &str) -> Option<i32> {
    let hour = time.split(':').next()?;
    hour.trim().parse().ok()
}

/// Sessions starting within `period`, in their original order.
///
/// A session whose start time cannot be read only shows up under
/// [`TimePeriod::Whole`].
pub fn filter_by_period(sessions: &[Session], period: TimePeriod) -> Vec<Session> {
    sessions
        .iter()
        .filter(|session| period.matches(session))
        .cloned()
        .collect()
}
