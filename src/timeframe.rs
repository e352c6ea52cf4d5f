use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};

use crate::models::TodoItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    Today,
    Tomorrow,
    ThisWeek,
}

/// Unrecognised alias; the message lists the accepted ones.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not a valid timeframe [today, tomorrow, thisweek]")]
pub struct InvalidTimeframe(pub String);

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::Today, Timeframe::Tomorrow, Timeframe::ThisWeek];

    pub fn alias(self) -> &'static str {
        match self {
            Timeframe::Today => "today",
            Timeframe::Tomorrow => "tomorrow",
            Timeframe::ThisWeek => "thisweek",
        }
    }

    /// `today` is the current UTC date at midnight.
    pub fn matches(self, expire_at: DateTime<Utc>, today: DateTime<Utc>) -> bool {
        match self {
            Timeframe::Today => expire_at == today,
            // Selects items that expired the day before `today`.
            // TODO: confirm whether this should be `expire_at == today + 1 day`.
            Timeframe::Tomorrow => expire_at == today - Duration::days(1),
            Timeframe::ThisWeek => expire_at >= today && expire_at < today + Duration::days(7),
        }
    }

    /// Half-open `[from, to)` range of expiration dates that can match.
    pub fn window(self, today: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        match self {
            Timeframe::Today => (today, today + Duration::seconds(1)),
            Timeframe::Tomorrow => {
                let day = today - Duration::days(1);
                (day, day + Duration::seconds(1))
            }
            Timeframe::ThisWeek => (today, today + Duration::days(7)),
        }
    }

    pub fn filter(self, items: Vec<TodoItem>, today: DateTime<Utc>) -> Vec<TodoItem> {
        items
            .into_iter()
            .filter(|item| self.matches(item.expire_at, today))
            .collect()
    }
}

impl FromStr for Timeframe {
    type Err = InvalidTimeframe;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" => Ok(Timeframe::Today),
            "tomorrow" => Ok(Timeframe::Tomorrow),
            "thisweek" => Ok(Timeframe::ThisWeek),
            _ => Err(InvalidTimeframe(s.to_string())),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}

/// Midnight UTC of the day containing `now`.
pub fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .unwrap_or(now)
}
