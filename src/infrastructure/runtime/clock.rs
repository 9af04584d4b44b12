use crate::domain::ports::clock::Clock;
use chrono::{NaiveDate, Utc};
use chrono_tz::Asia::Taipei;

/// Today's date as observed in Taipei, regardless of the host time zone.
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&Taipei).date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Clone, Debug)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
