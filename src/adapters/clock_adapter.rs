//! Date sources.

use crate::ports::date_port::DatePort;
use chrono::{Local, NaiveDate};

/// Today's date in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl DatePort for SystemClock {
    fn current_date(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl DatePort for FixedClock {
    fn current_date(&self) -> NaiveDate {
        self.0
    }
}
