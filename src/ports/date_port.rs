//! Current-date port trait.

use chrono::NaiveDate;

pub trait DatePort {
    fn current_date(&self) -> NaiveDate;
}
