//! Security price port trait.

use crate::domain::error::RoiError;
use crate::domain::security::Security;
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub trait PricePort {
    /// Price of `security` on exactly `date`.
    ///
    /// Fails with [`RoiError::PriceNotFound`] when no price is known for that
    /// pair; implementations must not fall back to another day.
    fn get_price(&self, date: NaiveDate, security: Security) -> Result<Decimal, RoiError>;
}
