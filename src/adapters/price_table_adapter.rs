//! In-memory price source.

use crate::domain::error::RoiError;
use crate::domain::security::Security;
use crate::ports::price_port::PricePort;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Prices keyed by day and security.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    prices: BTreeMap<(NaiveDate, Security), Decimal>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate, security: Security, price: Decimal) {
        self.prices.insert((date, security), price);
    }

    pub fn with_price(mut self, date: NaiveDate, security: Security, price: Decimal) -> Self {
        self.insert(date, security, price);
        self
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Entries ordered by date, then security.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Security, Decimal)> + '_ {
        self.prices
            .iter()
            .map(|(&(date, security), &price)| (date, security, price))
    }
}

impl PricePort for PriceTable {
    fn get_price(&self, date: NaiveDate, security: Security) -> Result<Decimal, RoiError> {
        self.prices
            .get(&(date, security))
            .copied()
            .ok_or(RoiError::PriceNotFound { security, date })
    }
}
