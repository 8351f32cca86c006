#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Mutex;
use ytdroi::domain::error::RoiError;
use ytdroi::domain::security::Security;
use ytdroi::ports::price_port::PricePort;

/// Price source with explicit entries, an optional catch-all price, and a log
/// of every lookup.
pub struct MockPricePort {
    pub prices: HashMap<(NaiveDate, Security), Decimal>,
    pub default: Option<Decimal>,
    pub lookups: Mutex<Vec<(NaiveDate, Security)>>,
}

impl MockPricePort {
    pub fn new() -> Self {
        Self {
            prices: HashMap::new(),
            default: None,
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn with_price(mut self, date: NaiveDate, security: Security, price: Decimal) -> Self {
        self.prices.insert((date, security), price);
        self
    }

    /// Same price for every security on `date`.
    pub fn with_day(mut self, date: NaiveDate, price: Decimal) -> Self {
        for security in Security::ALL {
            self.prices.insert((date, security), price);
        }
        self
    }

    pub fn with_default(mut self, price: Decimal) -> Self {
        self.default = Some(price);
        self
    }
}

impl PricePort for MockPricePort {
    fn get_price(&self, date: NaiveDate, security: Security) -> Result<Decimal, RoiError> {
        self.lookups.lock().unwrap().push((date, security));
        self.prices
            .get(&(date, security))
            .copied()
            .or(self.default)
            .ok_or(RoiError::PriceNotFound { security, date })
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Day 200 of 2019.
pub fn today() -> NaiveDate {
    date(2019, 7, 19)
}

pub fn days_ago(n: i64) -> NaiveDate {
    today() - chrono::Duration::days(n)
}
