//! Simulated price history.
//!
//! Each security gets a base price drawn in `100..300` and, for every day
//! from January 1st through `today`, that base plus a standard-normal tick
//! rounded half-up to cents. The generator is seeded, so the same seed and
//! date always give the same table.

use crate::adapters::price_table_adapter::PriceTable;
use crate::domain::reporting::start_of_year;
use crate::domain::security::Security;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

pub const DEFAULT_SEED: u64 = 0;

pub fn random_price_table(today: NaiveDate, seed: u64) -> PriceTable {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut table = PriceTable::new();
    let first = start_of_year(today);

    for security in Security::ALL {
        let base = Decimal::from(rng.gen_range(100i64..300));
        for day in first.iter_days().take_while(|d| *d <= today) {
            let tick: f64 = rng.sample(StandardNormal);
            let tick = Decimal::from_f64(tick)
                .unwrap_or_default()
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            table.insert(day, security, base + tick);
        }
    }

    tracing::debug!(%today, seed, prices = table.len(), "generated random price table");
    table
}
