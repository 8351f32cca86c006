//! Year-to-date return on investment.
//!
//! The account value at January 1st is not stored anywhere, so it is
//! rebuilt by undoing every transaction between today and the start of the
//! year on a private copy of the current position. Both snapshots are then
//! priced and the relative gain is annualized:
//!
//! ```text
//! initial  = cash(jan 1) + sum(qty(jan 1) * price(jan 1))
//! current  = cash(today) + sum(qty(today) * price(today))
//! absolute = (current - initial) / initial * 100
//! roi      = absolute * LENGTH_OF_YEAR / day_of_year(today)
//! ```

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::RoiError;
use super::numeric::{Percentage, Quantity};
use super::position::Position;
use super::security::Security;
use super::transaction::{Transaction, TransactionType};
use crate::ports::config_port::{ConfigPort, LENGTH_OF_YEAR};
use crate::ports::date_port::DatePort;
use crate::ports::price_port::PricePort;

/// Fractional digits kept for the unannualized return.
pub const ABSOLUTE_ROI_SCALE: u32 = 10;

/// Fractional digits of the reported return.
pub const ROI_SCALE: u32 = 2;

/// Half-up rounding, as used for money.
const HALF_UP: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Reports on a position using the injected collaborators. Holds no state
/// of its own, so one instance can serve any number of calculations, from
/// any number of threads.
pub struct ReportingService<'a> {
    config: &'a (dyn ConfigPort + Sync),
    prices: &'a (dyn PricePort + Sync),
    clock: &'a (dyn DatePort + Sync),
}

impl<'a> ReportingService<'a> {
    pub fn new(
        config: &'a (dyn ConfigPort + Sync),
        prices: &'a (dyn PricePort + Sync),
        clock: &'a (dyn DatePort + Sync),
    ) -> Self {
        ReportingService {
            config,
            prices,
            clock,
        }
    }

    /// Annualized return since January 1st, in percent with two decimals.
    ///
    /// `transactions` may be in any order and may contain entries before the
    /// start of the year or after today; see [`rewind`] for how those affect
    /// the walk. `current` is only read.
    pub fn calculate_return_on_investment_ytd(
        &self,
        current: &Position,
        transactions: &[Transaction],
    ) -> Result<Decimal, RoiError> {
        let today = self.clock.current_date();
        let beginning_of_year = start_of_year(today);

        let initial = rewind(current, transactions, today, beginning_of_year)?;

        let initial_value = self.value_of(&initial, beginning_of_year)?;
        let current_value = self.value_of(current, today)?;

        let absolute = absolute_roi(initial_value, current_value)?;
        let year_length = self.year_length()?;
        Ok(annualize(absolute, year_length, today.ordinal())?.value())
    }

    /// Cash plus every holding at its price on `date`.
    pub fn value_of(&self, position: &Position, date: NaiveDate) -> Result<Decimal, RoiError> {
        let mut total = position.cash();
        for security in Security::ALL {
            let price = self.prices.get_price(date, security)?;
            total = position
                .quantity(security)
                .value()
                .checked_mul(price)
                .and_then(|holding| total.checked_add(holding))
                .ok_or_else(|| overflow("valuing the position"))?;
        }
        Ok(total)
    }

    fn year_length(&self) -> Result<i64, RoiError> {
        let days = self
            .config
            .get_int(LENGTH_OF_YEAR)?
            .ok_or_else(|| RoiError::MissingConfiguration {
                key: LENGTH_OF_YEAR.to_string(),
            })?;
        if days <= 0 {
            return Err(RoiError::InvalidConfiguration {
                key: LENGTH_OF_YEAR.to_string(),
                reason: format!("must be a positive number of days (got {days})"),
            });
        }
        Ok(days)
    }
}

pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    // day 1 exists in every year
    date.with_ordinal(1).unwrap_or(date)
}

/// Rebuilds the position as it stood at `beginning_of_year` by undoing
/// transactions, most recent first, one calendar day at a time.
///
/// Only the most recent pending transaction is compared with the visited
/// day. Every pending transaction dated on that day is undone, same-day ones
/// in input order. The walk ends once every transaction has been consumed,
/// even before reaching `beginning_of_year`. A transaction dated after
/// `today` is never matched, so it holds back every transaction behind it.
pub fn rewind(
    current: &Position,
    transactions: &[Transaction],
    today: NaiveDate,
    beginning_of_year: NaiveDate,
) -> Result<Position, RoiError> {
    let mut working = current.duplicate();

    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    // stable, so ties keep their input order
    ordered.sort_by(|a, b| b.date().cmp(&a.date()));
    let mut pending = ordered.into_iter().peekable();

    let mut day = today;
    while day >= beginning_of_year {
        if pending.peek().is_none() {
            break;
        }
        while let Some(tx) = pending.next_if(|tx| tx.date() == day) {
            revert(&mut working, tx)?;
        }
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }

    Ok(working)
}

/// Undoes the effect of `transaction` on `position`.
pub fn revert(position: &mut Position, transaction: &Transaction) -> Result<(), RoiError> {
    let cash = position.cash();
    let moved = transaction.cash();
    let cash = match transaction.kind() {
        TransactionType::Buy | TransactionType::Withdrawal => cash.checked_add(moved),
        TransactionType::Sell | TransactionType::Deposit => cash.checked_sub(moved),
    }
    .ok_or_else(|| overflow("reverting a transaction"))?;
    position.set_cash(cash);

    if let Some(security) = transaction.security() {
        let held = position.quantity(security).value();
        let quantity = transaction.quantity().value();
        let restored = match transaction.kind() {
            TransactionType::Buy => held.checked_sub(quantity),
            TransactionType::Sell => held.checked_add(quantity),
            TransactionType::Deposit | TransactionType::Withdrawal => Some(held),
        }
        .ok_or_else(|| overflow("reverting a transaction"))?;
        position.set_quantity(security, Quantity::new(restored));
    }
    Ok(())
}

/// `(current - initial) / initial * 100`, or zero when nothing was invested
/// at the start.
pub fn absolute_roi(
    initial_value: Decimal,
    current_value: Decimal,
) -> Result<Percentage, RoiError> {
    if initial_value.is_zero() {
        let mut zero = Decimal::ZERO;
        zero.rescale(ABSOLUTE_ROI_SCALE);
        return Ok(Percentage::new(zero));
    }
    current_value
        .checked_sub(initial_value)
        .and_then(|gain| gain.checked_div(initial_value))
        .map(|ratio| ratio.round_dp_with_strategy(ABSOLUTE_ROI_SCALE, HALF_UP))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(Percentage::new)
        .ok_or_else(|| overflow("computing the return"))
}

/// Scales a period return to `year_length` days, rounded half-up to
/// [`ROI_SCALE`] digits.
pub fn annualize(
    absolute: Percentage,
    year_length: i64,
    day_of_year: u32,
) -> Result<Percentage, RoiError> {
    let scaled = absolute
        .value()
        .checked_mul(Decimal::from(year_length))
        .and_then(|v| v.checked_div(Decimal::from(day_of_year)))
        .ok_or_else(|| overflow("annualizing"))?;
    let mut roi = scaled.round_dp_with_strategy(ROI_SCALE, HALF_UP);
    roi.rescale(ROI_SCALE);
    Ok(Percentage::new(roi))
}

fn overflow(operation: &'static str) -> RoiError {
    RoiError::Overflow { operation }
}
