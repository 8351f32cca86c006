//! Cash and security movements recorded against an account.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use super::error::RoiError;
use super::numeric::Quantity;
use super::security::Security;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Securities were bought using cash.
    Buy,
    /// Securities were sold to get cash.
    Sell,
    /// Cash was added to the account.
    Deposit,
    /// Cash was removed from the account.
    Withdrawal,
}

impl TransactionType {
    pub const ALL: [TransactionType; 4] = [
        TransactionType::Buy,
        TransactionType::Sell,
        TransactionType::Deposit,
        TransactionType::Withdrawal,
    ];

    /// Whether this kind of transaction moves a security quantity.
    pub fn has_quantity(self) -> bool {
        matches!(self, TransactionType::Buy | TransactionType::Sell)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Buy => "BUY",
            TransactionType::Sell => "SELL",
            TransactionType::Deposit => "DEPOSIT",
            TransactionType::Withdrawal => "WITHDRAWAL",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = RoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        TransactionType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| RoiError::InvalidTransaction {
                field: "type",
                reason: format!("unknown transaction type {name:?}"),
            })
    }
}

/// A single movement. Magnitudes are never negative; the direction comes
/// from the [`TransactionType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionType,
    date: NaiveDate,
    cash: Decimal,
    security: Option<Security>,
    quantity: Quantity,
}

impl Transaction {
    pub fn new(
        kind: TransactionType,
        date: NaiveDate,
        cash: Decimal,
        security: Option<Security>,
        quantity: Quantity,
    ) -> Result<Self, RoiError> {
        if cash.is_sign_negative() && !cash.is_zero() {
            return Err(RoiError::InvalidTransaction {
                field: "cash",
                reason: format!("must not be negative (got {cash})"),
            });
        }
        if quantity.is_sign_negative() {
            return Err(RoiError::InvalidTransaction {
                field: "quantity",
                reason: format!("must not be negative (got {quantity})"),
            });
        }
        if kind.has_quantity() && security.is_none() {
            return Err(RoiError::InvalidTransaction {
                field: "security",
                reason: format!("is required for {kind}"),
            });
        }
        Ok(Transaction {
            kind,
            date,
            cash,
            // cash movements never name a security
            security: security.filter(|_| kind.has_quantity()),
            quantity,
        })
    }

    pub fn deposit(date: NaiveDate, cash: Decimal) -> Result<Self, RoiError> {
        Self::new(TransactionType::Deposit, date, cash, None, Quantity::zero())
    }

    pub fn withdrawal(date: NaiveDate, cash: Decimal) -> Result<Self, RoiError> {
        Self::new(TransactionType::Withdrawal, date, cash, None, Quantity::zero())
    }

    pub fn buy(
        date: NaiveDate,
        security: Security,
        quantity: Quantity,
        cash: Decimal,
    ) -> Result<Self, RoiError> {
        Self::new(TransactionType::Buy, date, cash, Some(security), quantity)
    }

    pub fn sell(
        date: NaiveDate,
        security: Security,
        quantity: Quantity,
        cash: Decimal,
    ) -> Result<Self, RoiError> {
        Self::new(TransactionType::Sell, date, cash, Some(security), quantity)
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Cash exchanged, always non-negative.
    pub fn cash(&self) -> Decimal {
        self.cash
    }

    /// Security moved; only set for quantity-bearing types.
    pub fn security(&self) -> Option<Security> {
        self.security
    }

    /// Quantity exchanged, always non-negative.
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 7, 9).unwrap()
    }

    #[test]
    fn has_quantity_only_for_security_movements() {
        assert!(TransactionType::Buy.has_quantity());
        assert!(TransactionType::Sell.has_quantity());
        assert!(!TransactionType::Deposit.has_quantity());
        assert!(!TransactionType::Withdrawal.has_quantity());
    }

    #[test]
    fn parse_transaction_type() {
        assert_eq!("buy".parse::<TransactionType>().unwrap(), TransactionType::Buy);
        assert_eq!(
            "WITHDRAWAL".parse::<TransactionType>().unwrap(),
            TransactionType::Withdrawal
        );
        let err = "transfer".parse::<TransactionType>().unwrap_err();
        assert!(matches!(err, RoiError::InvalidTransaction { field: "type", .. }));
    }

    #[test]
    fn deposit_fields() {
        let tx = Transaction::deposit(day(), dec!(100)).unwrap();
        assert_eq!(tx.kind(), TransactionType::Deposit);
        assert_eq!(tx.date(), day());
        assert_eq!(tx.cash(), dec!(100));
        assert_eq!(tx.security(), None);
        assert!(tx.quantity().is_zero());
    }

    #[test]
    fn buy_fields() {
        let tx = Transaction::buy(day(), Security::GOOGL, Quantity::from(50), dec!(5000)).unwrap();
        assert_eq!(tx.kind(), TransactionType::Buy);
        assert_eq!(tx.security(), Some(Security::GOOGL));
        assert_eq!(tx.quantity(), Quantity::from(50));
        assert_eq!(tx.cash(), dec!(5000));
    }

    #[test]
    fn cash_movement_drops_security() {
        let tx = Transaction::new(
            TransactionType::Withdrawal,
            day(),
            dec!(25),
            Some(Security::INTC),
            Quantity::zero(),
        )
        .unwrap();
        assert_eq!(tx.security(), None);
        assert_eq!(tx, Transaction::withdrawal(day(), dec!(25)).unwrap());
    }

    #[test]
    fn negative_cash_rejected() {
        let err = Transaction::deposit(day(), dec!(-1)).unwrap_err();
        assert!(matches!(err, RoiError::InvalidTransaction { field: "cash", .. }));
    }

    #[test]
    fn negative_quantity_rejected() {
        let err =
            Transaction::sell(day(), Security::MSFT, Quantity::from(-5), dec!(10)).unwrap_err();
        assert!(matches!(err, RoiError::InvalidTransaction { field: "quantity", .. }));
    }

    #[test]
    fn zero_magnitudes_accepted() {
        assert!(Transaction::withdrawal(day(), Decimal::ZERO).is_ok());
        assert!(Transaction::buy(day(), Security::AAPL, Quantity::zero(), Decimal::ZERO).is_ok());
        assert!(Transaction::deposit(day(), dec!(-0.00)).is_ok());
    }

    #[test]
    fn security_movement_requires_security() {
        let err = Transaction::new(
            TransactionType::Buy,
            day(),
            dec!(10),
            None,
            Quantity::from(1),
        )
        .unwrap_err();
        assert!(matches!(err, RoiError::InvalidTransaction { field: "security", .. }));
    }
}
