//! Cash and per-security holdings of one account at a point in time.

use rust_decimal::Decimal;
use std::fmt;

use super::numeric::Quantity;
use super::security::Security;

/// Account snapshot: one cash balance (single currency) and a quantity for
/// every security. Securities never held read as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    cash: Decimal,
    quantities: [Quantity; Security::COUNT],
}

impl Position {
    pub fn new(cash: Decimal) -> Self {
        Position {
            cash,
            quantities: [Quantity::zero(); Security::COUNT],
        }
    }

    /// Builder form of [`Position::set_quantity`].
    pub fn with_quantity(mut self, security: Security, quantity: Quantity) -> Self {
        self.set_quantity(security, quantity);
        self
    }

    /// Independent copy; mutating it leaves `self` untouched.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    pub fn cash(&self) -> Decimal {
        self.cash
    }

    pub fn set_cash(&mut self, cash: Decimal) {
        self.cash = cash;
    }

    pub fn quantity(&self, security: Security) -> Quantity {
        self.quantities[security.ordinal()]
    }

    pub fn set_quantity(&mut self, security: Security, quantity: Quantity) {
        self.quantities[security.ordinal()] = quantity;
    }

    /// Quantities paired with their security, in [`Security::ALL`] order.
    pub fn holdings(&self) -> impl Iterator<Item = (Security, Quantity)> + '_ {
        Security::ALL.into_iter().map(|sec| (sec, self.quantity(sec)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position{{cash={}, quantities=[", self.cash)?;
        for (i, (sec, qty)) in self.holdings().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{sec}: {qty}")?;
        }
        f.write_str("]}")
    }
}
