//! The closed set of tradable securities.

use std::fmt;
use std::str::FromStr;

use super::error::RoiError;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Security {
    AAPL,
    AMZN,
    GOOGL,
    INTC,
    MSFT,
}

impl Security {
    /// Every security, in declaration order.
    pub const ALL: [Security; 5] = [
        Security::AAPL,
        Security::AMZN,
        Security::GOOGL,
        Security::INTC,
        Security::MSFT,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn ticker(self) -> &'static str {
        match self {
            Security::AAPL => "AAPL",
            Security::AMZN => "AMZN",
            Security::GOOGL => "GOOGL",
            Security::INTC => "INTC",
            Security::MSFT => "MSFT",
        }
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ticker())
    }
}

impl FromStr for Security {
    type Err = RoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Security::ALL
            .into_iter()
            .find(|sec| sec.ticker().eq_ignore_ascii_case(name))
            .ok_or_else(|| RoiError::UnknownSecurity {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_declaration_order() {
        for (i, sec) in Security::ALL.iter().enumerate() {
            assert_eq!(sec.ordinal(), i);
        }
        assert_eq!(Security::COUNT, 5);
    }

    #[test]
    fn parse_ticker_case_insensitive() {
        assert_eq!("GOOGL".parse::<Security>().unwrap(), Security::GOOGL);
        assert_eq!(" msft ".parse::<Security>().unwrap(), Security::MSFT);
    }

    #[test]
    fn parse_unknown_ticker_fails() {
        let err = "TSLA".parse::<Security>().unwrap_err();
        assert!(matches!(err, RoiError::UnknownSecurity { name } if name == "TSLA"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for sec in Security::ALL {
            assert_eq!(sec.to_string().parse::<Security>().unwrap(), sec);
        }
    }
}
