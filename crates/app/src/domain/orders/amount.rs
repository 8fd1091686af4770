//! Order amounts

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidAmount {
    #[error("amount is not a number")]
    NotANumber,

    #[error("amount must be positive")]
    NotPositive,
}

/// A positive currency amount held at two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Round `value` to cents and reject anything that is not above zero.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAmount::NotPositive`] when the rounded amount is zero or negative.
    pub fn new(value: Decimal) -> Result<Self, InvalidAmount> {
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        if rounded <= Decimal::ZERO {
            return Err(InvalidAmount::NotPositive);
        }

        Ok(Self(rounded))
    }

    /// Parse a plain or scientific decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is not numeric or not positive.
    pub fn parse(input: &str) -> Result<Self, InvalidAmount> {
        let trimmed = input.trim();

        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| InvalidAmount::NotANumber)?;

        Self::new(value)
    }

    #[must_use]
    pub const fn as_decimal(self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = InvalidAmount;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:.2}", self.0)
    }
}
