//! Product catalogue shown by the storefront.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;

/// Order kind understood by the checkout API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderKind {
    Template,
    Course,
}

impl OrderKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Template => "template",
            Self::Course => "curso",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown product: {0}")]
pub struct UnknownProduct(pub String);

/// A purchasable catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductKey {
    SiteBancario,
    RedeSocial,
    Curso,
}

impl ProductKey {
    pub const ALL: [Self; 3] = [Self::SiteBancario, Self::RedeSocial, Self::Curso];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SiteBancario => "site_bancario",
            Self::RedeSocial => "rede_social",
            Self::Curso => "curso",
        }
    }

    /// Catalogue price in reais.
    #[must_use]
    pub fn price(self) -> Decimal {
        match self {
            Self::SiteBancario => Decimal::new(29_990, 2),
            Self::RedeSocial => Decimal::new(34_990, 2),
            Self::Curso => Decimal::new(49_990, 2),
        }
    }

    /// Price as shown on the storefront, e.g. `R$ 299.90`.
    #[must_use]
    pub fn display_price(self) -> String {
        format!("R$ {:.2}", self.price())
    }

    #[must_use]
    pub const fn order_kind(self) -> OrderKind {
        match self {
            Self::Curso => OrderKind::Course,
            Self::SiteBancario | Self::RedeSocial => OrderKind::Template,
        }
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductKey {
    type Err = UnknownProduct;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|product| product.as_str() == value)
            .ok_or_else(|| UnknownProduct(value.to_string()))
    }
}
