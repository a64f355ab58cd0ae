//! Order model for the pricing kernel.
//!
//! The kernel reads orders only through the [`Quote`] and [`TimedQuote`]
//! accessors, so callers can hand it their own records without copying
//! them into [`Order`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::OrderId;

/// Which side of the book an order is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// Read access to the price and quantity of a queued order.
pub trait Quote {
    /// Limit price of the order.
    fn price(&self) -> Decimal;
    /// Full quantity of the order.
    fn quantity(&self) -> Decimal;
}

/// A [`Quote`] that also carries its arrival time.
pub trait TimedQuote: Quote {
    /// Arrival timestamp; smaller is earlier.
    fn timestamp(&self) -> u64;
}

impl<T: Quote + ?Sized> Quote for &T {
    fn price(&self) -> Decimal {
        (**self).price()
    }

    fn quantity(&self) -> Decimal {
        (**self).quantity()
    }
}

impl<T: TimedQuote + ?Sized> TimedQuote for &T {
    fn timestamp(&self) -> u64 {
        (**self).timestamp()
    }
}

/// `(price, quantity)` pairs.
impl Quote for (Decimal, Decimal) {
    fn price(&self) -> Decimal {
        self.0
    }

    fn quantity(&self) -> Decimal {
        self.1
    }
}

/// Core order record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub price: Decimal,
    pub quantity: Decimal,
    /// Arrival time, only consulted by sequential crossing.
    pub timestamp: u64,
}

impl Order {
    #[must_use]
    pub fn new(price: Decimal, quantity: Decimal) -> Self {
        Self::timed(0, price, quantity)
    }

    #[must_use]
    pub fn timed(timestamp: u64, price: Decimal, quantity: Decimal) -> Self {
        Self {
            id: OrderId::new(),
            price,
            quantity,
            timestamp,
        }
    }
}

impl Quote for Order {
    fn price(&self) -> Decimal {
        self.price
    }

    fn quantity(&self) -> Decimal {
        self.quantity
    }
}

impl TimedQuote for Order {
    fn timestamp(&self) -> u64 {
        self.timestamp
    }
}
