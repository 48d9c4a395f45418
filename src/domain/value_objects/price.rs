//! # Price Value Object
//!
//! Market price of a single vehicle.
//!
//! # Invariants
//!
//! - Amount is strictly positive
//! - Amount carries exactly two fractional digits, rounded half-up
//!
//! # Examples
//!
//! ```
//! use vehicles_api::domain::value_objects::{Price, VehicleId};
//! use rust_decimal::Decimal;
//!
//! let price = Price::usd(Decimal::new(1234565, 3), VehicleId::new(1)).unwrap();
//! assert_eq!(price.amount().to_string(), "1234.57");
//! assert_eq!(price.currency(), "USD");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::ids::VehicleId;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency used by every catalog price.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Number of fractional digits kept on an amount.
pub const PRICE_SCALE: u32 = 2;

/// Price of a vehicle.
///
/// Serialized as `{"currency": "USD", "price": "12345.67", "vehicleId": 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPrice", into = "RawPrice")]
pub struct Price {
    currency: String,
    amount: Decimal,
    vehicle_id: VehicleId,
}

impl Price {
    /// Creates a price, rounding the amount half-up to two decimals.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the currency is blank or the
    /// rounded amount is not strictly positive.
    pub fn new(
        currency: impl Into<String>,
        amount: Decimal,
        vehicle_id: VehicleId,
    ) -> DomainResult<Self> {
        let currency = currency.into();
        if currency.trim().is_empty() {
            return Err(DomainError::invalid_price("currency must not be empty"));
        }

        let mut amount =
            amount.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(PRICE_SCALE);
        if amount <= Decimal::ZERO {
            return Err(DomainError::invalid_price(format!(
                "amount must be positive, got {amount}"
            )));
        }

        Ok(Self {
            currency,
            amount,
            vehicle_id,
        })
    }

    /// Creates a price in [`DEFAULT_CURRENCY`].
    ///
    /// # Errors
    ///
    /// Same as [`Price::new`].
    pub fn usd(amount: Decimal, vehicle_id: VehicleId) -> DomainResult<Self> {
        Self::new(DEFAULT_CURRENCY, amount, vehicle_id)
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the amount (scale 2).
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the vehicle this price belongs to.
    #[inline]
    #[must_use]
    pub fn vehicle_id(&self) -> VehicleId {
        self.vehicle_id
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPrice {
    currency: String,
    price: Decimal,
    vehicle_id: VehicleId,
}

impl TryFrom<RawPrice> for Price {
    type Error = DomainError;

    fn try_from(raw: RawPrice) -> Result<Self, Self::Error> {
        Self::new(raw.currency, raw.price, raw.vehicle_id)
    }
}

impl From<Price> for RawPrice {
    fn from(price: Price) -> Self {
        Self {
            currency: price.currency,
            price: price.amount,
            vehicle_id: price.vehicle_id,
        }
    }
}
