//! # Domain Enums
//!
//! - [`Condition`] - whether a vehicle is new or used

use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Condition of a vehicle.
///
/// # Examples
///
/// ```
/// use vehicles_api::domain::value_objects::Condition;
///
/// let condition: Condition = "used".parse().unwrap();
/// assert_eq!(condition, Condition::Used);
/// assert_eq!(condition.to_string(), "USED");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Condition {
    /// Never registered to an owner.
    #[default]
    New = 0,
    /// Previously owned.
    Used = 1,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "NEW"),
            Self::Used => write!(f, "USED"),
        }
    }
}

impl FromStr for Condition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NEW" => Ok(Self::New),
            "USED" => Ok(Self::Used),
            _ => Err(DomainError::InvalidCondition(s.to_string())),
        }
    }
}
