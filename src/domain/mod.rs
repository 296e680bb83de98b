//! Domain types for marketplace unit economics.
//!
//! This module provides:
//! - Lossless numeric handling via Decimal wrapper
//! - Domain primitives: UnitCount, TaxTier
//! - The injected RateSchedule
//! - Calculator form, canonical input, and result types

pub mod decimal;
pub mod input;
pub mod primitives;
pub mod rates;
pub mod result;

pub use decimal::Decimal;
pub use input::{
    EconomicsForm, UnitEconomicsInput, MAX_MONEY, MAX_PERCENT, MAX_UNITS_SOLD, REQUIRED_FIELDS,
};
pub use primitives::{TaxTier, UnitCount};
pub use rates::RateSchedule;
pub use result::{Calculation, TierMap, TotalResult, UnitResult};
