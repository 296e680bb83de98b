//! Pure computation engine for unit economics.
//!
//! `UnitCalculator` produces the single-unit breakdown under an injected
//! `RateSchedule`; `aggregate` scales it to the sold volume.

use thiserror::Error;

pub mod aggregate;
pub mod calculator;

pub use aggregate::aggregate;
pub use calculator::UnitCalculator;

/// A figure left the representable decimal range.
///
/// Validated forms never reach this; it guards direct callers with
/// unbounded inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("{0} overflowed the decimal range")]
    Overflow(&'static str),
}
