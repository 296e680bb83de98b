pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod report;

pub use config::Config;
pub use domain::{
    Calculation, Decimal, EconomicsForm, RateSchedule, TaxTier, TotalResult, UnitCount,
    UnitEconomicsInput, UnitResult,
};
pub use engine::{aggregate, CalculationError, UnitCalculator};
pub use error::AppError;
