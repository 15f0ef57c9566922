//! Carnê-Leão calculation modules.
//!
//! Everything in here is a pure, synchronous computation: the monthly
//! income-tax assessment, the GPS contribution, the statutory due dates
//! and the annual totals.

pub mod annual;
pub mod carne_leao;
pub mod common;
pub mod due_dates;
pub mod gps;

pub use annual::{AnnualSummary, annual_summary};
pub use carne_leao::{
    BracketResolution, CarneLeao, CarneLeaoConfig, CarneLeaoConfigError, TaxCalculation,
};
pub use due_dates::{
    DueDateError, darf_due_date, darf_due_date_br, gps_due_date, gps_due_date_br,
};
pub use gps::{Gps, GpsConfig, GpsConfigError};
