pub mod calculations;
pub mod format;
pub mod models;
pub mod store;

pub use calculations::{
    AnnualSummary, BracketResolution, CarneLeao, CarneLeaoConfig, Gps, GpsConfig, TaxCalculation,
};
pub use models::*;
pub use store::RecordStore;
