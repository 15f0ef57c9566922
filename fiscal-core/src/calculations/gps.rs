//! GPS (INSS) contribution calculation.
//!
//! Self-employed contributors pay under one of two plans: the simplified
//! plan at 11% of the minimum wage, fixed by law regardless of earnings,
//! or the standard plan at 20% of a declared base bounded by the minimum
//! wage and the INSS ceiling.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use fiscal_core::calculations::Gps;
//! use fiscal_core::models::InssPlan;
//!
//! let gps = Gps::default();
//!
//! assert_eq!(gps.contribution(dec!(3000.00), InssPlan::Simplified), dec!(155.32));
//! assert_eq!(gps.contribution(dec!(3000.00), InssPlan::Standard), dec!(600.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::clamp;
use crate::models::InssPlan;

/// Errors raised when validating a [`GpsConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GpsConfigError {
    /// The minimum wage must be positive.
    #[error("minimum wage must be positive, got {0}")]
    InvalidMinimumWage(Decimal),

    /// The ceiling must not be below the minimum wage.
    #[error("INSS ceiling must be at least the minimum wage, got {0}")]
    InvalidCeiling(Decimal),

    /// A contribution rate must lie within [0, 1].
    #[error("contribution rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),
}

/// Statutory INSS parameters.
///
/// `Default` carries the 2024 values: minimum wage R$ 1412.00, ceiling
/// R$ 7786.02, rates 11% and 20%.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpsConfig {
    pub minimum_wage: Decimal,
    pub inss_ceiling: Decimal,
    pub simplified_rate: Decimal,
    pub standard_rate: Decimal,
}

impl Default for GpsConfig {
    fn default() -> Self {
        Self {
            minimum_wage: Decimal::new(1412_00, 2),
            inss_ceiling: Decimal::new(7786_02, 2),
            simplified_rate: Decimal::new(11, 2),
            standard_rate: Decimal::new(20, 2),
        }
    }
}

impl GpsConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`GpsConfigError`] if the minimum wage is not positive,
    /// the ceiling falls below the minimum wage, or a rate is outside
    /// [0, 1].
    pub fn validate(&self) -> Result<(), GpsConfigError> {
        if self.minimum_wage <= Decimal::ZERO {
            return Err(GpsConfigError::InvalidMinimumWage(self.minimum_wage));
        }
        if self.inss_ceiling < self.minimum_wage {
            return Err(GpsConfigError::InvalidCeiling(self.inss_ceiling));
        }
        for rate in [self.simplified_rate, self.standard_rate] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(GpsConfigError::InvalidRate(rate));
            }
        }
        Ok(())
    }
}

/// Calculator for the monthly GPS contribution.
#[derive(Debug, Clone)]
pub struct Gps {
    config: GpsConfig,
}

impl Default for Gps {
    /// Calculator with the statutory 2024 parameters.
    fn default() -> Self {
        Self {
            config: GpsConfig::default(),
        }
    }
}

impl Gps {
    /// Creates a calculator with a custom configuration, validating it
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`GpsConfigError`] when the configuration is malformed;
    /// see [`GpsConfig::validate`].
    pub fn new(config: GpsConfig) -> Result<Self, GpsConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GpsConfig {
        &self.config
    }

    /// Contribution owed for the month.
    ///
    /// The simplified plan is fixed to the minimum wage by law, so `base`
    /// is ignored. The standard plan clamps `base` into the
    /// wage-to-ceiling band; an out-of-range base is adjusted, never
    /// rejected.
    pub fn contribution(
        &self,
        base: Decimal,
        plan: InssPlan,
    ) -> Decimal {
        match plan {
            InssPlan::Simplified => self.config.minimum_wage * self.config.simplified_rate,
            InssPlan::Standard => {
                let valid_base = clamp(base, self.config.minimum_wage, self.config.inss_ceiling);
                valid_base * self.config.standard_rate
            }
        }
    }
}
