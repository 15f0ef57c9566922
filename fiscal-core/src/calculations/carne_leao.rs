//! Carnê-Leão monthly income-tax assessment.
//!
//! Implements the monthly IRPF computation for self-employed drivers under
//! the 40% expense presumption: 40% of gross revenue is treated as exempt,
//! the remaining 60% is taxable, and the progressive monthly table is
//! applied to whatever is left after legal deductions (INSS paid and
//! livro-caixa entries).
//!
//! # Monthly IRPF table (2024/2025)
//!
//! | Base upper bound | Rate  | Fixed deduction |
//! |------------------|-------|-----------------|
//! | ≤ 2259.20        | 0%    | 0.00            |
//! | ≤ 2826.65        | 7.5%  | 169.44          |
//! | ≤ 3751.05        | 15%   | 381.44          |
//! | ≤ 4664.68        | 22.5% | 662.77          |
//! | above            | 27.5% | 896.00          |
//!
//! Boundary values belong to the lower row; the last row is open-ended.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use fiscal_core::calculations::CarneLeao;
//!
//! let engine = CarneLeao::default();
//! let calc = engine.calculate(dec!(5000.00), dec!(0), dec!(0));
//!
//! assert_eq!(calc.exempt_amount, dec!(2000.00));
//! assert_eq!(calc.taxable_income, dec!(3000.00));
//! assert_eq!(calc.tax_due, dec!(68.56));
//! assert!(calc.is_above_threshold);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::IrpfBracket;

/// Errors raised when validating a [`CarneLeaoConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarneLeaoConfigError {
    /// The exemption and taxable fractions must cover gross revenue exactly.
    #[error("exemption and taxable fractions must sum to 1, got {0}")]
    FractionSplit(Decimal),

    /// A revenue fraction must lie within [0, 1].
    #[error("revenue fraction must be between 0 and 1, got {0}")]
    InvalidFraction(Decimal),

    /// A bracket rate must lie within [0, 1].
    #[error("bracket rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    /// The IRPF table has no rows at all.
    #[error("IRPF table has no rows")]
    EmptyTable,

    /// The final table row must be open-ended so every base resolves.
    #[error("IRPF table must end with an open-ended row")]
    MissingCatchAllRow,

    /// Only the final table row may be open-ended.
    #[error("only the final IRPF table row may be open-ended")]
    EarlyCatchAllRow,

    /// Bounded rows must appear in strictly increasing order.
    #[error("IRPF table bounds must be strictly increasing, got {0}")]
    UnorderedBounds(Decimal),
}

/// Fixed statutory parameters of the Carnê-Leão assessment.
///
/// `Default` carries the 2024/2025 values; a custom table can be supplied
/// for other years and is validated by [`CarneLeao::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarneLeaoConfig {
    /// Fraction of gross revenue presumed to be expenses (exempt).
    pub exemption_fraction: Decimal,

    /// Fraction of gross revenue subject to tax.
    pub taxable_fraction: Decimal,

    /// Monthly exemption threshold used for the DARF alert flag.
    ///
    /// Numerically equal to the first bracket's upper bound today, but
    /// tracked as its own value: the alert flag and the 0% cutoff are
    /// independent checks and must stay that way.
    pub exemption_threshold: Decimal,

    /// Progressive monthly IRPF table, ordered by upper bound, with an
    /// open-ended final row.
    pub brackets: Vec<IrpfBracket>,
}

impl Default for CarneLeaoConfig {
    fn default() -> Self {
        Self {
            exemption_fraction: Decimal::new(40, 2),
            taxable_fraction: Decimal::new(60, 2),
            exemption_threshold: Decimal::new(2259_20, 2),
            brackets: vec![
                IrpfBracket {
                    upper_bound: Some(Decimal::new(2259_20, 2)),
                    rate: Decimal::ZERO,
                    fixed_deduction: Decimal::ZERO,
                },
                IrpfBracket {
                    upper_bound: Some(Decimal::new(2826_65, 2)),
                    rate: Decimal::new(75, 3),
                    fixed_deduction: Decimal::new(169_44, 2),
                },
                IrpfBracket {
                    upper_bound: Some(Decimal::new(3751_05, 2)),
                    rate: Decimal::new(150, 3),
                    fixed_deduction: Decimal::new(381_44, 2),
                },
                IrpfBracket {
                    upper_bound: Some(Decimal::new(4664_68, 2)),
                    rate: Decimal::new(225, 3),
                    fixed_deduction: Decimal::new(662_77, 2),
                },
                IrpfBracket {
                    upper_bound: None,
                    rate: Decimal::new(275, 3),
                    fixed_deduction: Decimal::new(896_00, 2),
                },
            ],
        }
    }
}

impl CarneLeaoConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`CarneLeaoConfigError`] if:
    /// - either revenue fraction is outside [0, 1]
    /// - the fractions do not sum to exactly 1
    /// - the table is empty, a non-final row is open-ended, the final row
    ///   is bounded, a rate is outside [0, 1], or bounds are not strictly
    ///   increasing
    pub fn validate(&self) -> Result<(), CarneLeaoConfigError> {
        for fraction in [self.exemption_fraction, self.taxable_fraction] {
            if fraction < Decimal::ZERO || fraction > Decimal::ONE {
                return Err(CarneLeaoConfigError::InvalidFraction(fraction));
            }
        }
        let split = self.exemption_fraction + self.taxable_fraction;
        if split != Decimal::ONE {
            return Err(CarneLeaoConfigError::FractionSplit(split));
        }

        match self.brackets.last() {
            None => return Err(CarneLeaoConfigError::EmptyTable),
            Some(last) if last.upper_bound.is_some() => {
                return Err(CarneLeaoConfigError::MissingCatchAllRow);
            }
            Some(_) => {}
        }

        let mut previous: Option<Decimal> = None;
        for bracket in &self.brackets[..self.brackets.len() - 1] {
            let Some(bound) = bracket.upper_bound else {
                return Err(CarneLeaoConfigError::EarlyCatchAllRow);
            };
            if previous.is_some_and(|prev| bound <= prev) {
                return Err(CarneLeaoConfigError::UnorderedBounds(bound));
            }
            previous = Some(bound);
        }

        for bracket in &self.brackets {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(CarneLeaoConfigError::InvalidRate(bracket.rate));
            }
        }

        Ok(())
    }
}

/// Marginal rate, fixed deduction and tax amount resolved for a taxable base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketResolution {
    /// Marginal rate as a fraction (0.15 for the 15% row).
    pub rate: Decimal,

    /// "Parcela a deduzir" of the resolved row.
    pub fixed_deduction: Decimal,

    /// `base × rate − fixed_deduction`; exactly zero for the exempt row.
    pub tax: Decimal,
}

/// Derived snapshot of one month's assessment.
///
/// Always recomputed from the inputs; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculation {
    /// 40% of gross revenue, presumed expenses.
    pub exempt_amount: Decimal,

    /// 60% of gross revenue, subject to the progressive table.
    pub taxable_income: Decimal,

    /// INSS paid plus other legal deductions.
    pub deductions_total: Decimal,

    /// Taxable income minus deductions, floored at zero.
    pub tax_base: Decimal,

    /// Tax owed for the month (the DARF amount).
    pub tax_due: Decimal,

    /// Tax due as a percentage of gross revenue; zero for zero revenue.
    pub effective_rate: Decimal,

    /// Marginal rate of the resolved bracket, as a percentage (7.5, 15, ...).
    pub bracket_rate: Decimal,

    /// "Parcela a deduzir" of the resolved bracket.
    pub fixed_deduction: Decimal,

    /// Whether the base crossed the monthly exemption threshold.
    pub is_above_threshold: bool,

    /// The threshold the flag was compared against, echoed for display.
    pub exemption_threshold: Decimal,
}

/// Calculator for the monthly Carnê-Leão assessment.
///
/// Holds the validated statutory parameters; every calculation is a pure
/// function of its arguments, so one engine can be shared freely across
/// callers.
#[derive(Debug, Clone)]
pub struct CarneLeao {
    config: CarneLeaoConfig,
}

impl Default for CarneLeao {
    /// Engine with the statutory 2024/2025 parameters.
    fn default() -> Self {
        Self {
            config: CarneLeaoConfig::default(),
        }
    }
}

impl CarneLeao {
    /// Creates an engine with a custom configuration, validating it first.
    ///
    /// # Errors
    ///
    /// Returns [`CarneLeaoConfigError`] when the configuration is
    /// malformed; see [`CarneLeaoConfig::validate`].
    pub fn new(config: CarneLeaoConfig) -> Result<Self, CarneLeaoConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CarneLeaoConfig {
        &self.config
    }

    /// Computes the full monthly assessment from gross revenue, INSS paid
    /// and other legal deductions.
    ///
    /// Deductions can never push the base below zero; a month with no
    /// revenue yields an all-zero result.
    pub fn calculate(
        &self,
        gross_revenue: Decimal,
        inss_paid: Decimal,
        other_deductions: Decimal,
    ) -> TaxCalculation {
        let exempt_amount = gross_revenue * self.config.exemption_fraction;
        let taxable_income = gross_revenue * self.config.taxable_fraction;

        let deductions_total = inss_paid + other_deductions;
        let tax_base = (taxable_income - deductions_total).max(Decimal::ZERO);

        let resolution = self.resolve(tax_base);

        // Alert flag keyed off the threshold constant, not the bracket
        // bound. The two agree today but are tracked separately.
        let is_above_threshold = tax_base > self.config.exemption_threshold;

        let effective_rate = if gross_revenue > Decimal::ZERO {
            (resolution.tax / gross_revenue * Decimal::ONE_HUNDRED).normalize()
        } else {
            Decimal::ZERO
        };

        TaxCalculation {
            exempt_amount,
            taxable_income,
            deductions_total,
            tax_base,
            tax_due: resolution.tax,
            effective_rate,
            bracket_rate: (resolution.rate * Decimal::ONE_HUNDRED).normalize(),
            fixed_deduction: resolution.fixed_deduction,
            is_above_threshold,
            exemption_threshold: self.config.exemption_threshold,
        }
    }

    /// Resolves the table row for a taxable base and computes its tax.
    ///
    /// The exempt row yields exactly zero rather than a `base × 0 − 0`
    /// residue.
    pub fn resolve(&self, tax_base: Decimal) -> BracketResolution {
        let bracket = self.resolve_bracket(tax_base);
        let tax = if bracket.rate.is_zero() {
            Decimal::ZERO
        } else {
            tax_base * bracket.rate - bracket.fixed_deduction
        };
        BracketResolution {
            rate: bracket.rate,
            fixed_deduction: bracket.fixed_deduction,
            tax,
        }
    }

    /// First row whose upper bound is not exceeded; boundary values stay
    /// in the lower row. The validated final row is open-ended, so every
    /// base resolves.
    fn resolve_bracket(&self, tax_base: Decimal) -> &IrpfBracket {
        let last = self.config.brackets.len() - 1;
        self.config.brackets[..last]
            .iter()
            .find(|bracket| tax_base <= bracket.upper_bound.unwrap_or(Decimal::MAX))
            .unwrap_or(&self.config.brackets[last])
    }
}
