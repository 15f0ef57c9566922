//! Year-to-date totals across monthly records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::CarneLeao;
use crate::models::MonthlyRecord;

/// Totals across a set of monthly records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualSummary {
    pub gross_total: Decimal,
    pub exempt_total: Decimal,
    pub taxable_total: Decimal,
    pub tax_due_total: Decimal,
}

/// Folds per-record assessments into yearly totals.
///
/// Each record is recomputed independently through the engine; order does
/// not matter and duplicate (month, year) entries are summed as given.
/// An empty slice yields all-zero totals.
pub fn annual_summary(
    engine: &CarneLeao,
    records: &[MonthlyRecord],
) -> AnnualSummary {
    records.iter().fold(AnnualSummary::default(), |acc, record| {
        let calc = engine.calculate(
            record.gross_revenue,
            record.inss_paid,
            record.other_deductions,
        );
        AnnualSummary {
            gross_total: acc.gross_total + record.gross_revenue,
            exempt_total: acc.exempt_total + calc.exempt_amount,
            taxable_total: acc.taxable_total + calc.taxable_income,
            tax_due_total: acc.tax_due_total + calc.tax_due,
        }
    })
}
