//! Context block handed to the assistant alongside each question.

use fiscal_core::calculations::TaxCalculation;
use fiscal_core::format::{currency_brl, month_name};
use fiscal_core::models::MonthlyRecord;

/// Summarizes the month under edit for the model: period, revenue, INSS,
/// tax base and tax due.
pub fn context_summary(
    record: &MonthlyRecord,
    calculation: &TaxCalculation,
) -> String {
    let month = month_name(record.month0).unwrap_or("?");
    format!(
        "Mês: {month}.\nReceita: {}.\nINSS: {}.\nBase IR: {}.\nImposto: {}.",
        currency_brl(record.gross_revenue),
        currency_brl(record.inss_paid),
        currency_brl(calculation.tax_base),
        currency_brl(calculation.tax_due),
    )
}
