use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the monthly IRPF progressive table.
///
/// `upper_bound` is inclusive: a base exactly on the bound belongs to this
/// row. The final row of a table carries `None` and catches every base
/// above the previous bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrpfBracket {
    pub upper_bound: Option<Decimal>,
    /// Marginal rate as a fraction (0.075 for 7.5%).
    pub rate: Decimal,
    /// "Parcela a deduzir": the fixed subtraction that keeps the piecewise
    /// tax function continuous across rows.
    pub fixed_deduction: Decimal,
}
