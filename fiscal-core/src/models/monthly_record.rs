use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::InssPlan;

/// One calendar month of fiscal facts for the driver.
///
/// The natural key is the `(month0, year)` pair; `id` is an opaque handle
/// kept for storage convenience. Months are 0-based (January = 0),
/// matching chrono's `month0` accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub id: String,
    pub month0: u32,
    pub year: i32,
    pub gross_revenue: Decimal,
    pub inss_paid: Decimal,
    pub other_deductions: Decimal,
    pub inss_plan: InssPlan,
    /// Declared contribution base for the standard plan. Left at zero on
    /// fresh records; the GPS calculator clamps it up to the minimum wage.
    pub inss_base: Decimal,
}

impl MonthlyRecord {
    /// A record with zero amounts and the simplified plan, as created on
    /// the first edit of a month. The placeholder id is replaced when the
    /// record is materialized in a store.
    pub fn empty(month0: u32, year: i32) -> Self {
        Self {
            id: format!("temp-{month0}-{year}"),
            month0,
            year,
            gross_revenue: Decimal::ZERO,
            inss_paid: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
            inss_plan: InssPlan::Simplified,
            inss_base: Decimal::ZERO,
        }
    }

    /// Merges a partial update into the record; `None` fields are untouched.
    pub fn apply(&mut self, update: &MonthlyRecordUpdate) {
        if let Some(gross_revenue) = update.gross_revenue {
            self.gross_revenue = gross_revenue;
        }
        if let Some(inss_paid) = update.inss_paid {
            self.inss_paid = inss_paid;
        }
        if let Some(other_deductions) = update.other_deductions {
            self.other_deductions = other_deductions;
        }
        if let Some(inss_plan) = update.inss_plan {
            self.inss_plan = inss_plan;
        }
        if let Some(inss_base) = update.inss_base {
            self.inss_base = inss_base;
        }
    }
}

/// Partial update applied to a [`MonthlyRecord`] in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecordUpdate {
    pub gross_revenue: Option<Decimal>,
    pub inss_paid: Option<Decimal>,
    pub other_deductions: Option<Decimal>,
    pub inss_plan: Option<InssPlan>,
    pub inss_base: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_record_has_zero_amounts_and_simplified_plan() {
        let record = MonthlyRecord::empty(3, 2024);

        assert_eq!(record.month0, 3);
        assert_eq!(record.year, 2024);
        assert_eq!(record.gross_revenue, dec!(0));
        assert_eq!(record.inss_paid, dec!(0));
        assert_eq!(record.other_deductions, dec!(0));
        assert_eq!(record.inss_plan, InssPlan::Simplified);
        assert_eq!(record.inss_base, dec!(0));
    }

    #[test]
    fn apply_updates_only_the_given_fields() {
        let mut record = MonthlyRecord::empty(0, 2024);
        record.inss_paid = dec!(155.32);

        record.apply(&MonthlyRecordUpdate {
            gross_revenue: Some(dec!(4800.00)),
            ..MonthlyRecordUpdate::default()
        });

        assert_eq!(record.gross_revenue, dec!(4800.00));
        assert_eq!(record.inss_paid, dec!(155.32));
        assert_eq!(record.inss_plan, InssPlan::Simplified);
    }

    #[test]
    fn apply_with_empty_update_is_a_no_op() {
        let mut record = MonthlyRecord::empty(5, 2025);
        let before = record.clone();

        record.apply(&MonthlyRecordUpdate::default());

        assert_eq!(record, before);
    }
}
