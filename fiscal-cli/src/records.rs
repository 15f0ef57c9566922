//! CSV import of monthly records.
//!
//! ## CSV format
//!
//! Headers are matched by name; column order does not matter.
//!
//! | Column             | Required | Type    | Notes                            |
//! |--------------------|----------|---------|----------------------------------|
//! | `month`            | yes      | integer | Calendar month, 1-12             |
//! | `year`             | yes      | integer | e.g. `2024`                      |
//! | `gross_revenue`    | yes      | decimal | e.g. `5000.00`                   |
//! | `inss_paid`        | no       | decimal | Empty cell means 0               |
//! | `other_deductions` | no       | decimal | Empty cell means 0               |
//! | `inss_plan`        | no       | string  | `11%` or `20%`; defaults to 11%  |
//! | `inss_base`        | no       | decimal | Standard-plan contribution base  |
//!
//! ### Example
//!
//! ```csv
//! month,year,gross_revenue,inss_paid,other_deductions
//! 1,2024,5000.00,155.32,
//! 2,2024,4200.00,155.32,80.00
//! ```

use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use fiscal_core::models::{InssPlan, MonthlyRecord};

/// Errors that can occur while loading the records CSV.
#[derive(Debug, Error)]
pub enum CsvLoadError {
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("row {row}: month {month} out of range (expected 1-12)")]
    InvalidMonth { row: usize, month: u32 },

    #[error("row {row}: unknown INSS plan '{plan}' (expected \"11%\" or \"20%\")")]
    InvalidPlan { row: usize, plan: String },
}

/// Serde-compatible row that mirrors the CSV layout exactly.
#[derive(Debug, Deserialize)]
struct CsvRow {
    month: u32,
    year: i32,
    gross_revenue: Decimal,
    inss_paid: Option<Decimal>,
    other_deductions: Option<Decimal>,
    inss_plan: Option<String>,
    inss_base: Option<Decimal>,
}

/// Reads monthly records from CSV data.
///
/// # Errors
///
/// Returns [`CsvLoadError`] on malformed CSV, a month outside 1-12, or an
/// unknown INSS plan label.
pub fn load_records<R: Read>(reader: R) -> Result<Vec<MonthlyRecord>, CsvLoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        let line = index + 2; // line 1 is the header

        if !(1..=12).contains(&row.month) {
            return Err(CsvLoadError::InvalidMonth {
                row: line,
                month: row.month,
            });
        }
        let plan = match row.inss_plan.as_deref() {
            None | Some("") => InssPlan::Simplified,
            Some(label) => InssPlan::parse(label).ok_or_else(|| CsvLoadError::InvalidPlan {
                row: line,
                plan: label.to_string(),
            })?,
        };

        let mut record = MonthlyRecord::empty(row.month - 1, row.year);
        record.gross_revenue = row.gross_revenue;
        record.inss_paid = row.inss_paid.unwrap_or(Decimal::ZERO);
        record.other_deductions = row.other_deductions.unwrap_or(Decimal::ZERO);
        record.inss_plan = plan;
        if let Some(base) = row.inss_base {
            record.inss_base = base;
        }
        records.push(record);
    }

    tracing::debug!(count = records.len(), "loaded monthly records from CSV");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn loads_a_minimal_csv() {
        let csv = "month,year,gross_revenue\n1,2024,5000.00\n";

        let records = load_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].month0, 0);
        assert_eq!(records[0].year, 2024);
        assert_eq!(records[0].gross_revenue, dec!(5000.00));
        assert_eq!(records[0].inss_paid, dec!(0));
        assert_eq!(records[0].inss_plan, InssPlan::Simplified);
    }

    #[test]
    fn loads_optional_columns() {
        let csv = "month,year,gross_revenue,inss_paid,other_deductions,inss_plan,inss_base\n\
                   12,2024,7200.00,155.32,80.00,20%,3000.00\n";

        let records = load_records(csv.as_bytes()).unwrap();

        assert_eq!(records[0].month0, 11);
        assert_eq!(records[0].inss_paid, dec!(155.32));
        assert_eq!(records[0].other_deductions, dec!(80.00));
        assert_eq!(records[0].inss_plan, InssPlan::Standard);
        assert_eq!(records[0].inss_base, dec!(3000.00));
    }

    #[test]
    fn empty_optional_cells_default_to_zero() {
        let csv = "month,year,gross_revenue,inss_paid,other_deductions\n3,2024,1000.00,,\n";

        let records = load_records(csv.as_bytes()).unwrap();

        assert_eq!(records[0].inss_paid, dec!(0));
        assert_eq!(records[0].other_deductions, dec!(0));
    }

    #[test]
    fn rejects_an_out_of_range_month() {
        let csv = "month,year,gross_revenue\n13,2024,1000.00\n";

        let result = load_records(csv.as_bytes());

        assert!(matches!(
            result,
            Err(CsvLoadError::InvalidMonth { row: 2, month: 13 })
        ));
    }

    #[test]
    fn rejects_an_unknown_plan_label() {
        let csv = "month,year,gross_revenue,inss_plan\n1,2024,1000.00,15%\n";

        let result = load_records(csv.as_bytes());

        assert!(matches!(
            result,
            Err(CsvLoadError::InvalidPlan { row: 2, .. })
        ));
    }

    #[test]
    fn empty_file_yields_no_records() {
        let csv = "month,year,gross_revenue\n";

        let records = load_records(csv.as_bytes()).unwrap();

        assert!(records.is_empty());
    }
}
