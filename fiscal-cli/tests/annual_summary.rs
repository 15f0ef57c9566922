//! Integration tests for the CSV import → annual summary path.

use fiscal_cli::records::load_records;
use fiscal_cli::report::annual_report;
use fiscal_core::calculations::{CarneLeao, annual_summary};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const SAMPLE_CSV: &str = "\
month,year,gross_revenue,inss_paid,other_deductions
1,2024,5000.00,155.32,0
2,2024,3000.00,155.32,
3,2024,7200.00,,100.00
";

#[test]
fn csv_records_fold_into_annual_totals() {
    let records = load_records(SAMPLE_CSV.as_bytes()).expect("sample CSV should load");
    assert_eq!(records.len(), 3);

    let summary = annual_summary(&CarneLeao::default(), &records);

    assert_eq!(summary.gross_total, dec!(15200.00));
    assert_eq!(summary.exempt_total, dec!(6080.00));
    assert_eq!(summary.taxable_total, dec!(9120.00));

    // January: base 2844.68 → 2844.68 × 0.15 − 381.44 = 45.262
    // February: base 1644.68 → exempt, 0
    // March: base 4220.00 → 4220.00 × 0.225 − 662.77 = 286.73
    assert_eq!(summary.tax_due_total, dec!(331.992));
}

#[test]
fn annual_report_renders_the_totals() {
    let records = load_records(SAMPLE_CSV.as_bytes()).expect("sample CSV should load");
    let summary = annual_summary(&CarneLeao::default(), &records);

    let report = annual_report(&summary);

    assert!(report.contains("RESUMO ANUAL"));
    assert!(report.contains("Receita Bruta Total:      R$ 15.200,00"));
    assert!(report.contains("Imposto Devido Total:     R$ 331,99"));
}

#[test]
fn empty_csv_yields_zero_totals() {
    let records = load_records("month,year,gross_revenue\n".as_bytes()).expect("header-only CSV");

    let summary = annual_summary(&CarneLeao::default(), &records);

    assert_eq!(summary.gross_total, dec!(0));
    assert_eq!(summary.tax_due_total, dec!(0));
}
