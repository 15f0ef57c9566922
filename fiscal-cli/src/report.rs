//! Plain-text assessment reports.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use fiscal_core::calculations::{AnnualSummary, TaxCalculation};
use fiscal_core::format::{currency_brl, date_br, month_name};
use fiscal_core::models::MonthlyRecord;

const RULE: &str = "------------------------------------------------";

/// Renders the monthly assessment report handed to the driver.
///
/// `generated_on` is the emission date shown in the header; `darf_due`
/// the statutory payment deadline for the month.
pub fn monthly_report(
    record: &MonthlyRecord,
    calc: &TaxCalculation,
    darf_due: NaiveDate,
    generated_on: NaiveDate,
) -> String {
    let period = month_name(record.month0).unwrap_or("?").to_uppercase();
    let gross_tax = calc.tax_base * calc.bracket_rate / Decimal::ONE_HUNDRED;

    format!(
        "MOTORISTA TAX - RELATÓRIO MENSAL DE APURAÇÃO\n\
         ================================================\n\
         Período: {period}/{year}\n\
         Data de Geração: {generated}\n\
         \n\
         1. RECEITAS DA ATIVIDADE\n\
         {RULE}\n\
         Receita Bruta Total:      {gross}\n\
         Parcela Isenta (40%):     {exempt}\n\
         Parcela Tributável (60%): {taxable}\n\
         \n\
         2. DEDUÇÕES LEGAIS\n\
         {RULE}\n\
         Contribuição INSS (GPS):  {inss}\n\
         Outras Deduções:          {other}\n\
         Total de Deduções:        {deductions}\n\
         \n\
         3. CÁLCULO DO IMPOSTO (CARNÊ-LEÃO)\n\
         {RULE}\n\
         Base de Cálculo:          {base}\n\
         (Receita Tributável - Deduções)\n\
         \n\
         Alíquota Aplicada:        {rate}%\n\
         Imposto Bruto:            {gross_tax}\n\
         (-) Parcela a Deduzir:    {fixed}\n\
         \n\
         {RULE}\n\
         RESULTADO FINAL\n\
         {RULE}\n\
         IMPOSTO A PAGAR (DARF):   {due}\n\
         VENCIMENTO DO DARF:       {deadline}\n\
         {RULE}\n\
         \n\
         * Este relatório é um simulativo para auxílio mensal.\n\
         * O código da receita para DARF Carnê-Leão é 0190.",
        year = record.year,
        generated = date_br(generated_on),
        gross = currency_brl(record.gross_revenue),
        exempt = currency_brl(calc.exempt_amount),
        taxable = currency_brl(calc.taxable_income),
        inss = currency_brl(record.inss_paid),
        other = currency_brl(record.other_deductions),
        deductions = currency_brl(calc.deductions_total),
        base = currency_brl(calc.tax_base),
        rate = calc.bracket_rate,
        gross_tax = currency_brl(gross_tax),
        fixed = currency_brl(calc.fixed_deduction),
        due = currency_brl(calc.tax_due),
        deadline = date_br(darf_due),
    )
}

/// Renders the annual totals block printed by the `year` command.
pub fn annual_report(summary: &AnnualSummary) -> String {
    format!(
        "RESUMO ANUAL\n\
         {RULE}\n\
         Receita Bruta Total:      {gross}\n\
         Parcela Isenta Total:     {exempt}\n\
         Parcela Tributável Total: {taxable}\n\
         Imposto Devido Total:     {due}",
        gross = currency_brl(summary.gross_total),
        exempt = currency_brl(summary.exempt_total),
        taxable = currency_brl(summary.taxable_total),
        due = currency_brl(summary.tax_due_total),
    )
}
