use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use fiscal_assistant::{GeminiAssistant, context_summary};
use fiscal_cli::{logging, records, report};
use fiscal_core::calculations::{
    CarneLeao, Gps, annual_summary, darf_due_date, darf_due_date_br, gps_due_date_br,
};
use fiscal_core::format::{currency_brl, parse_amount};
use fiscal_core::models::{InssPlan, MonthlyRecord};

/// Carnê-Leão and INSS calculator for self-employed drivers.
#[derive(Parser, Debug)]
#[command(name = "driver-fiscal")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Computes one month's assessment and prints the report.
    Month {
        /// Calendar month (1-12)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,

        /// Calendar year
        #[arg(short, long)]
        year: i32,

        /// Gross revenue for the month (accepts "1.234,56" or "1234.56")
        #[arg(short, long, value_parser = parse_amount_arg)]
        revenue: Decimal,

        /// INSS paid in the month
        #[arg(short, long, value_parser = parse_amount_arg, default_value = "0")]
        inss: Decimal,

        /// Other legal deductions (livro caixa, dependents, alimony)
        #[arg(short, long, value_parser = parse_amount_arg, default_value = "0")]
        deductions: Decimal,
    },

    /// Computes the GPS contribution for a base and plan.
    Gps {
        /// Contribution base (ignored by the 11% plan)
        #[arg(short, long, value_parser = parse_amount_arg)]
        base: Decimal,

        /// INSS plan: "11%" (simplificado) or "20%" (normal)
        #[arg(short, long, value_parser = parse_plan_arg)]
        plan: InssPlan,

        /// Month the contribution refers to (1-12), for the due date
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Year the contribution refers to, for the due date
        #[arg(short, long, requires = "month")]
        year: Option<i32>,
    },

    /// Prints the DARF and GPS due dates for a month.
    DueDates {
        /// Calendar month (1-12)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,

        /// Calendar year
        #[arg(short, long)]
        year: i32,
    },

    /// Loads monthly records from a CSV file and prints the annual totals.
    Year {
        /// Path to the records CSV
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Asks the fiscal assistant a question (requires GEMINI_API_KEY).
    Chat {
        /// The question
        message: String,

        /// Attach a month's numbers as context: calendar month (1-12)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Calendar year for the context month
        #[arg(short, long, requires = "month")]
        year: Option<i32>,

        /// Gross revenue for the context month
        #[arg(short, long, value_parser = parse_amount_arg, default_value = "0")]
        revenue: Decimal,

        /// INSS paid in the context month
        #[arg(short, long, value_parser = parse_amount_arg, default_value = "0")]
        inss: Decimal,
    },
}

fn parse_amount_arg(s: &str) -> Result<Decimal, String> {
    parse_amount(s).map_err(|e| e.to_string())
}

fn parse_plan_arg(s: &str) -> Result<InssPlan, String> {
    InssPlan::parse(s).ok_or_else(|| format!("unknown INSS plan '{s}' (expected \"11%\" or \"20%\")"))
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Month {
            month,
            year,
            revenue,
            inss,
            deductions,
        } => run_month(month - 1, year, revenue, inss, deductions),
        Command::Gps {
            base,
            plan,
            month,
            year,
        } => run_gps(base, plan, month.map(|m| m - 1), year),
        Command::DueDates { month, year } => run_due_dates(month - 1, year),
        Command::Year { file } => run_year(&file),
        Command::Chat {
            message,
            month,
            year,
            revenue,
            inss,
        } => run_chat(&message, month.map(|m| m - 1), year, revenue, inss).await,
    }
}

fn run_month(
    month0: u32,
    year: i32,
    revenue: Decimal,
    inss: Decimal,
    deductions: Decimal,
) -> Result<()> {
    let mut record = MonthlyRecord::empty(month0, year);
    record.gross_revenue = revenue;
    record.inss_paid = inss;
    record.other_deductions = deductions;

    let calc = CarneLeao::default().calculate(revenue, inss, deductions);
    let due = darf_due_date(month0, year).context("failed to compute the DARF due date")?;
    let generated_on = Local::now().date_naive();

    println!("{}", report::monthly_report(&record, &calc, due, generated_on));
    Ok(())
}

fn run_gps(
    base: Decimal,
    plan: InssPlan,
    month0: Option<u32>,
    year: Option<i32>,
) -> Result<()> {
    let contribution = Gps::default().contribution(base, plan);
    println!(
        "Contribuição GPS ({}): {}",
        plan.as_str(),
        currency_brl(contribution)
    );

    if let (Some(month0), Some(year)) = (month0, year) {
        let due = gps_due_date_br(month0, year).context("failed to compute the GPS due date")?;
        println!("Vencimento da GPS: {due}");
    }
    Ok(())
}

fn run_due_dates(
    month0: u32,
    year: i32,
) -> Result<()> {
    let darf = darf_due_date_br(month0, year).context("failed to compute the DARF due date")?;
    let gps = gps_due_date_br(month0, year).context("failed to compute the GPS due date")?;

    println!("Vencimento do DARF: {darf}");
    println!("Vencimento da GPS:  {gps}");
    Ok(())
}

fn run_year(file: &PathBuf) -> Result<()> {
    let reader = File::open(file)
        .with_context(|| format!("failed to open records file: {}", file.display()))?;
    let records = records::load_records(reader)
        .with_context(|| format!("failed to load records from: {}", file.display()))?;

    let summary = annual_summary(&CarneLeao::default(), &records);
    println!("{}", report::annual_report(&summary));
    Ok(())
}

async fn run_chat(
    message: &str,
    month0: Option<u32>,
    year: Option<i32>,
    revenue: Decimal,
    inss: Decimal,
) -> Result<()> {
    let api_key = std::env::var("GEMINI_API_KEY")
        .context("GEMINI_API_KEY is not set; the assistant needs an API key")?;

    let context = match month0 {
        Some(month0) => {
            let year = year.unwrap_or_else(|| Local::now().year());
            let mut record = MonthlyRecord::empty(month0, year);
            record.gross_revenue = revenue;
            record.inss_paid = inss;
            let calc = CarneLeao::default().calculate(revenue, inss, Decimal::ZERO);
            context_summary(&record, &calc)
        }
        None => "Sem dados do mês.".to_string(),
    };

    let assistant = GeminiAssistant::new(api_key);
    let reply = assistant.send_message(message, &context).await;
    println!("{reply}");
    Ok(())
}
