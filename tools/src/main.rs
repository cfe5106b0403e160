//! portfolio-runner: headless driver for the SmartCredit portfolio core.
//!
//! Usage:
//!   portfolio-runner --seed 12345 --borrowers 100 --loans 200
//!   portfolio-runner --seed 12345 --data-dir ./data
//!   portfolio-runner --seed 12345 --ipc-mode

use anyhow::Result;
use smartcredit_core::{
    config::GeneratorConfig,
    metrics::{
        calculate_affordability, calculate_risk_band, format_currency, validate_loan_parameters,
        LoanRequest, DEFAULT_TERM_MONTHS,
    },
    portfolio::{sample_npl_trend, PortfolioSummary},
    session::PortfolioSession,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetSummary,
    Refresh,
    ValidateLoan {
        loan_amount: f64,
        income: f64,
        #[serde(default)]
        existing_debt: f64,
        #[serde(default = "default_term")]
        term_months: u32,
    },
    Affordability {
        monthly_income: f64,
        monthly_expenses: f64,
        proposed_payment: f64,
    },
    RiskBand {
        score: f64,
    },
    Quit,
}

fn default_term() -> u32 {
    DEFAULT_TERM_MONTHS
}

#[derive(serde::Serialize)]
struct UiState {
    generation: u64,
    as_of: chrono::DateTime<chrono::Utc>,
    borrower_count: usize,
    total_outstanding_display: String,
    average_loan_display: String,
    summary: PortfolioSummary,
}

fn main() -> Result<()> {
    env_logger::init();
    smartcredit_core::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str());

    let mut config = match data_dir {
        Some(dir) => GeneratorConfig::load(dir)?,
        None => GeneratorConfig::default(),
    };
    config.borrower_count = parse_arg(&args, "--borrowers", config.borrower_count);
    config.loan_count = parse_arg(&args, "--loans", config.loan_count);

    if !ipc_mode {
        println!("SmartCredit — portfolio-runner");
        println!("  seed:       {seed}");
        println!("  borrowers:  {}", config.borrower_count);
        println!("  loans:      {}", config.loan_count);
        println!("  data_dir:   {}", data_dir.unwrap_or("(built-in defaults)"));
        println!();
    }

    let mut session = PortfolioSession::build(seed, config, chrono::Utc::now())?;

    if ipc_mode {
        run_ipc_loop(&mut session)?;
    } else {
        print_summary(&session);
    }

    Ok(())
}

fn run_ipc_loop(session: &mut PortfolioSession) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Unparseable IPC command: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        let response = match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetSummary => serde_json::to_value(build_ui_state(session))?,
            IpcCommand::Refresh => {
                session.refresh()?;
                serde_json::to_value(build_ui_state(session))?
            }
            IpcCommand::ValidateLoan {
                loan_amount,
                income,
                existing_debt,
                term_months,
            } => {
                let request = LoanRequest::new(loan_amount, income)
                    .with_existing_debt(existing_debt)
                    .with_term(term_months);
                match validate_loan_parameters(&request) {
                    Ok(decision) => serde_json::to_value(decision)?,
                    Err(e) => serde_json::json!({ "error": e.to_string() }),
                }
            }
            IpcCommand::Affordability {
                monthly_income,
                monthly_expenses,
                proposed_payment,
            } => {
                let result =
                    calculate_affordability(monthly_income, monthly_expenses, proposed_payment);
                serde_json::json!({
                    "disposable_income": result.disposable_income,
                    "affordability_ratio": result.affordability_ratio,
                    "status": result.status,
                    "color": result.status.color(),
                })
            }
            IpcCommand::RiskBand { score } => {
                let band = calculate_risk_band(score);
                serde_json::json!({ "risk_band": band, "color": band.color() })
            }
        };
        writeln!(stdout, "{}", response)?;
        stdout.flush()?;
    }
    Ok(())
}

fn build_ui_state(session: &PortfolioSession) -> UiState {
    let summary = session.summary();
    let currency = &session.config().currency;
    UiState {
        generation: session.clock.generation,
        as_of: session.clock.as_of,
        borrower_count: session.borrowers().len(),
        total_outstanding_display: format_currency(summary.total_outstanding, currency),
        average_loan_display: format_currency(summary.average_loan_size, currency),
        summary,
    }
}

fn print_summary(session: &PortfolioSession) {
    let summary = session.summary();
    let currency = &session.config().currency;

    println!("=== PORTFOLIO SUMMARY ===");
    println!("  borrowers:         {}", session.borrowers().len());
    println!("  loans:             {}", summary.total_loans);
    println!("  total outstanding: {}", format_currency(summary.total_outstanding, currency));
    println!("  average loan:      {}", format_currency(summary.average_loan_size, currency));
    println!("  npl loans:         {}", summary.npl_count);
    println!("  npl ratio:         {:.2}%", summary.npl_ratio);

    println!();
    println!("=== RISK DISTRIBUTION ===");
    for (band, count) in &summary.risk_distribution {
        println!("  {:<10} {count:>5}  ({})", band, band.color());
    }

    println!();
    println!("=== PRODUCT MIX ===");
    for (product, count) in &summary.product_distribution {
        println!("  {:<16} {count:>5}", product);
    }

    println!();
    println!("=== NPL TREND (2023) ===");
    for point in sample_npl_trend() {
        println!(
            "  {} | NPL: {:.1}% | Portfolio: {} {:.1}B",
            point.month, point.npl_ratio, currency, point.portfolio_value
        );
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
