mod cli;
mod config;
mod eligibility;
mod error;
mod time;
mod tui;
mod utils;

use clap::Parser;
use colored::Colorize;
use tracing::error;

use cli::{Cli, Commands};
use config::Config;
use eligibility::{EligibilityChecker, EligibilityWindow};
use time::{Clock, SystemClock};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("sincedop=info")
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => tui::run_tui(config).await,

        Commands::Check {
            dop,
            date,
            window,
            format,
        } => check(&config, &dop, date.as_deref(), window, &format),

        Commands::Init => initialize(&config),
    };

    if let Err(e) = result {
        error!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn check(
    config: &Config,
    dop: &str,
    date: Option<&str>,
    window: Option<u32>,
    format: &str,
) -> error::Result<()> {
    let purchase = utils::parse_date(dop)?;
    let check_date = match date {
        Some(raw) => utils::parse_date(raw)?,
        None => SystemClock.today(),
    };

    let window_days = window.unwrap_or(config.eligibility.window_days);
    let checker = EligibilityChecker::new(EligibilityWindow::new(window_days));
    let report = checker.check(purchase, check_date);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "=== SinceDOP ===".cyan().bold());
    println!("Date of Purchase:  {}", utils::format_date(report.purchase_date));
    println!("Date to Check:     {}", utils::format_date(report.check_date));
    println!(
        "Days since DOP:    {}",
        utils::colorize_days(report.days, report.status)
    );
    println!(
        "Eligible:          {}",
        if report.status.is_eligible() {
            "yes".green()
        } else {
            "no".red()
        }
    );
    println!("Status:            {}", checker.reason(&report));

    Ok(())
}

fn initialize(config: &Config) -> error::Result<()> {
    println!("{}", "SinceDOP configuration".green());
    println!("  Window:     {} days", config.eligibility.window_days);
    println!("  Theme:      {}", config.ui.theme);
    println!("  Tick rate:  {} ms", config.ui.tick_rate_ms);

    println!("\n{}", "Try:".cyan());
    println!(
        "  {}  launch the interactive calculator",
        "sincedop tui".yellow()
    );
    println!(
        "  {}  one-shot check",
        "sincedop check --dop 2024-01-01".yellow()
    );
    Ok(())
}
