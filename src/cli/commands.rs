use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sincedop")]
#[command(about = "Day counter for date-of-purchase eligibility windows")]
#[command(version)]
pub struct Cli {
    /// Defaults to the interactive calculator when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config/default")]
    pub config: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive calculator
    Tui,

    /// One-shot eligibility check
    Check {
        /// Date of purchase (YYYY-MM-DD)
        #[arg(long)]
        dop: String,

        /// Date to check against (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Override the eligibility window length in days
        #[arg(long)]
        window: Option<u32>,

        /// Output format: table or json
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Print the resolved configuration
    Init,
}
