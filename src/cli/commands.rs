use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snowflake", about = "Simply Wall St snowflake scores for a listing")]
pub struct Cli {
    /// Read the response from a saved JSON file instead of the API
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Company, symbols, colour and named scores
    Show {
        /// Exchange code (NYSE, NASDAQ, ASX, ...)
        exchange: String,
        /// Ticker symbol on that exchange
        ticker: String,
    },
    /// Score vector as JSON (value, future, past, health, income)
    Scores { exchange: String, ticker: String },
    /// Raw API response
    Raw { exchange: String, ticker: String },
}

impl Commands {
    pub fn listing(&self) -> (&str, &str) {
        match self {
            Commands::Show { exchange, ticker }
            | Commands::Scores { exchange, ticker }
            | Commands::Raw { exchange, ticker } => (exchange, ticker),
        }
    }
}
