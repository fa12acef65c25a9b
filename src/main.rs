use clap::Parser;
use snowflake::cli::commands::{Cli, Commands};
use snowflake::domain::ports::snowflake_source::SnowflakeSource;
use snowflake::infrastructure::sources::file::FileSource;
use snowflake::infrastructure::sources::simplywallst::SimplyWallStSource;
use snowflake::{api_base_from_env, StockClient};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source: Arc<dyn SnowflakeSource> = match &cli.file {
        Some(path) => Arc::new(FileSource::new(path)),
        None => Arc::new(SimplyWallStSource::new(api_base_from_env())),
    };

    if let Err(e) = run_command(source, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(
    source: Arc<dyn SnowflakeSource>,
    cmd: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    let (exchange, ticker) = cmd.listing();
    let stock = StockClient::with_source(source, exchange, ticker).await?;

    match cmd {
        Commands::Show { .. } => {
            println!("{} ({})", stock.company_name()?, stock.unique_symbol()?);
            println!(
                "Listed on {} as {}",
                stock.exchange_symbol()?,
                stock.ticker_symbol()?
            );
            println!("Snowflake colour: {:.2}", stock.snowflake_color()?);
            for (dimension, score) in stock.snowflake_scores()?.named() {
                println!("  {:<7} {score}", dimension.to_string());
            }
        }
        Commands::Scores { .. } => {
            println!("{}", serde_json::to_string(stock.snowflake_scores()?)?);
        }
        Commands::Raw { .. } => {
            println!("{}", serde_json::to_string_pretty(stock.record().document())?);
        }
    }
    Ok(())
}
