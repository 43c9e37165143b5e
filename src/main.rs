use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopkeep::commands::{CategoryCommand, ConfigCommand, CustomerCommand, ProductCommand};
use shopkeep::config::Config;

#[derive(Parser)]
#[command(name = "shopkeep")]
#[command(version)]
#[command(about = "Manage customers, categories and products over a REST API", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage customers
    Customer(CustomerCommand),

    /// Manage product categories
    Category(CategoryCommand),

    /// Manage products
    Product(ProductCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr so table and JSON output stay clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;

    match cli.command {
        Some(Commands::Customer(cmd)) => {
            cmd.run(&config).await?;
        }
        Some(Commands::Category(cmd)) => {
            cmd.run(&config).await?;
        }
        Some(Commands::Product(cmd)) => {
            cmd.run(&config).await?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
