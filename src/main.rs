use anyhow::Result;
use clap::{Parser, Subcommand};

/// laptop-review - Laptop catalogue and review API
#[derive(Parser)]
#[command(name = "laptop-review")]
#[command(about = "REST backend for laptop reviews", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = laptop_review::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    laptop_review::observability::init_observability(
        "laptop-review",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => laptop_review::cli::serve(config, host, port).await,
        Commands::Migrate => laptop_review::migrate::migrate(&config).await,
        Commands::Reset => laptop_review::migrate::reset(&config).await,
    }
}
