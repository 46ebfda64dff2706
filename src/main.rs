use anyhow::Result;
use clap::{Parser, Subcommand};

/// portfolio - personal site and its contact relay
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Portfolio site and contact-form mail relay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the contact relay (POST /api/contact)
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Start the portfolio site
    Web {
        /// Site host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Site port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = portfolio::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let service_name = match cli.command {
        Commands::Serve { .. } => "portfolio-relay",
        Commands::Web { .. } => "portfolio-web",
    };
    portfolio::observability::init_observability(service_name, &config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => portfolio::cli::serve(config, host, port).await,
        Commands::Web { host, port } => portfolio::cli::web(config, host, port).await,
    }
}
