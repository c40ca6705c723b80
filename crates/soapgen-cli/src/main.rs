//! soapgen CLI - PHP SOAP client class generator
//!
//! Commands:
//! - `soapgen generate` - Generate types, client and factory from service metadata
//! - `soapgen check` - Validate a soapgen.toml project file

use clap::{Parser, Subcommand};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod generate;
mod project;

#[derive(Parser)]
#[command(name = "soapgen")]
#[command(author, version, about = "Generate PHP SOAP client classes", long_about = None)]
struct Cli {
    /// Log level when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate PHP classes from a metadata document
    Generate {
        /// Path to the metadata JSON document
        #[arg(short, long)]
        metadata: String,

        /// Output directory for generated classes
        #[arg(short, long)]
        output: String,

        /// Path to soapgen.toml (default: ./soapgen.toml)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Validate a soapgen.toml project file
    Check {
        /// Path to soapgen.toml (default: ./soapgen.toml)
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn init_tracing(log_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("warn")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match cli.command {
        Commands::Generate {
            metadata,
            output,
            config,
        } => {
            generate::run(&metadata, &output, config)?;
        }
        Commands::Check { config } => {
            project::check(config)?;
        }
    }

    Ok(())
}
