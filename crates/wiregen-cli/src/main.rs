//! wiregen CLI - Codec generator front end
//!
//! Commands:
//! - `wiregen generate` - Generate Rust codecs from a schema file
//! - `wiregen check` - Validate a schema file and summarize its definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod check;
mod config;
mod generate;

#[derive(Parser)]
#[command(name = "wiregen")]
#[command(author, version, about = "Schema-driven binary codec generator", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Rust codecs from a schema
    Generate {
        /// Schema file (.json or .toml)
        #[arg(short, long)]
        schema: PathBuf,

        /// Output path for the generated Rust source
        #[arg(short, long)]
        output: PathBuf,

        /// Path to wiregen.toml (default: ./wiregen.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate a schema and print a per-definition summary
    Check {
        /// Schema file (.json or .toml)
        #[arg(short, long)]
        schema: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            schema,
            output,
            config,
        } => {
            generate::run(&schema, &output, config.as_deref())?;
        }
        Commands::Check { schema } => {
            check::run(&schema)?;
        }
    }

    Ok(())
}
