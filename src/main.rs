//! Triagem: Naive Bayes triage of legal petition PDFs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use triagem::config::{Config, LogFormat};

mod commands;

#[derive(Parser)]
#[command(name = "triagem")]
#[command(about = "Naive Bayes triage of legal petition PDFs into specialization categories")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "triagem.toml")]
    config: PathBuf,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Listen address override (e.g., "0.0.0.0:8080")
        #[arg(short, long)]
        listen: Option<String>,
    },

    /// Train the classifier from the labeled training directory
    Train,

    /// Classify a petition PDF
    Classify {
        /// PDF to classify (defaults to the configured intake PDF)
        pdf: Option<PathBuf>,

        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Copy a misclassified petition into the training corpus under a
    /// corrected category code
    Relabel {
        /// Source PDF
        pdf: PathBuf,

        /// Corrected category code (PAS, PDA, PPE, PSE, PTR, PUMA, PTA)
        specialty: String,
    },

    /// Write a default configuration file
    Init {
        /// Output directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Serve { listen } => commands::serve::run(config, listen).await,
        Commands::Train => commands::train::run(config),
        Commands::Classify { pdf, format } => commands::classify::run(config, pdf, &format),
        Commands::Relabel { pdf, specialty } => commands::relabel::run(config, pdf, &specialty),
        Commands::Init { path } => commands::init::run(path),
    }
}

fn init_logging(config: &Config, verbose: u8) {
    let level = match verbose {
        0 => config.logging.level.as_level(),
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let builder = tracing_subscriber::fmt().with_max_level(level);
    match config.logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
