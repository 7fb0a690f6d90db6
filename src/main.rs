//! CLI entry point for sitepress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sitepress")]
#[command(version = "0.1.0")]
#[command(about = "Content indexing and listing views for a personal blog site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    #[command(alias = "ls")]
    List {
        /// Type of content to list (course, post, page)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show the resolved site configuration
    Info,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "sitepress=debug,info"
    } else {
        "sitepress=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::List { r#type } => {
            let site = sitepress::Site::new(&base_dir)?;
            sitepress::commands::list::run(&site, &r#type)?;
        }

        Commands::Info => {
            let site = sitepress::Site::new(&base_dir)?;
            sitepress::commands::info::run(&site)?;
        }

        Commands::Version => {
            println!("sitepress version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
