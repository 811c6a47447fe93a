mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kanban_router::config::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(name = "kanban-routes")]
#[command(version, about = "Inspect the kanban client route table", long_about = None)]
struct Cli {
    /// Route table file (built-in routes when the file does not exist)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the deployment base path (also read from BASE_URL)
    #[arg(long, global = true)]
    base: Option<String>,

    /// Use hash history instead of the configured mode
    #[arg(long, global = true)]
    hash: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every route in declaration order
    List,

    /// Resolve a path or address-bar location to a route
    Resolve {
        /// Path such as /projects/42, or a location such as /#/projects/42
        location: String,
    },

    /// Build the path and href of a named route
    Url {
        /// Route name, e.g. "project details"
        name: String,

        /// Parameter as key=value (repeatable)
        #[arg(short, long = "param", value_parser = commands::url::parse_param)]
        params: Vec<(String, String)>,
    },

    /// Validate the route table file
    Check,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = commands::TableOptions {
        config: cli.config,
        base: cli.base,
        hash: cli.hash,
    };

    match cli.command {
        Commands::List => commands::list::execute(&options)?,
        Commands::Resolve { location } => commands::resolve::execute(&options, &location)?,
        Commands::Url { name, params } => commands::url::execute(&options, &name, params)?,
        Commands::Check => commands::check::execute(&options)?,
    }

    Ok(())
}
