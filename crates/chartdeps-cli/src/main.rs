//! Chartdeps CLI - list Helm chart dependencies and how they resolve

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;
mod error;
mod exit_codes;

#[derive(Parser)]
#[command(name = "chartdeps")]
#[command(version)]
#[command(about = "List Helm chart dependencies and how they resolve", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract dependencies from one or more charts
    Extract {
        /// Chart.yaml files or chart directories
        #[arg(required = true)]
        charts: Vec<PathBuf>,

        /// YAML file mapping alias names to repository URLs
        #[arg(long, env = "CHARTDEPS_ALIASES")]
        aliases: Option<PathBuf>,

        /// Alias as NAME=URL (overrides the aliases file)
        #[arg(long = "alias", value_parser = commands::extract::parse_alias)]
        alias: Vec<(String, String)>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,

        /// Fail when a chart yields no dependencies
        #[arg(long)]
        strict: bool,
    },
}

/// How extraction results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn main() {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = Cli::parse();
    init_tracing(cli.debug);

    let result = match cli.command {
        Commands::Extract {
            charts,
            aliases,
            alias,
            output,
            strict,
        } => commands::extract::run(&charts, aliases.as_deref(), &alias, output, strict),
    };

    if let Err(err) = result {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}
