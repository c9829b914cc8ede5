#![forbid(unsafe_code)]

mod cmd;
mod output;

use std::env;

use clap::{Parser, Subcommand};
use output::OutputMode;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "rota: vacancy and substitute-assignment summaries",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Group vacancy details into assignment spans",
        long_about = "Read a JSON list of vacancy details and print date-contiguous, \
                      assignment-consistent spans, one block per span.",
        after_help = "EXAMPLES:\n    # Human-readable spans\n    rota summary details.json\n\n    # Machine-readable output\n    rota summary details.json --json\n\n    # Don't split spans on pay-code differences\n    rota summary details.json --hide-pay-codes"
    )]
    Summary(cmd::summary::SummaryArgs),
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    if cli.verbose {
        info!("Verbose mode enabled");
    }
    let output = cli.output_mode();

    match cli.command {
        Commands::Summary(ref args) => cmd::summary::run_summary(args, output),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ROTA_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "rota=debug,info"
        } else {
            "rota=info,warn"
        })
    });

    let format = env::var("ROTA_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}
