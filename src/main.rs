use clap::{Parser, Subcommand};
use std::process;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Particle-size-distribution statistics from measured areas.
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Piecewise-linear knee fits for flux/pressure curves.
    Knee(cmd::knee::KneeArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .without_time()
        .init();

    let result = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args),
        Commands::Knee(args) => cmd::knee::run(args),
    };

    if let Err(e) = result {
        eprintln!("\n❌ {}", e);
        process::exit(1);
    }
}
