mod demo;
mod input;
mod output;
mod place;

use clap::{Parser, Subcommand};
use color_eyre::{config::HookBuilder, eyre::Result};
use tracing_subscriber::{FmtSubscriber, filter::LevelFilter, fmt::format::FmtSpan};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "flow")]
#[command(about = "Lay out sizes in wrapping rows", long_about = None)]
#[command(version, author)]
struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the offset of every child and the overall size
    Place(place::PlaceArgs),
    /// Print only the overall size
    Measure(place::PlaceArgs),
    /// Lay out the seven weekdays as capsule chips
    Demo(demo::DemoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    HookBuilder::default()
        .display_env_section(false)
        .panic_section("It looks like the flow CLI encountered a bug")
        .install()?;

    let level = match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    output::set_global_output_format(if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    });

    match cli.command {
        Commands::Place(args) => place::run(args),
        Commands::Measure(args) => place::run_measure(args),
        Commands::Demo(args) => demo::run(&args),
    }
}
