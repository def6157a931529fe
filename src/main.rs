use clap::Parser;
use pairup::{config, GameConfig, PairingGame};
use std::path::PathBuf;
use tracing::{debug, error};

/// Randomized dwarf/giant pairing over a roster of employees
#[derive(Parser)]
#[command(name = "pairup")]
#[command(about = "Assign every roster member a random giant, in parallel", long_about = None)]
struct Cli {
    /// Path to a JSON file holding an array of raw records
    #[arg(short, long)]
    input: PathBuf,

    /// Number of parallel workers (default: available CPU parallelism)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so stdout carries only the pair listing.
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let workers = cli.workers.unwrap_or_else(config::default_parallelism);
    debug!("using {} workers for {}", workers, cli.input.display());

    let raw_records = pairup::input::load_raw_records(&cli.input)?;
    let game = PairingGame::new(GameConfig::new(workers));
    let pairs = game.run(&raw_records).await?;

    for (dwarf, giant) in pairs {
        println!("{dwarf} -> {giant}");
    }
    Ok(())
}
