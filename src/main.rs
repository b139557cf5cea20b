use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use showdown::equity::{EquityCalculator, EvalCache, Spot, SpotConfig};

/// Command line front end: read a JSON spot config, run the exhaustive
/// enumeration, print per-seat win and tie percentages.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Some(args) => args,
        None => {
            eprintln!("usage: showdown <config.json> [--cache <path>]");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

struct Args {
    config: PathBuf,
    cache: Option<PathBuf>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Option<Args> {
        let config = PathBuf::from(args.next()?);
        let cache = match args.next().as_deref() {
            None => None,
            Some("--cache") => Some(PathBuf::from(args.next()?)),
            Some(_) => return None,
        };
        if args.next().is_some() {
            return None;
        }
        Some(Args { config, cache })
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let raw = std::fs::read_to_string(&args.config)?;
    let config: SpotConfig = serde_json::from_str(&raw)?;
    let spot = Spot::from_config(&config)?;

    // A missing or corrupt store is fatal rather than silently starting
    // empty; without --cache the run stays in memory.
    let cache = match &args.cache {
        Some(path) => EvalCache::load(path)?,
        None => EvalCache::new(),
    };

    let result = EquityCalculator::new(&spot, &cache).calculate();

    println!("outcomes: {}", result.total_outcomes());
    for (seat, player) in spot.seats().iter().zip(result.players()) {
        println!(
            "{} [{} {}] -> win={:.2}% tie={:.2}%",
            player.position,
            seat.hole[0],
            seat.hole[1],
            player.win_percentage(),
            player.tie_percentage()
        );
    }

    if let Some(path) = &args.cache {
        cache.save_if_dirty(path)?;
    }
    Ok(())
}
