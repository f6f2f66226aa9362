use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kyouen::{check_kyouen, find_kyouen, render, Stage};
use kyouen_judge::{check_records, load_records, sample_boards, serve};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info", global = true)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether stages with exactly four stones are a kyouen
    Check {
        #[arg(required = true)]
        stages: Vec<String>,
    },
    /// Search a puzzle for four stones that form a kyouen
    Find { stage: String },
    /// Draw a stage as a grid
    Show { stage: String },
    /// Validate a JSON file with a list of puzzle records
    Validate { path: PathBuf },
    /// Answer JSON requests from stdin, one per line
    Serve,
    /// Search random boards for a kyouen
    Sample {
        /// Side length of the grid
        #[arg(long, default_value_t = 6)]
        size: usize,

        /// Stones per board
        #[arg(long, default_value_t = 4)]
        stones: usize,

        /// How many boards to draw
        #[arg(short, long, default_value_t = 1000)]
        num_boards: usize,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn run_check(stages: &[String]) -> anyhow::Result<()> {
    let mut num_invalid = 0;
    for stage in stages {
        if let Ok(board) = stage.parse::<Stage>() {
            debug!("\n{}", render(&board));
        }
        match check_kyouen(stage) {
            Ok(Some(kyouen)) => println!("{}: kyouen ({})", stage, kyouen.shape),
            Ok(None) => println!("{}: not kyouen", stage),
            Err(err) => {
                println!("{}: {}", stage, err);
                num_invalid += 1;
            }
        }
    }
    if num_invalid > 0 {
        anyhow::bail!("{} of {} stages were invalid", num_invalid, stages.len());
    }
    Ok(())
}

fn run_find(text: &str) -> anyhow::Result<()> {
    let stage: Stage = text.parse()?;
    debug!(size = stage.size(), stones = stage.stone_count());
    println!("{}", render(&stage));
    match find_kyouen(stage.stones()) {
        Some(kyouen) => {
            // Every stone on the circle or line is highlighted, not only the four found
            let (on_shape, others) = stage
                .stones()
                .iter()
                .partition(|&&p| kyouen.passes_through(p));
            let highlighted = Stage::from_points(stage.size(), others, on_shape);
            println!("Found a kyouen on the {}:", kyouen.shape);
            println!("{}", render(&highlighted));
        }
        None => println!("No kyouen"),
    }
    Ok(())
}

fn run_show(text: &str) -> anyhow::Result<()> {
    let stage: Stage = text.parse()?;
    println!("{}", render(&stage));
    println!(
        "{} stones, {} selected",
        stage.stone_count(),
        stage.selected_count()
    );
    Ok(())
}

fn run_validate(path: PathBuf) -> anyhow::Result<()> {
    let records = load_records(&path)?;
    let num_invalid = check_records(&records);
    if num_invalid > 0 {
        anyhow::bail!("{} of {} puzzles are invalid", num_invalid, records.len());
    }
    println!("All {} puzzles are valid", records.len());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    match args.command {
        Command::Check { stages } => run_check(&stages),
        Command::Find { stage } => run_find(&stage),
        Command::Show { stage } => run_show(&stage),
        Command::Validate { path } => run_validate(path),
        Command::Serve => {
            let num_answered = serve(std::io::stdin().lock(), std::io::stdout().lock())?;
            info!(num_answered, "Done");
            Ok(())
        }
        Command::Sample {
            size,
            stones,
            num_boards,
            seed,
            json,
        } => {
            if size == 0 || size.checked_mul(size).map_or(true, |cells| stones > cells) {
                anyhow::bail!("{} stones do not fit on a {}x{} grid", stones, size, size);
            }
            // Get a random seed
            let seed = seed.unwrap_or_else(rand::random);
            info!(seed);
            let mut rng = StdRng::seed_from_u64(seed);

            let score = sample_boards(&mut rng, size, stones, num_boards);
            if json {
                println!("{}", serde_json::to_string(&score)?);
            } else {
                println!("{}", score);
            }
            Ok(())
        }
    }
}

// Logs go to stderr, because stdout carries the responses in serve mode.
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
