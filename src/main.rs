//! pagesim CLI: compare FIFO and Aging page replacement on a generated workload.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use pagesim::common::config::{
    DEFAULT_LOG_PATH, DEFAULT_NUM_PROCESSES, DEFAULT_TOTAL_REFERENCES,
};
use pagesim::input::{frame_budgets_or_default, prompt_frame_budgets};
use pagesim::runner::report::{find_anomalies, log_anomalies, render_chart, write_report};
use pagesim::storage::{write_chart, write_reference_log};
use pagesim::workload::generate;
use pagesim::{Aggregator, Result, SimConfig};

#[derive(Parser)]
#[command(name = "pagesim")]
#[command(about = "Compare FIFO and Aging page replacement on a working-set reference stream")]
#[command(version)]
struct Cli {
    /// Total number of references to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOTAL_REFERENCES)]
    references: usize,

    /// Number of simulated processes
    #[arg(short, long, default_value_t = DEFAULT_NUM_PROCESSES)]
    processes: usize,

    /// Frame counts to test; prompts on stdin when omitted
    #[arg(short, long, num_args = 1..)]
    frames: Option<Vec<String>>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Reference log output file
    #[arg(short, long, default_value = DEFAULT_LOG_PATH)]
    log_file: PathBuf,

    /// Also write the fault-rate chart to this file
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Evaluate process substreams in parallel
    #[arg(long)]
    parallel: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = SimConfig {
        total_references: cli.references,
        num_processes: cli.processes,
        log_path: cli.log_file,
        seed: cli.seed,
        ..SimConfig::default()
    };
    config.validate()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let budgets = match &cli.frames {
        Some(tokens) => frame_budgets_or_default(&tokens.join(" ")),
        None => prompt_frame_budgets(&mut io::stdin().lock(), &mut out)?,
    };

    info!(
        "{} references, {} processes, frame budgets {:?}, seed {:?}",
        config.total_references, config.num_processes, budgets, config.seed
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    writeln!(out, "Generating reference sequence")?;
    let stream = generate(&config, &mut rng)?;
    write_reference_log(&config.log_path, &stream)?;
    writeln!(out, "Sequence generated and saved to {}", config.log_path.display())?;
    writeln!(out)?;

    let table = Aggregator::new(&stream, &budgets)
        .parallel(cli.parallel)
        .run()?;

    write_report(&mut out, &table)?;
    log_anomalies(&find_anomalies(&table));

    let chart = render_chart(&table);
    writeln!(out)?;
    write!(out, "{}", chart)?;
    if let Some(path) = &cli.chart {
        write_chart(path, &chart)?;
        writeln!(out, "Chart saved to {}", path.display())?;
    }

    Ok(())
}
