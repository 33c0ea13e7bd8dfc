//! sortscope - benchmark, animate and inspect instrumented sorts.

use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use sortscope_lab::prelude::*;
use sortscope_lab::telemetry;

#[derive(Parser)]
#[command(name = "sortscope")]
#[command(about = "Benchmark, animate and inspect instrumented sorting algorithms")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark algorithms and write CSV, table, JSON and SVG reports
    Bench {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Input sizes, comma separated
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,

        /// Trials per size
        #[arg(short, long)]
        trials: Option<usize>,

        /// Seed for the random inputs
        #[arg(short, long)]
        seed: Option<u64>,

        /// Algorithms to run, comma separated (default: all)
        #[arg(short, long, value_delimiter = ',')]
        algorithms: Option<Vec<Algorithm>>,

        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Animate one algorithm on a shuffled range
    Animate {
        /// Algorithm name (e.g. bubble or bubble_sort)
        #[arg(long = "alg")]
        algorithm: Algorithm,

        /// Number of elements
        #[arg(short, long)]
        n: Option<usize>,

        /// Shuffle seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Frames per second
        #[arg(long)]
        fps: Option<u32>,

        /// Save the rendered frames as text to this file instead of playing live
        #[arg(long)]
        save: Option<PathBuf>,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Sort the given values and print the metrics or the trace
    Sort {
        /// Algorithm name (e.g. quick or quick_sort)
        #[arg(long = "alg")]
        algorithm: Algorithm,

        /// Print every recorded step instead of the metrics
        #[arg(long)]
        trace: bool,

        /// Values to sort
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            config,
            sizes,
            trials,
            seed,
            algorithms,
            out,
        } => {
            let mut config = load_config(config)?;
            if let Some(sizes) = sizes {
                config.sizes = sizes;
            }
            if let Some(trials) = trials {
                config.trials = trials;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(algorithms) = algorithms {
                config.algorithms = algorithms;
            }
            if let Some(out) = out {
                config.output_dir = out;
            }
            config.validate()?;
            bench(&config)
        }
        Commands::Animate {
            algorithm,
            n,
            seed,
            fps,
            save,
            config,
        } => {
            let mut config = load_config(config)?;
            if let Some(n) = n {
                config.animation_len = n;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(fps) = fps {
                config.fps = fps;
            }
            config.validate()?;
            animate(algorithm, &config, save)
        }
        Commands::Sort {
            algorithm,
            trace,
            values,
        } => {
            if trace {
                println!("{}", algorithm.sort_traced(&values));
            } else {
                println!("{}", algorithm.sort(&values));
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<LabConfig> {
    match path {
        Some(path) => LabConfig::from_path(&path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(LabConfig::default()),
    }
}

fn bench(config: &LabConfig) -> Result<()> {
    let report = Benchmark::builder().from_config(config).build()?.run();

    let dir = &config.output_dir;
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let csv_path = dir.join("sorting_results.csv");
    save_csv(&report, &csv_path)?;
    info!(path = %csv_path.display(), "wrote csv");

    let table_path = dir.join("sorting_results.txt");
    save_table(&report, &table_path)?;
    info!(path = %table_path.display(), "wrote table");

    if let Err(err) = save_json(&report, dir.join("sorting_results.json")) {
        notice(&format!("json report skipped: {err}"));
    }
    if let Err(err) = save_svg(&report, dir.join("sorting_runtime.svg")) {
        notice(&format!("plot skipped: {err}"));
    }

    println!("{}", render_table(&report));
    Ok(())
}

fn animate(algorithm: Algorithm, config: &LabConfig, save: Option<PathBuf>) -> Result<()> {
    let input = shuffled_range(config.animation_len, config.seed);
    let traced = algorithm.sort_traced(&input);
    let player = TracePlayer::new(algorithm.title()).fps(config.fps);
    info!(
        algorithm = %algorithm,
        n = input.len(),
        frames = traced.trace.len(),
        "animating"
    );

    if let Some(path) = save {
        let mut sink = TextSink::new(&path);
        match player.play_and_persist(&traced.trace, &mut sink) {
            Ok(playback) => println!("Saved {} frames to {}", playback.frames, path.display()),
            Err(err) => notice(&format!("animation could not be saved: {err}")),
        }
        return Ok(());
    }

    if !std::io::stdout().is_terminal() {
        notice("stdout is not a terminal; skipping live animation (use --save to write frames)");
        return Ok(());
    }

    let mut sink = TerminalSink::stdout();
    if let Err(err) = player.play(&traced.trace, &mut sink) {
        notice(&format!("animation stopped: {err}"));
    }
    Ok(())
}

/// Report a non-fatal problem on the log and on stderr.
fn notice(message: &str) {
    warn!("{message}");
    eprintln!("note: {message}");
}
