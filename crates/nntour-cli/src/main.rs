//! nntour: build a greedy nearest-neighbor tour over random points.
//!
//! Draws a random point count and random points, builds the distance
//! index and the greedy tour, prints a report, and writes the route file
//! (and optionally an SVG) for plotting. Useful for:
//!
//! - Eyeballing greedy tours on small random instances
//! - Reproducing a run exactly with `--seed`
//! - Feeding the route file to an external plotter (`--plot-command`)
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin nntour -- [OPTIONS]
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};
use std::time::{Duration, Instant};

use clap::Parser;
use log::LevelFilter;
use nntour_core::{Clock, RouteConfig};

/// Greedy nearest-neighbor tours over random planar points.
///
/// Starts from the globally shortest pair, repeatedly extends the open
/// end to its nearest unvisited point, then closes the loop.
#[derive(Parser)]
#[command(name = "nntour", version)]
struct Cli {
    /// Smallest point count to draw.
    #[arg(long, default_value_t = RouteConfig::DEFAULT_MIN_POINTS)]
    min_points: usize,

    /// Exclusive upper bound on the drawn point count.
    #[arg(long, default_value_t = RouteConfig::DEFAULT_MAX_POINTS)]
    max_points: usize,

    /// Route exactly this many points instead of drawing a count.
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    count: Option<usize>,

    /// Exclusive upper bound on point coordinates.
    #[arg(long, default_value_t = RouteConfig::DEFAULT_COORDINATE_BOUND)]
    bound: i64,

    /// Seed for the random source (default: OS entropy).
    #[arg(long)]
    seed: Option<u64>,

    /// Full route config as a JSON string.
    ///
    /// When provided, all other config flags are ignored. The JSON must be
    /// a valid `RouteConfig` serialization; missing fields take defaults.
    #[arg(long, conflicts_with = "config")]
    config_json: Option<String>,

    /// Read the route config from a JSON file (same rules as `--config-json`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the route file for the plotter.
    #[arg(long, default_value = "route.txt")]
    route_file: PathBuf,

    /// Do not write the route file.
    #[arg(long)]
    no_route_file: bool,

    /// Write an SVG rendering of the tour to this file.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Command to run after the route file is written, e.g. "python3 plot.py".
    ///
    /// Split on whitespace; the first word is the program. A failing
    /// plotter is reported but does not fail the run. Needs the route
    /// file, so it cannot be combined with `--no-route-file`.
    #[arg(long, conflicts_with = "no_route_file")]
    plot_command: Option<String>,

    /// Also list every pair in the distance index.
    #[arg(long)]
    print_pairs: bool,

    /// Output diagnostics as JSON instead of the human-readable report.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Build a validated [`RouteConfig`] from CLI arguments.
///
/// If `--config-json` or `--config` is provided, the JSON is parsed
/// directly and the individual config flags are ignored. Otherwise a
/// config is assembled from the flags; `--count N` pins the draw range
/// to `N..N + 1`.
fn config_from_cli(cli: &Cli) -> Result<RouteConfig, String> {
    let config = if let Some(ref json) = cli.config_json {
        serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"))?
    } else if let Some(ref path) = cli.config {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Error reading {}: {e}", path.display()))?;
        serde_json::from_str(&text)
            .map_err(|e| format!("Error parsing {}: {e}", path.display()))?
    } else {
        let (min_points, max_points) = match cli.count {
            Some(n) => {
                let end = n
                    .checked_add(1)
                    .ok_or_else(|| format!("--count {n} is too large"))?;
                (n, end)
            }
            None => (cli.min_points, cli.max_points),
        };
        RouteConfig {
            min_points,
            max_points,
            coordinate_bound: cli.bound,
            seed: cli.seed,
        }
    };

    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Configure `env_logger` on stderr. `RUST_LOG` overrides the flags.
fn init_logger(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_millis()
        .target(env_logger::Target::Stderr)
        .parse_default_env();
    if let Err(e) = builder.try_init() {
        eprintln!("logger init failed: {e}");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    let config = match config_from_cli(&cli) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("config: {config:?}");

    let mut rng = config.rng();
    let (result, diagnostics) =
        match nntour_core::route_with_diagnostics(&config, &mut rng, &StdClock) {
            Ok(run) => run,
            Err(e) => {
                eprintln!("Routing error: {e}");
                return ExitCode::FAILURE;
            }
        };

    if cli.json {
        match serde_json::to_string_pretty(&diagnostics) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing diagnostics: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", nntour_export::format_points(&result.points));
        if cli.print_pairs {
            println!("{}", nntour_export::format_pairs(result.index.pairs()));
        }
        println!("{}", nntour_export::format_pairs(result.tour.pairs()));
        println!(
            "{}",
            nntour_export::format_summary(&diagnostics.summary, result.tour.start())
        );
        log::debug!("\n{}", diagnostics.report());
    }

    if result.tour.is_empty() {
        log::warn!("single point, nothing to plot");
        return ExitCode::SUCCESS;
    }

    if !cli.no_route_file {
        let written = nntour_export::to_route_file(&result.tour)
            .map_err(|e| e.to_string())
            .and_then(|text| write_output(&cli.route_file, &text));
        match written {
            Ok(()) => {
                if let Some(ref command) = cli.plot_command
                    && let Err(e) = run_plot_command(command)
                {
                    log::warn!("plot command failed: {e}");
                }
            }
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if let Some(ref svg_path) = cli.svg {
        let description = format!(
            "{} points, tour length {:.3}",
            diagnostics.summary.point_count, diagnostics.summary.tour_length,
        );
        let metadata = nntour_export::SvgMetadata {
            title: Some("nntour"),
            description: Some(&description),
        };
        let written = nntour_export::to_svg(
            &result.points,
            &result.tour,
            config.coordinate_bound,
            &metadata,
        )
        .map_err(|e| e.to_string())
        .and_then(|svg| write_output(svg_path, &svg));
        if let Err(e) = written {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// Write `contents` to `path`, logging the size on success.
fn write_output(path: &Path, contents: &str) -> Result<(), String> {
    std::fs::write(path, contents)
        .map_err(|e| format!("Error writing {}: {e}", path.display()))?;
    log::info!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

/// Run the external plotter and wait for it.
fn run_plot_command(command: &str) -> Result<(), String> {
    let mut words = command.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| "plot command is empty".to_string())?;

    log::info!("running plot command: {command}");
    let status = Command::new(program)
        .args(words)
        .status()
        .map_err(|e| format!("could not start {program}: {e}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("{program} exited with {status}"))
    }
}

/// [`Clock`] implementation backed by [`std::time::Instant`].
struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed(&self, since: &Instant) -> Duration {
        since.elapsed()
    }
}
