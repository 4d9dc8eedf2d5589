use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::process;
use std::time::{Duration, Instant};

/// Environment variable holding the log filter
const LOG_ENV: &str = "YIELD_MAIN_LOG";

#[derive(Parser)]
#[command(name = "yield-main")]
#[command(about = "Exercise the yield-main sleep and yield primitives", long_about = None)]
struct Cli {
    /// Log at debug level (overridden by YIELD_MAIN_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Block this thread for the given number of milliseconds
    Sleep {
        /// Duration in milliseconds (fractions allowed)
        #[arg(allow_negative_numbers = true)]
        millis: f64,
    },
    /// Yield to the OS scheduler
    Yield {
        /// How many times to yield
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: u32,
    },
    /// Check sleep and yield timing against their expected bounds
    Check,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Sleep { millis } => sleep_command(millis),
        Commands::Yield { count } => yield_command(count),
        Commands::Check => check_command(),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, default_filter)).init();
}

fn sleep_command(millis: f64) -> Result<()> {
    let start = Instant::now();
    yield_main::sleep_main_checked(millis)
        .with_context(|| format!("cannot sleep for {:?} ms", millis))?;
    let elapsed = start.elapsed();

    println!("{} slept {:?} ms in {}", "✓".green().bold(), millis, format_elapsed(elapsed));
    Ok(())
}

fn yield_command(count: u32) -> Result<()> {
    let start = Instant::now();
    for _ in 0..count {
        yield_main::yield_main();
    }
    let elapsed = start.elapsed();

    println!("{} yielded {} times in {}", "✓".green().bold(), count, format_elapsed(elapsed));
    Ok(())
}

/// One timing expectation and what was measured against it
struct Check {
    name: &'static str,
    elapsed: Duration,
    min: Duration,
    max: Duration,
}

impl Check {
    fn passed(&self) -> bool {
        self.elapsed >= self.min && self.elapsed <= self.max
    }
}

fn measure<F: FnOnce()>(f: F) -> Duration {
    let start = Instant::now();
    f();
    start.elapsed()
}

fn check_command() -> Result<()> {
    let checks = [
        Check {
            name: "sleep(100) takes 90..=200 ms",
            elapsed: measure(|| yield_main::sleep_main(100.0)),
            min: Duration::from_millis(90),
            max: Duration::from_millis(200),
        },
        Check {
            name: "sleep(50) twice takes 90..=200 ms",
            elapsed: measure(|| {
                yield_main::sleep_main(50.0);
                yield_main::sleep_main(50.0);
            }),
            min: Duration::from_millis(90),
            max: Duration::from_millis(200),
        },
        Check {
            name: "sleep(0) returns within 5 ms",
            elapsed: measure(|| yield_main::sleep_main(0.0)),
            min: Duration::ZERO,
            max: Duration::from_millis(5),
        },
        Check {
            name: "sleep() without an argument returns within 5 ms",
            elapsed: measure(|| yield_main::sleep_main_opt(None)),
            min: Duration::ZERO,
            max: Duration::from_millis(5),
        },
        Check {
            name: "sleep(-1) returns within 5 ms",
            elapsed: measure(|| yield_main::sleep_main(-1.0)),
            min: Duration::ZERO,
            max: Duration::from_millis(5),
        },
        Check {
            name: "yield() returns within 10 ms",
            elapsed: measure(yield_main::yield_main),
            min: Duration::ZERO,
            max: Duration::from_millis(10),
        },
        Check {
            name: "1000 yields take under 50 ms",
            elapsed: measure(|| {
                for _ in 0..1000 {
                    yield_main::yield_main();
                }
            }),
            min: Duration::ZERO,
            max: Duration::from_millis(50),
        },
    ];

    report(&checks)
}

/// Print one PASS/FAIL line per check; fails if any check did
fn report(checks: &[Check]) -> Result<()> {
    let mut failed = 0;
    for check in checks {
        let status = if check.passed() {
            "PASS".green().bold()
        } else {
            failed += 1;
            "FAIL".red().bold()
        };
        println!("{} {} ({})", status, check.name, format_elapsed(check.elapsed));
    }

    if failed > 0 {
        anyhow::bail!("{} of {} checks failed", failed, checks.len());
    }

    println!("\n{} all {} checks passed", "✓".green().bold(), checks.len());
    Ok(())
}

fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.3} ms", elapsed.as_secs_f64() * 1000.0)
}
