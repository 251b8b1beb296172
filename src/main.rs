//! filepow CLI
//!
//! A command-line tool for proof-of-work stamps on files.
//!
//! # Commands
//!
//! - `create` - Mine a proof for a file and print the header report
//! - `check` - Verify a header against a file
//! - `benchmark` - Measure candidate hashing speed

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use filepow::algorithm::{leading_zero_bits, sha256_hex, PowHasher, SuffixSequence};
use filepow::files::{read_header, read_input, write_header};
use filepow::report::{mining_report, verification_report};
use filepow::{verify, Miner};

#[derive(Parser)]
#[command(name = "filepow")]
#[command(version)]
#[command(about = "Hashcash-style proof-of-work for files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log verbosity, overridden by RUST_LOG when set
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Subcommand)]
enum Commands {
    /// Mine a proof-of-work suffix for a file
    Create {
        /// Required number of leading zero bits
        difficulty: u32,

        /// File to stamp
        file: PathBuf,

        /// Also write the header to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Give up after this many candidates (default: search until found)
        #[arg(long, env = "FILEPOW_MAX_ITERATIONS")]
        max_iterations: Option<u64>,
    },

    /// Verify a header file against a file
    Check {
        /// Header file to verify
        header: PathBuf,

        /// File the header claims to describe
        file: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of candidates to hash
        #[arg(short, long, default_value = "1000000")]
        count: u64,
    },
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.as_filter()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    let result = match cli.command {
        Commands::Create {
            difficulty,
            file,
            output,
            max_iterations,
        } => cmd_create(difficulty, &file, output.as_deref(), max_iterations),
        Commands::Check { header, file, json } => cmd_check(&header, &file, json),
        Commands::Benchmark { count } => cmd_benchmark(count),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_create(
    difficulty: u32,
    file: &Path,
    output: Option<&Path>,
    max_iterations: Option<u64>,
) -> anyhow::Result<bool> {
    let data = read_input(file)?;

    let mut miner = Miner::new(difficulty);
    if let Some(limit) = max_iterations {
        miner = miner.with_iteration_limit(limit);
    }

    info!(file = %file.display(), difficulty, "mining");
    let result = miner.mine(&data)?;

    print!("{}", mining_report(file, &result));

    if let Some(path) = output {
        write_header(path, &result.header())?;
        info!(path = %path.display(), "header written");
    }

    Ok(true)
}

fn cmd_check(header_path: &Path, file: &Path, json: bool) -> anyhow::Result<bool> {
    let header = read_header(header_path)?;
    let data = read_input(file)?;

    let report = verify(&header, &data);
    info!(passed = report.passed, "verification finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", verification_report(&report));
    }

    Ok(report.passed)
}

fn cmd_benchmark(count: u64) -> anyhow::Result<bool> {
    println!("Running benchmark with {} candidates...", count);

    let hasher = PowHasher::new(&sha256_hex(b"benchmark input data for filepow"));
    let mut sequence = SuffixSequence::new();
    let mut suffix = String::new();
    let mut best = 0u32;

    let start = Instant::now();

    for _ in 0..count {
        sequence.render_into(&mut suffix);
        sequence.advance();
        best = best.max(leading_zero_bits(&hasher.digest(&suffix)));
    }

    let elapsed = start.elapsed();
    let hashrate = if elapsed.as_secs_f64() > 0.0 {
        count as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("\nResults:");
    println!("  Total candidates: {}", count);
    println!("  Time elapsed: {:.2}s", elapsed.as_secs_f64());
    println!("  Hashrate: {:.2} H/s", hashrate);
    println!("  Best zero bits: {}", best);
    println!("  Last suffix length: {}", suffix.len());

    Ok(true)
}
