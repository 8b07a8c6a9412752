use clap::Parser;
use enchant_content::{benchmark_hooks, BenchConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bench_hooks", about = "Benchmark enchantment storage and hook dispatch")]
struct Args {
    /// Iterations per benchmark (overrides the config file)
    iterations: Option<u32>,

    /// Path to a TOML benchmark config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the reports as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => BenchConfig::load_from_path(path)?,
        None => BenchConfig::default(),
    };
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
        config.validate()?;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        iterations = config.iterations,
        pause_ms = config.pause_ms,
        "running hook benchmarks"
    );
    let summary = benchmark_hooks(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for report in &summary.reports {
            println!(
                "{:<30} {:>10} iterations {:>14} ns total {:>10.1} ns/iter",
                report.name, report.iterations, report.total_ns, report.avg_ns
            );
        }
        println!(
            "Finished all benchmarks in {:.6} seconds",
            summary.total_ns as f64 / 1e9
        );
    }

    Ok(())
}
