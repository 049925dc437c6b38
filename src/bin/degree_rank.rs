//! Degree ranking of a plain-text edge list
//!
//! Usage: degree_rank <filename> <num_threads> [affinity]

use std::process::ExitCode;
use std::time::Instant;

use degree_rank::config::ScanConfig;
use degree_rank::logging::init_logging;
use degree_rank::pipeline::scan;

fn main() -> ExitCode {
    init_logging();
    let start = Instant::now();

    let args: Vec<String> = std::env::args().collect();
    let config = match ScanConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    let report = match scan(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error processing {}: {}", config.path.display(), e);
            return ExitCode::from(1);
        }
    };

    println!("\n{}", report);
    println!("\nExecution Time: {:.6} seconds", start.elapsed().as_secs_f64());

    ExitCode::SUCCESS
}
