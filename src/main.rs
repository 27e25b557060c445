use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use colored::*;
use env_logger::Env;
use std::process;

use unroll_bench::bench;
use unroll_bench::cli::Cli;
use unroll_bench::listing::scanner;
use unroll_bench::output::{formatter, BenchReport};

fn main() -> Result<()> {
    // Wrong invocation exits 1 with usage on stderr; help/version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    setup_logging(cli.verbose, cli.quiet);

    let buffer = bench::fill_buffer();
    log::debug!("filled {}-element buffer", buffer.len());

    let results = vec![
        bench::time_variant(bench::NAIVE_FN, bench::sum_array, &buffer),
        bench::time_variant(bench::UNROLLED_FN, bench::sum_array_unrolled, &buffer),
    ];

    // One lookup per summation function. An unreadable listing is reported
    // on stderr and the run continues; it is not fatal.
    let mut excerpts = Vec::new();
    for function in [bench::NAIVE_FN, bench::UNROLLED_FN] {
        match scanner::scan_file(&cli.listing, function) {
            Ok(excerpt) => excerpts.push(excerpt),
            Err(e) => eprintln!("{}: {:#}", "Error".red().bold(), e),
        }
    }

    let report = BenchReport {
        listing_path: cli.listing.display().to_string(),
        results,
        excerpts,
    };

    let output = formatter::format_output(&report, &cli.format)?;
    println!("{}", output);

    Ok(())
}

/// Sets up logging with appropriate filters
fn setup_logging(verbosity: u8, quiet: bool) {
    if quiet {
        env_logger::Builder::from_env(Env::default().default_filter_or("error")).init();
        return;
    }

    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();
}
