//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::io::{self, BufRead};

use log::{info, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use entropy_coders::compression::compress::{run, CodingReport};
use entropy_coders::error::Result;
use entropy_coders::tools::cli::{coderopts_init, CoderOpts};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let opts = coderopts_init();

    // Available log levels are Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        opts.verbose.level_filter(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Unable to start the terminal logger.");
    }

    if let Err(e) = process(&opts) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    info!("Done.");
}

/// Get the input text, then run and print each requested coder.
fn process(opts: &CoderOpts) -> Result<()> {
    let text = match &opts.text {
        Some(text) => text.clone(),
        None => read_line()?,
    };
    if text.is_empty() {
        warn!("No input text given.");
    }

    for &algorithm in &opts.algorithms {
        let report = run(algorithm, &text)?;
        print_report(&report, opts.show_table);
    }
    Ok(())
}

/// Read one line from stdin, without the line ending.
fn read_line() -> Result<String> {
    eprint!("Input message: ");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(|c| c == '\n' || c == '\r').to_string())
}

fn print_report(report: &CodingReport, show_table: bool) {
    println!("##################################################");
    println!("{}", report.algorithm);
    println!("##################################################");
    println!("Encoded message: {}", report.encoded);
    println!("Decoded message: {}", report.decoded);
    println!("Entropy: {:.4} bits/symbol", report.entropy);
    println!(
        "Average code length: {:.4} bits/symbol",
        report.average_code_length
    );
    println!(
        "Compression ratio: {:.4} ({} bits vs {} at 8 bits/symbol)",
        report.compression_ratio,
        report.encoded.len(),
        report.decoded.chars().count() * 8
    );
    if show_table {
        for e in &report.symbols {
            println!(
                "Character-- {}:: Code-- {} :: Probability-- {}",
                e.symbol, e.code, e.probability
            );
        }
    }
}
