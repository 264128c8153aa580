//! huffcode: command-line front end for the huffcode codec.
//!
//! Thin plumbing only: argument parsing, file I/O, and metrics reporting.
//! All coding logic lives in `huffcode_core`.

use std::fs;
use std::io::{BufReader, BufWriter};
use std::process::ExitCode;

use huffcode_core::metrics::CodecMetrics;
use huffcode_core::{adaptive_codec, static_codec};

mod config;
mod input_gen;

use config::{Config, Mode};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run 'huffcode --help' for usage");
            return ExitCode::FAILURE;
        }
    };

    if config.print_config {
        config.print();
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut metrics = CodecMetrics::new();

    if config.mode.is_decompress() {
        // Validated during argument parsing
        let input_path = config
            .input_file
            .as_ref()
            .ok_or("decompression requires --in")?;
        metrics.input_bytes = fs::metadata(input_path)?.len();

        let source = BufReader::new(fs::File::open(input_path)?);
        let sink = BufWriter::new(fs::File::create(&config.output_file)?);
        let sink = match config.mode {
            Mode::Decompress => static_codec::decompress(source, sink)?,
            _ => adaptive_codec::decompress(source, sink)?,
        };
        sink.into_inner().map_err(|e| e.into_error())?;
    } else {
        let input = match &config.input_file {
            Some(path) => fs::read(path)?,
            None => {
                println!(
                    "no input file given, generating {} sample bytes (seed {})",
                    config.sample_bytes, config.seed
                );
                input_gen::generate_sample_data(config.seed, config.sample_bytes)
            }
        };
        metrics.input_bytes = input.len() as u64;

        let sink = BufWriter::new(fs::File::create(&config.output_file)?);
        let sink = match config.mode {
            Mode::Compress => static_codec::compress(&input, sink)?,
            _ => adaptive_codec::compress(&input[..], sink)?,
        };
        sink.into_inner().map_err(|e| e.into_error())?;
    }

    metrics.output_bytes = fs::metadata(&config.output_file)?.len();
    metrics.complete();

    if config.print_metrics {
        metrics.print_summary();
    }
    Ok(())
}
