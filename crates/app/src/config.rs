//! Configuration for the huffcode command-line tool.
//!
//! Handles command-line argument parsing. The first positional argument
//! selects the codec mode; everything else is flags. Compression modes
//! can run without an input file, in which case a reproducible sample
//! buffer is generated from the seed.

use std::path::PathBuf;

/// Which codec entry point to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Static canonical Huffman compression
    Compress,
    /// Static canonical Huffman decompression
    Decompress,
    /// Adaptive Huffman compression
    AdaptiveCompress,
    /// Adaptive Huffman decompression
    AdaptiveDecompress,
}

impl Mode {
    fn parse(text: &str) -> Option<Self> {
        match text {
            "compress" => Some(Mode::Compress),
            "decompress" => Some(Mode::Decompress),
            "adaptive-compress" => Some(Mode::AdaptiveCompress),
            "adaptive-decompress" => Some(Mode::AdaptiveDecompress),
            _ => None,
        }
    }

    /// Whether this mode consumes an already-compressed stream.
    pub fn is_decompress(self) -> bool {
        matches!(self, Mode::Decompress | Mode::AdaptiveDecompress)
    }
}

/// Complete configuration for a codec run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Selected codec mode
    pub mode: Mode,

    /// Input file path (None = generate a sample, compression only)
    pub input_file: Option<PathBuf>,

    /// Output file path
    pub output_file: PathBuf,

    /// Seed for sample generation
    pub seed: u64,

    /// Size of the generated sample when no input file is given
    pub sample_bytes: usize,

    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the metrics summary
    pub print_metrics: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// The mode is required. If `--seed` is absent, a time-based seed is
    /// used (and echoed, so the run can be reproduced).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut mode: Option<Mode> = None;
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut print_config = false;
        let mut print_metrics = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                text => match Mode::parse(text) {
                    Some(parsed) if mode.is_none() => mode = Some(parsed),
                    Some(_) => return Err("mode given more than once".to_string()),
                    None => return Err(format!("unknown argument: {text}")),
                },
            }
            i += 1;
        }

        let Some(mode) = mode else {
            return Err(
                "no mode given (compress, decompress, adaptive-compress, adaptive-decompress)"
                    .to_string(),
            );
        };

        if mode.is_decompress() && input_file.is_none() {
            return Err("decompression requires --in".to_string());
        }

        // Time-based seed unless one was given explicitly
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        let default_output = if mode.is_decompress() {
            "./out.bin"
        } else {
            "./out.huff"
        };

        Ok(Config {
            mode,
            input_file,
            output_file: output_file.unwrap_or_else(|| PathBuf::from(default_output)),
            seed,
            sample_bytes: sample_bytes.unwrap_or(262_144), // 256 KiB
            print_config,
            print_metrics,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Mode: {:?}", self.mode);
        println!(
            "Input file:  {}",
            self.input_file
                .as_ref()
                .and_then(|p| p.to_str())
                .unwrap_or("(generate sample)")
        );
        println!(
            "Output file: {}",
            self.output_file.to_str().unwrap_or("(non-UTF-8 path)")
        );
        if self.input_file.is_none() && !self.mode.is_decompress() {
            println!("Sample size: {} bytes", self.sample_bytes);
            println!("Seed: {}", self.seed);
        }
        println!();
    }
}

fn print_help() {
    println!("huffcode: reference Huffman coding compressor");
    println!();
    println!("USAGE:");
    println!("    huffcode <MODE> [OPTIONS]");
    println!();
    println!("MODES:");
    println!("    compress                Static canonical Huffman compression");
    println!("    decompress              Static canonical Huffman decompression");
    println!("    adaptive-compress       Adaptive Huffman compression (no header)");
    println!("    adaptive-decompress     Adaptive Huffman decompression");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>             Input file (compress default: generate sample)");
    println!("    --out <PATH>            Output file (default: ./out.huff or ./out.bin)");
    println!("    --seed <N>              Seed for sample generation");
    println!("    --sample-bytes <N>      Generated sample size (default: 262144)");
    println!("    --print-config          Print resolved configuration");
    println!("    --no-metrics            Don't print the metrics summary");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffcode compress --in file.bin --out file.huff");
    println!("    huffcode decompress --in file.huff --out restored.bin");
    println!("    huffcode adaptive-compress --seed 42        # compress a sample");
    println!();
}
