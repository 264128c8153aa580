//! Metrics collection and reporting for codec runs.
//!
//! Provides observable insight into a compress or decompress call:
//! throughput, compression ratio, and timing. Callers record byte counts
//! around the codec entry points; nothing is counted inside the coding
//! hot path.
//!
//! # Thread Safety
//!
//! `CodecMetrics` is NOT thread-safe. Each compress/decompress call owns
//! its state exclusively, so a plain mutable struct is sufficient.

use std::time::{Duration, Instant};

/// Metrics for one codec run.
#[derive(Debug, Clone)]
pub struct CodecMetrics {
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    /// Total bytes read from the input
    pub input_bytes: u64,

    /// Total bytes written to the output
    pub output_bytes: u64,
}

impl CodecMetrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            input_bytes: 0,
            output_bytes: 0,
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Compute the size ratio (output / input).
    ///
    /// Below 1.0 means the run shrank the data. Returns 0.0 if no input
    /// was processed. Only meaningful for compression runs; decompression
    /// inverts it.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }

    /// Compute throughput in input bytes/second.
    pub fn throughput_bps(&self) -> f64 {
        let duration_secs = self.duration().as_secs_f64();
        if duration_secs == 0.0 {
            0.0
        } else {
            self.input_bytes as f64 / duration_secs
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Codec Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!(
            "Input:  {} bytes ({:.2} MiB)",
            self.input_bytes,
            self.input_bytes as f64 / 1024.0 / 1024.0
        );
        println!(
            "Output: {} bytes ({:.2} MiB)",
            self.output_bytes,
            self.output_bytes as f64 / 1024.0 / 1024.0
        );
        println!("Ratio: {:.1}%", self.compression_ratio() * 100.0);
        println!("Throughput: {:.2} MB/s", self.throughput_bps() / 1_000_000.0);
        println!();
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             input_bytes={}\n\
             output_bytes={}\n\
             compression_ratio={:.4}\n",
            self.duration().as_millis(),
            self.input_bytes,
            self.output_bytes,
            self.compression_ratio(),
        )
    }
}

impl Default for CodecMetrics {
    fn default() -> Self {
        Self::new()
    }
}
