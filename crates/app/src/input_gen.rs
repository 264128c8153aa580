//! Sample input generation for codec runs.
//!
//! When no input file is specified for compression, a sample buffer with
//! mixed compression characteristics is generated: byte runs, text-like
//! sections, short repeating patterns, and incompressible noise. The mix
//! makes the compression ratio in the metrics summary meaningful, and a
//! fixed seed reproduces the identical buffer.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Letter frequencies roughly follow English, so Huffman coding has
/// something to exploit in the text-like sections.
const TEXT_ALPHABET: &[u8] = b"etaoinshrdlu etaoin cmfwyp vbgkjq xz.,\n";

/// Generate a sample buffer of exactly `size_bytes` bytes.
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let section_len = rng.gen_range(512..=4096).min(size_bytes - data.len());

        match rng.gen_range(0..10u8) {
            // 30% runs of a single byte (highly compressible)
            0..=2 => {
                let value: u8 = rng.gen();
                data.extend(std::iter::repeat(value).take(section_len));
            }
            // 30% text-like data (moderately compressible)
            3..=5 => {
                for _ in 0..section_len {
                    data.push(TEXT_ALPHABET[rng.gen_range(0..TEXT_ALPHABET.len())]);
                }
            }
            // 20% short repeating patterns
            6..=7 => {
                let pattern: Vec<u8> = (0..rng.gen_range(3..=16)).map(|_| rng.gen()).collect();
                for i in 0..section_len {
                    data.push(pattern[i % pattern.len()]);
                }
            }
            // 20% incompressible noise
            _ => {
                for _ in 0..section_len {
                    data.push(rng.gen());
                }
            }
        }
    }

    data
}
