//! Throughput benchmark for the sparse transition engine

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use sparse_life::domain::{ConwayRule, Generation, presets, random_seed, transition_with_stats};

/// Average milliseconds per generation, plus live cells and candidates of the last step
fn benchmark(start: &Generation, iterations: u32) -> (f64, usize, usize) {
    let rule = ConwayRule;
    let mut current = start.clone();
    let mut last = Default::default();

    let begin = Instant::now();
    for _ in 0..iterations {
        let (next, stats) = transition_with_stats(&current, &rule);
        current = next;
        last = stats;
    }
    let ms = begin.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, last.live, last.candidates)
}

fn print_row(label: &str, start: &Generation, iterations: u32) {
    let (ms, live, candidates) = benchmark(start, iterations);
    let throughput = if ms > 0.0 { live as f64 / (ms / 1000.0) / 1_000_000.0 } else { 0.0 };

    println!(
        "{:>16} {:>10} {:>12} {:>12.3} {:>12.2}",
        label, live, candidates, ms, throughput
    );
}

fn main() {
    println!("=== Sparse Life Benchmark ===\n");

    let iterations = 50;
    println!(
        "{:>16} {:>10} {:>12} {:>12} {:>12}",
        "Start", "Live", "Candidates", "ms/gen", "M cells/s"
    );
    println!("{:-<66}", "");

    let mut rng = StdRng::seed_from_u64(0x5eed);
    for size in [64, 256, 512, 1024] {
        let soup = random_seed(size, size, &mut rng);
        print_row(&format!("soup {size}x{size}"), &soup, iterations);
    }

    for name in ["gosper", "acorn", "r-pentomino"] {
        let Ok(seed) = presets::instantiate(name, 0, 0) else {
            continue;
        };
        // Let methuselahs spread before timing
        print_row(name, &sparse_life::domain::engine::advance(&seed, &ConwayRule, 500), iterations);
    }
}
