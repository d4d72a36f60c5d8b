//! Performance harness for cube-engine.
//!
//! Measures move throughput across several worker threads.
//!
//! ## Usage
//!
//! ```sh
//! cargo run -p cube-engine --release --example performance_harness
//! ```
//!
//! ## Metrics
//!
//! - Moves per second
//! - Algorithms per second
//! - Parses per second for the notation workload

#![allow(clippy::pedantic)]

use cube_engine::{apply_algorithm, create_solved_state, parse_algorithm, MoveToken};
use proptest as _;
use rstest as _;
#[cfg(feature = "serde")]
use serde as _;
use serde_json as _;
use thiserror as _;

use std::hint::black_box;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

const NUM_THREADS: usize = 4;
const RUN_DURATION: Duration = Duration::from_millis(750);

#[derive(Debug, Clone, Copy)]
struct BenchmarkResult {
    name: &'static str,
    units_per_second: f64,
    moves_per_second: f64,
}

/// Runs `work` on every thread until `duration` elapses. `work` returns the
/// number of moves it processed per call.
fn run_threads<F>(name: &'static str, duration: Duration, work: F) -> BenchmarkResult
where
    F: Fn() -> u64 + Send + Sync + Copy + 'static,
{
    let (tx, rx) = mpsc::channel();

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let tx = tx.clone();
            thread::spawn(move || {
                let mut units = 0u64;
                let mut moves = 0u64;
                let start = Instant::now();
                while start.elapsed() < duration {
                    moves += work();
                    units += 1;
                }
                tx.send((units, moves)).ok();
            })
        })
        .collect();

    for h in handles {
        h.join().ok();
    }
    drop(tx);

    let (mut units, mut moves) = (0u64, 0u64);
    for (u, m) in rx {
        units += u;
        moves += m;
    }

    let elapsed_secs = duration.as_secs_f64();
    BenchmarkResult {
        name,
        units_per_second: units as f64 / elapsed_secs,
        moves_per_second: moves as f64 / elapsed_secs,
    }
}

fn parsed(notation: &str) -> Vec<MoveToken> {
    parse_algorithm(notation).expect("benchmark notation parses")
}

fn benchmark_face_turns(duration: Duration) -> BenchmarkResult {
    run_threads("face_turns", duration, || {
        thread_local! {
            static MOVES: Vec<MoveToken> = parsed("R U R' U' F2 D' L B2");
        }
        MOVES.with(|moves| {
            let end = apply_algorithm(&create_solved_state(), black_box(moves));
            black_box(end);
            moves.len() as u64
        })
    })
}

fn benchmark_composite_moves(duration: Duration) -> BenchmarkResult {
    run_threads("composite", duration, || {
        thread_local! {
            static MOVES: Vec<MoveToken> = parsed("x y' z2 r U' Rw2 M E' S2 f' Bw");
        }
        MOVES.with(|moves| {
            let end = apply_algorithm(&create_solved_state(), black_box(moves));
            black_box(end);
            moves.len() as u64
        })
    })
}

fn benchmark_parse_and_apply(duration: Duration) -> BenchmarkResult {
    run_threads("parse_apply", duration, || {
        let moves = parse_algorithm(black_box("(T-perm) R U R' U' R' F R2 U' R' U' R U R' F'"))
            .unwrap_or_default();
        black_box(apply_algorithm(&create_solved_state(), &moves));
        moves.len() as u64
    })
}

fn format_number(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{:.2}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.2}K", n / 1_000.0)
    } else {
        format!("{:.2}", n)
    }
}

fn print_results(results: &[BenchmarkResult]) {
    println!();
    println!("cube-engine performance harness ({NUM_THREADS} threads, {RUN_DURATION:?} per run)");
    println!("{:14} {:>14} {:>14}", "benchmark", "algs/sec", "moves/sec");
    for result in results {
        println!(
            "{:14} {:>14} {:>14}",
            result.name,
            format_number(result.units_per_second),
            format_number(result.moves_per_second),
        );
    }
}

fn main() {
    let results = [
        benchmark_face_turns(RUN_DURATION),
        benchmark_composite_moves(RUN_DURATION),
        benchmark_parse_and_apply(RUN_DURATION),
    ];
    print_results(&results);
}
