//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p checkers_core -- [depth]
//!
//! Examples:
//!   # Default: depth 6 from every test position
//!   cargo flamegraph --example perft_bench -p checkers_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p checkers_core -- 7

use checkers_core::{perft, Board, Color};
use std::env;
use std::time::Instant;

/// Test positions for profiling, black to move in each.
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        ".b.b.b.b\nb.b.b.b.\n.b.b.b.b\n........\n........\nw.w.w.w.\n.w.w.w.w\nw.w.w.w.",
    ),
    (
        "Contact middlegame",
        ".b.b.b.b\nb.b.b...\n.b...b.b\n..b.....\n.w.w....\n..w...w.\n.w.w.w.w\nw.w.w...",
    ),
    (
        "Kings across the seam",
        "........\nB.......\n.......w\n......w.\n.b......\nw.......\n.W......\n........",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(6);

    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, layout) in TEST_POSITIONS {
        let board = match Board::from_layout(layout) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{name}: bad layout: {e}");
                continue;
            }
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&board, Color::Black, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
