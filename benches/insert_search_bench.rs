//! Benchmark measuring bulk insertion and exact-point search throughput

use quadgrid::{Node, Point, Quadtree};
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

fn main() {
    println!("quadgrid Insert/Search Benchmark");
    println!("================================\n");

    let num_items = 1_000_000;
    let num_searches = 100_000;

    // Fixed seed for reproducibility
    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    // Generate random node positions (coordinate space: 1000x1000)
    let mut nodes = Vec::with_capacity(num_items);
    for i in 0..num_items {
        let position = Point::new(
            rng.random_range(0.0..1000.0),
            rng.random_range(0.0..1000.0),
        );
        nodes.push(Node::new(position, (i % 101) as i8));
    }

    // Time bulk insertion
    let mut tree = Quadtree::new(Point::new(0.0, 0.0), Point::new(1000.0, 1000.0));
    let start = Instant::now();
    let mut accepted = 0_usize;
    for node in &nodes {
        if tree.insert(*node) {
            accepted += 1;
        }
    }
    let insert_elapsed = start.elapsed();
    println!(
        "Inserted {} nodes in {:.3}s ({:.0} inserts/s)",
        accepted,
        insert_elapsed.as_secs_f64(),
        accepted as f64 / insert_elapsed.as_secs_f64()
    );

    // Time searches for known positions
    let start = Instant::now();
    let mut hits = 0_usize;
    for node in nodes.iter().take(num_searches) {
        if tree.search(node.position()).is_ok() {
            hits += 1;
        }
    }
    let search_elapsed = start.elapsed();
    println!(
        "Searched {} positions in {:.3}s ({:.0} searches/s), {} hits",
        num_searches,
        search_elapsed.as_secs_f64(),
        num_searches as f64 / search_elapsed.as_secs_f64(),
        hits
    );

    // Time searches for random (almost surely missing) positions
    let start = Instant::now();
    let mut misses = 0_usize;
    for _ in 0..num_searches {
        let probe = Point::new(
            rng.random_range(0.0..1000.0),
            rng.random_range(0.0..1000.0),
        );
        if tree.search(probe).is_err() {
            misses += 1;
        }
    }
    let miss_elapsed = start.elapsed();
    println!(
        "Probed {} random positions in {:.3}s ({:.0} probes/s), {} misses",
        num_searches,
        miss_elapsed.as_secs_f64(),
        num_searches as f64 / miss_elapsed.as_secs_f64(),
        misses
    );
}
