//! Distinguish the two ways a lookup can fail.
use quadgrid::prelude::*;

fn main() {
    let mut tree = Quadtree::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
    assert!(tree.insert(Node::new(Point::new(50.0, 50.0), 80)));

    // In-region position with nothing stored there.
    assert_eq!(tree.search(Point::new(10.0, 10.0)), Err(SearchError::NotFound));

    // Position the tree was never responsible for.
    assert_eq!(tree.search(Point::new(500.0, 500.0)), Err(SearchError::OutOfRegion));

    for probe in [Point::new(10.0, 10.0), Point::new(500.0, 500.0)] {
        match tree.search(probe) {
            Ok(node) => println!("({}, {}): found {node:?}", probe.x, probe.y),
            Err(reason) => println!("({}, {}): {reason}", probe.x, probe.y),
        }
    }
}
