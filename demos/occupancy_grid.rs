//! Build an occupancy snapshot over a region and query a few cells.
use quadgrid::prelude::*;

fn main() {
    let mut tree = Quadtree::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0));

    assert!(tree.insert(Node::new(Point::new(12.0, 8.0), 95))); // confident obstacle
    assert!(tree.insert(Node::new(Point::new(40.0, 40.0), 10))); // probably clear
    assert!(tree.insert(Node::new(Point::new(77.0, 63.0), -1))); // unknown
    assert!(tree.insert(Node::with_visited(Point::new(5.0, 5.0), 0, true)));

    for probe in [Point::new(12.0, 8.0), Point::new(77.0, 63.0)] {
        let node = tree.search(probe).unwrap();
        println!(
            "({}, {}): confidence {}, visited {}",
            probe.x,
            probe.y,
            node.occupied_confidence(),
            node.is_visited()
        );
    }
}
