//! Randomized insert/search consistency tests with a fixed seed

#[cfg(test)]
mod tests {
    use crate::{Node, Point, Quadtree, SearchError};
    use rand::{Rng, SeedableRng};

    /// Builds a tree over the given region populated with `count` random
    /// in-region nodes, returning the tree and the inserted nodes.
    fn setup_random_tree(
        top_left: Point,
        bottom_right: Point,
        count: usize,
        seed: u64,
    ) -> (Quadtree, Vec<Node>) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut tree = Quadtree::new(top_left, bottom_right);
        let mut inserted = Vec::with_capacity(count);

        for i in 0..count {
            let position = Point::new(
                rng.random_range(top_left.x..bottom_right.x),
                rng.random_range(top_left.y..bottom_right.y),
            );
            let node = Node::new(position, (i % 101) as i8);
            assert!(tree.insert(node), "in-region insert must succeed");
            inserted.push(node);
        }

        (tree, inserted)
    }

    #[test]
    fn test_every_inserted_node_is_searchable() {
        let (tree, inserted) = setup_random_tree(
            Point::new(0.0, 0.0),
            Point::new(1000.0, 1000.0),
            500,
            95756739,
        );

        assert_eq!(tree.len(), inserted.len());
        for node in &inserted {
            let found = tree.search(node.position()).unwrap();
            assert_eq!(found.position(), node.position());
        }
    }

    #[test]
    fn test_random_points_in_off_origin_region() {
        // Region spanning negative coordinates, nowhere near the origin.
        let (tree, inserted) = setup_random_tree(
            Point::new(-750.0, 320.0),
            Point::new(-250.0, 820.0),
            300,
            42,
        );

        for node in &inserted {
            assert_eq!(tree.search(node.position()), Ok(node));
        }
    }

    #[test]
    fn test_out_of_region_points_never_insert_or_match() {
        let (mut tree, _) = setup_random_tree(
            Point::new(0.0, 0.0),
            Point::new(100.0, 100.0),
            100,
            7,
        );
        let len_before = tree.len();

        let mut rng = rand::rngs::StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let outside = Point::new(
                rng.random_range(100.001..200.0),
                rng.random_range(0.0..200.0),
            );
            assert!(!tree.insert(Node::new(outside, 0)));
            assert_eq!(tree.search(outside), Err(SearchError::OutOfRegion));
        }

        assert_eq!(tree.len(), len_before, "rejected inserts must have no effect");
    }

    #[test]
    fn test_unsearched_random_misses_report_not_found() {
        let (tree, inserted) = setup_random_tree(
            Point::new(0.0, 0.0),
            Point::new(100.0, 100.0),
            200,
            1234,
        );

        // Fresh random positions almost surely differ from every stored
        // position under exact f64 equality; verify against the actual set.
        let mut rng = rand::rngs::StdRng::seed_from_u64(5678);
        for _ in 0..200 {
            let probe = Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
            if inserted.iter().all(|n| n.position() != probe) {
                assert_eq!(tree.search(probe), Err(SearchError::NotFound));
            }
        }
    }
}
