//! # quadgrid - Point Quadtree Spatial Index
//!
//! A recursive point quadtree for 2D occupancy data: each stored node
//! carries a position, an occupancy-confidence score, and a visited flag,
//! and the tree supports insertion and exact-point lookup inside an
//! axis-aligned bounding region.
//!
//! ## Features
//!
//! - **Capacity-Triggered Subdivision**: leaves hold up to 4 nodes, then
//!   split into four quadrant children at the region's true midpoint
//! - **Containment-Based Routing**: insert and search descend by inclusive
//!   point-in-region tests, in a fixed quadrant order
//! - **Typed Lookup Failures**: search distinguishes "outside the indexed
//!   region" from "in-region but not stored"
//! - **Exclusive Ownership**: each subtree is owned by its parent; no
//!   shared state, no internal locking
//!
//! ## Quick Start
//!
//! ```rust
//! use quadgrid::prelude::*;
//!
//! // Index the region from (0, 0) down to (100, 100).
//! let mut tree = Quadtree::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
//!
//! // Insert obstacle observations (position, percent confidence).
//! assert!(tree.insert(Node::new(Point::new(3.0, 3.0), 87)));
//! assert!(tree.insert(Node::new(Point::new(60.0, 40.0), -1))); // unknown
//!
//! // Exact-point lookup.
//! let node = tree.search(Point::new(3.0, 3.0)).unwrap();
//! assert_eq!(node.occupied_confidence(), 87);
//!
//! // Lookup failures carry a typed reason.
//! assert_eq!(tree.search(Point::new(9.0, 9.0)), Err(SearchError::NotFound));
//! assert_eq!(tree.search(Point::new(150.0, 150.0)), Err(SearchError::OutOfRegion));
//!
//! // Out-of-region insertions are rejected, not grown into.
//! assert!(!tree.insert(Node::new(Point::new(-1.0, 0.0), 50)));
//! ```
//!
//! ## How It Works
//!
//! Every partition owns one bounding region and up to 4 directly-held
//! nodes. The insertion that would overflow a leaf first subdivides it into
//! four children tiling the region at its midpoint; nodes already stored
//! stay where they are, and only later insertions route into children.
//! Search walks the same containment tests down to the one leaf whose
//! region holds the queried position.
//!
//! The tree is a building block for spatial reasoning (occupancy grids,
//! path-planning state): it performs no I/O and defines only exact-point
//! search. Range queries, deletion, and rebalancing are out of scope.

pub mod bounding_box;
pub mod error;
pub mod node;
pub mod prelude;
pub mod quadtree;

pub use bounding_box::{BoundingBox, Point};
pub use error::SearchError;
pub use node::{CONFIDENCE_UNKNOWN, Node};
pub use quadtree::{NODE_CAPACITY, Quadrant, Quadtree};

mod random_tests;
