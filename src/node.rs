//! Point-located occupancy datum stored by the quadtree.

use crate::bounding_box::Point;

/// Occupancy-confidence value meaning "unknown".
pub const CONFIDENCE_UNKNOWN: i8 = -1;

/// A point-located datum: position, occupancy confidence, and a visited flag.
///
/// Immutable once constructed; the tree exposes no in-place mutation API.
/// The confidence is a percent likelihood in `0..=100` that an obstacle
/// occupies the position, or [`CONFIDENCE_UNKNOWN`] (`-1`) when no
/// observation exists. The visited flag assists path-planning callers that
/// need irrevocability and is set only at construction time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    position: Point,
    occupied_confidence: i8,
    visited: bool,
}

impl Node {
    /// Creates an unvisited node at `position` with the given occupancy
    /// confidence (`-1` for unknown, otherwise percent in `0..=100`).
    pub fn new(position: Point, occupied_confidence: i8) -> Self {
        Self::with_visited(position, occupied_confidence, false)
    }

    /// Creates a node with an explicit visited flag.
    pub fn with_visited(position: Point, occupied_confidence: i8, visited: bool) -> Self {
        debug_assert!(
            (CONFIDENCE_UNKNOWN..=100).contains(&occupied_confidence),
            "occupancy confidence must be -1 (unknown) or a percent in 0..=100"
        );
        Node { position, occupied_confidence, visited }
    }

    /// Returns the node's position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the percent confidence that an obstacle occupies this
    /// position, or `-1` if unknown.
    pub fn occupied_confidence(&self) -> i8 {
        self.occupied_confidence
    }

    /// Returns whether this node has been visited before.
    pub fn is_visited(&self) -> bool {
        self.visited
    }
}
