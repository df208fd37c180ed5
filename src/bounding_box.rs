//! Axis-aligned bounding region geometry.
//!
//! A [`BoundingBox`] is described by its top-left and bottom-right corner
//! [`Point`]s and answers inclusive containment queries. All operations are
//! total over well-formed boxes; malformed corner pairs are rejected at
//! construction.

use crate::node::Node;

/// Immutable 2D coordinate pair.
///
/// Equality is exact floating-point comparison of both components; there is
/// no epsilon tolerance. Two points compare equal only if both coordinates
/// are bit-for-bit comparable under `f64::eq`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned rectangle defined by a top-left and a bottom-right corner.
///
/// Invariant: `top_left.x <= bottom_right.x` and `top_left.y <= bottom_right.y`,
/// checked at construction. Containment is inclusive on all four edges, so a
/// point lying exactly on an edge or corner is inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    top_left: Point,
    bottom_right: Point,
}

impl BoundingBox {
    /// Creates a bounding box from its top-left and bottom-right corners.
    ///
    /// # Panics
    ///
    /// Panics if `top_left` does not precede `bottom_right` on both axes.
    /// A malformed region is a programmer error and is rejected here rather
    /// than allowed to produce silently incorrect containment results.
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        assert!(
            top_left.x <= bottom_right.x && top_left.y <= bottom_right.y,
            "malformed region: top-left corner must precede bottom-right on both axes"
        );
        BoundingBox { top_left, bottom_right }
    }

    /// Returns true if `point` lies within the box, inclusive on all four edges.
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.top_left.x
            && point.x <= self.bottom_right.x
            && point.y >= self.top_left.y
            && point.y <= self.bottom_right.y
    }

    /// Returns true if `node`'s position lies within the box.
    pub fn contains_node(&self, node: &Node) -> bool {
        self.contains_point(node.position())
    }

    /// Returns true if this box contains *both* corner points of `other`.
    ///
    /// This is a conservative containment-style check, not a symmetric
    /// rectangle-overlap test: `a.encloses(&b)` can be false while `b`
    /// partially overlaps `a`. Callers needing true geometric intersection
    /// must not rely on this method.
    pub fn encloses(&self, other: &BoundingBox) -> bool {
        let (top_left, bottom_right) = other.bounds();
        self.contains_point(top_left) && self.contains_point(bottom_right)
    }

    /// Returns the `(top_left, bottom_right)` corner pair.
    pub fn bounds(&self) -> (Point, Point) {
        (self.top_left, self.bottom_right)
    }

    /// Returns the top-left corner.
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    /// Returns the bottom-right corner.
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    /// Returns the true midpoint of this box's own corners.
    ///
    /// Subdivision must split at this point. Halving absolute coordinates
    /// instead only coincidentally agrees for regions anchored at the origin
    /// and corrupts off-center regions.
    pub fn center(&self) -> Point {
        Point::new(
            (self.top_left.x + self.bottom_right.x) / 2.0,
            (self.top_left.y + self.bottom_right.y) / 2.0,
        )
    }
}
