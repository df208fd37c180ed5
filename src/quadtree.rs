//! Recursive point quadtree over an axis-aligned bounding region.
//!
//! Each partition holds up to [`NODE_CAPACITY`] nodes directly. The first
//! insertion past capacity subdivides the partition into four quadrant
//! children split at the region's own midpoint; nodes already stored stay in
//! the parent's direct storage and only later insertions route into children.
//! Children are created lazily exactly once and never removed or resized.
//!
//! All operations are synchronous call-stack recursion bounded by tree depth.
//! Each subtree is exclusively owned by its parent; callers wanting to share
//! a tree across threads must synchronize externally.

use crate::bounding_box::{BoundingBox, Point};
use crate::error::SearchError;
use crate::node::Node;

/// Maximum number of nodes a leaf holds before it subdivides.
pub const NODE_CAPACITY: usize = 4;

/// Stable identifier for the four quadrant children of a partition.
///
/// The variant order is also the fixed probe order used when routing
/// insertions and searches into children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    /// North-west quadrant: `(top_left, mid)`.
    TopLeft,
    /// North-east quadrant: `((mid.x, y0), (x1, mid.y))`.
    TopRight,
    /// South-west quadrant: `((x0, mid.y), (mid.x, y1))`.
    BottomLeft,
    /// South-east quadrant: `(mid, bottom_right)`.
    BottomRight,
}

impl Quadrant {
    /// All quadrants in routing order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];
}

/// A partition of a 4-ary spatial tree indexing point-located nodes.
///
/// A partition is either a leaf (no children, at most [`NODE_CAPACITY`]
/// directly-held nodes) or internal (exactly four children). Every node
/// stored anywhere in a subtree lies within that subtree's region.
#[derive(Clone, Debug)]
pub struct Quadtree {
    bounds: BoundingBox,
    nodes: Vec<Node>,
    children: Option<Box<[Quadtree; 4]>>,
}

impl Quadtree {
    /// Creates an empty tree over the region spanned by the two corners.
    ///
    /// The caller chooses a root region large enough for all expected data;
    /// the region never grows.
    ///
    /// # Panics
    ///
    /// Panics if `top_left` does not precede `bottom_right` on both axes
    /// (see [`BoundingBox::new`]).
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        Self::with_bounds(BoundingBox::new(top_left, bottom_right))
    }

    /// Creates an empty tree over an existing bounding region.
    pub fn with_bounds(bounds: BoundingBox) -> Self {
        Quadtree { bounds, nodes: Vec::new(), children: None }
    }

    /// Returns the region this partition is responsible for.
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    /// Inserts a node, routing it down to the correct partition.
    ///
    /// Returns `false` if the node's position lies outside this partition's
    /// region (the tree is unchanged). Otherwise the node is committed into
    /// exactly one partition: directly here if this is a leaf below
    /// capacity, or into the first quadrant child that accepts it,
    /// subdividing first if needed. A node is never duplicated across
    /// children.
    pub fn insert(&mut self, node: Node) -> bool {
        if !self.bounds.contains_node(&node) {
            return false;
        }

        if self.children.is_none() {
            if self.nodes.len() < NODE_CAPACITY {
                self.nodes.push(node);
                return true;
            }
            self.subdivide();
        }

        // A false result here requires floating-point pathology on shared
        // child boundaries; the quadrants tile the region exactly.
        match self.children.as_mut() {
            Some(children) => children.iter_mut().any(|child| child.insert(node)),
            None => false,
        }
    }

    /// Searches for a node stored at exactly `position`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::OutOfRegion`] if `position` lies outside this
    /// partition's region, or [`SearchError::NotFound`] if the position is
    /// in-region but no node with an exactly equal position is stored.
    pub fn search(&self, position: Point) -> Result<&Node, SearchError> {
        if !self.bounds.contains_point(position) {
            return Err(SearchError::OutOfRegion);
        }

        if let Some(node) = self.nodes.iter().find(|n| n.position() == position) {
            return Ok(node);
        }

        match &self.children {
            None => Err(SearchError::NotFound),
            Some(children) => children
                .iter()
                .find(|child| child.bounding_box().contains_point(position))
                .map_or(Err(SearchError::NotFound), |child| child.search(position)),
        }
    }

    /// Returns the quadrant child, or `None` while this partition is a leaf.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Quadtree> {
        self.children.as_ref().map(|c| &c[quadrant as usize])
    }

    /// Returns true while this partition has not subdivided.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Returns the total number of nodes stored in this subtree.
    pub fn len(&self) -> usize {
        let child_len: usize = self
            .children
            .iter()
            .flat_map(|c| c.iter())
            .map(Quadtree::len)
            .sum();
        self.nodes.len() + child_len
    }

    /// Returns whether this subtree stores no nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Splits this partition into four quadrant children.
    ///
    /// The split point is the region's own midpoint, so the children tile
    /// the parent region exactly with no gaps or overlaps (shared boundary
    /// points are double-contained under the inclusive containment test).
    /// Nodes already held here are not redistributed.
    fn subdivide(&mut self) {
        debug_assert!(self.children.is_none(), "partition subdivides exactly once");

        let (top_left, bottom_right) = self.bounds.bounds();
        let mid = self.bounds.center();

        self.children = Some(Box::new([
            Quadtree::new(top_left, mid),
            Quadtree::new(Point::new(mid.x, top_left.y), Point::new(bottom_right.x, mid.y)),
            Quadtree::new(Point::new(top_left.x, mid.y), Point::new(mid.x, bottom_right.y)),
            Quadtree::new(mid, bottom_right),
        ]));
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .flat_map(|c| c.iter())
            .map(Quadtree::depth)
            .max()
            .unwrap_or(0)
    }

    #[cfg(test)]
    pub(crate) fn direct_len(&self) -> usize {
        self.nodes.len()
    }
}
