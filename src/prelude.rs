//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use quadgrid::prelude::*;
//! ```

pub use crate::BoundingBox;
pub use crate::Node;
pub use crate::Point;
pub use crate::Quadrant;
pub use crate::Quadtree;
pub use crate::SearchError;
