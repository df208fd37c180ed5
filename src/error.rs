//! Typed failure reasons for tree queries.

use thiserror::Error;

/// Why a [`search`](crate::Quadtree::search) produced no node.
///
/// Both variants are recoverable and surfaced synchronously to the caller;
/// no operation is retried internally. The same out-of-region condition that
/// makes `search` fail makes [`insert`](crate::Quadtree::insert) return
/// `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The queried position lies outside the bounding region the operation
    /// was invoked on. The caller may retry against a different tree.
    #[error("position lies outside the indexed region")]
    OutOfRegion,
    /// The position is inside the region but no node is stored at exactly
    /// that position.
    #[error("no node stored at the queried position")]
    NotFound,
}
