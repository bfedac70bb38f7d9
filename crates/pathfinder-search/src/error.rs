//! Search error type.

use pathfinder_grid::RetraceError;
use thiserror::Error;

/// A search that could not complete.
///
/// Running out of candidates is not an error; see
/// [`PathResult::NotFound`](crate::PathResult::NotFound).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("search bookkeeping is inconsistent: {0}")]
    Inconsistency(#[from] RetraceError),
}
