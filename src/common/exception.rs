use std::collections::TryReserveError;

use thiserror::Error;

/// Errors surfaced by table operations.
///
/// Key absence is never an error; lookups and removals report it through
/// `Option`. The only failure a caller can observe is the allocator refusing
/// to reserve a new bucket array while the table grows. The table remains
/// fully usable after that error and the next insert retries the growth.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("failed to allocate bucket array of {requested} buckets: {source}")]
    AllocationFailed {
        requested: usize,
        source: TryReserveError,
    },
}
