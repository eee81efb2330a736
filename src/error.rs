use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    /// The scratch buffer for the merge phase could not be allocated.
    #[error("failed to allocate scratch buffer for {len} elements")]
    ScratchAlloc {
        len: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("run size must be at least 1")]
    ZeroRun,
}
