//! Parallel exhaustive search
//!
//! Drives millions of independent trie searches across a worker pool and reduces
//! them to a single best candidate.

mod best;
mod config;
mod pool;
mod progress;

pub use best::Best;
pub use config::{SearchConfig, SearchError};
pub use pool::{PROGRESS_BATCH, find_best};
pub use progress::{ProgressSink, Silent, Tally, progress_bar};
