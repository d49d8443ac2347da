//! Candidate generation for exhaustive searches
//!
//! Streams letter multisets lazily; nothing here touches the dictionary.

mod combinations;
mod wheel;

pub use combinations::{CombinationsWithRepetition, combinations_with_repetition_count};
pub use wheel::{OUTER_LETTERS, WHEEL_SIZE, Wheel, WheelError};
