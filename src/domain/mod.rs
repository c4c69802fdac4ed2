//! Review-domain types: verdicts, homework records and loop state.

mod homework;
mod poll_state;
mod verdict;

pub use homework::Homework;
pub use poll_state::{PollState, LOOKBACK_SECS};
pub use verdict::Verdict;
