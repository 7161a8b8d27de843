pub mod finder;

pub use finder::{CandidateSetFinder, Scored};
