pub mod max_drop;
pub mod threshold;

pub use max_drop::MaxDropFinder;
pub use threshold::ThresholdFinder;
