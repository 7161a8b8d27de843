//! Concrete id set representations and merge kernels

pub mod immutable;
pub mod merge;
pub mod mutable;
pub mod overlap;
