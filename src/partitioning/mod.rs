//! Spatial partitioning tools.

pub use self::sweep_and_prune::{SapDataGenerator, SweepAndPrune};

mod sweep_and_prune;
