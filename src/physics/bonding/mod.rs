// src/physics/bonding/mod.rs

pub mod cutoff;
pub mod detect;
pub mod error;
pub mod margin;
pub mod options;
pub mod partition;
pub mod scanner;

// Re-export commonly used items
pub use cutoff::{are_bonded, CutoffCache, ElementPair};
pub use detect::{brute_force_bonds, find_bonds, find_bonds_with_stats};
pub use error::BondError;
pub use margin::estimate_margin;
pub use options::BondingOptions;
pub use partition::{PartitionStats, Partitioner, PARALLEL_THRESHOLD};
pub use scanner::{scan_cross, scan_single, Sites};
