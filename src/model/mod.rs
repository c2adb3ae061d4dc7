//src/model/mod.rs
pub mod elements;
pub mod structure;

// Re-exports for cleaner imports
pub use elements::{covalent_radius, radius_or_default, DEFAULT_RADIUS};
pub use structure::{Atom, Bond, Molecule, Structure};
