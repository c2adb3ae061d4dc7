//! Covalent bond perception from 3D coordinates.
//!
//! Bonds are inferred from element covalent radii and interatomic
//! distances. Large inputs are split recursively along alternating axes
//! so that only nearby atoms are compared.
//!
//! ```
//! use covbond::model::{Atom, Structure};
//! use covbond::physics::bonding::{find_bonds, BondingOptions};
//!
//! let mut mol = Structure::new(vec![
//!     Atom::new("C", [0.0, 0.0, 0.0]),
//!     Atom::new("O", [1.2, 0.0, 0.0]),
//! ]);
//! find_bonds(&mut mol, &BondingOptions::default()).unwrap();
//! assert_eq!(mol.bonds.len(), 1);
//! ```

pub mod config;
pub mod io;
pub mod model;
pub mod physics;
pub mod utils;

pub use model::{Atom, Bond, Molecule, Structure};
pub use physics::bonding::{find_bonds, BondError, BondingOptions};
