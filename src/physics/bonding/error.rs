// src/physics/bonding/error.rs

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum BondError {
    InvalidTolerance(f64),
    InvalidMinAtoms(usize),
    InvalidMargin(f64),
    InvalidDefaultRadius(f64),
}

impl fmt::Display for BondError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BondError::InvalidTolerance(t) => {
                write!(f, "Tolerance must be a positive number, got {}", t)
            }
            BondError::InvalidMinAtoms(n) => {
                write!(f, "Minimum partition size must be at least 1, got {}", n)
            }
            BondError::InvalidMargin(m) => {
                write!(f, "Margin must be a non-negative number, got {}", m)
            }
            BondError::InvalidDefaultRadius(r) => {
                write!(f, "Default radius must be a positive number, got {}", r)
            }
        }
    }
}

impl std::error::Error for BondError {}
