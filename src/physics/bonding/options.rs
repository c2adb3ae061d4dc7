// src/physics/bonding/options.rs

use super::error::BondError;
use crate::model::DEFAULT_RADIUS;
use serde::{Deserialize, Serialize};

/// Partitions smaller than this never split, whatever `min_atoms` says.
pub const MIN_PARTITION: usize = 2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BondingOptions {
    /// Multiplies the sum of covalent radii (typical: 1.1-1.3)
    pub tolerance: f64,

    /// Stitching margin in Angstroms. `None` derives it from the composition.
    pub margin: Option<f64>,

    /// Partitions below this size are scanned pair by pair
    pub min_atoms: usize,

    /// Radius for elements missing from the table
    pub default_radius: f64,

    /// Process sibling partitions on the rayon pool
    pub parallel: bool,
}

impl Default for BondingOptions {
    fn default() -> Self {
        Self {
            tolerance: 1.1,
            margin: None,
            min_atoms: 20,
            default_radius: DEFAULT_RADIUS,
            parallel: false,
        }
    }
}

impl BondingOptions {
    /// Defaults with sibling partitions run in parallel
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), BondError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(BondError::InvalidTolerance(self.tolerance));
        }
        if self.min_atoms == 0 {
            return Err(BondError::InvalidMinAtoms(self.min_atoms));
        }
        if let Some(margin) = self.margin {
            if !margin.is_finite() || margin < 0.0 {
                return Err(BondError::InvalidMargin(margin));
            }
        }
        if !self.default_radius.is_finite() || self.default_radius <= 0.0 {
            return Err(BondError::InvalidDefaultRadius(self.default_radius));
        }
        Ok(())
    }

    pub fn effective_min_atoms(&self) -> usize {
        self.min_atoms.max(MIN_PARTITION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = BondingOptions::default();
        assert_eq!(opts.tolerance, 1.1);
        assert_eq!(opts.min_atoms, 20);
        assert_eq!(opts.margin, None);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad_tol = BondingOptions {
            tolerance: 0.0,
            ..Default::default()
        };
        assert_eq!(bad_tol.validate(), Err(BondError::InvalidTolerance(0.0)));

        let nan_tol = BondingOptions {
            tolerance: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(nan_tol.validate(), Err(BondError::InvalidTolerance(_))));

        let bad_min = BondingOptions {
            min_atoms: 0,
            ..Default::default()
        };
        assert_eq!(bad_min.validate(), Err(BondError::InvalidMinAtoms(0)));

        let bad_margin = BondingOptions {
            margin: Some(-0.5),
            ..Default::default()
        };
        assert_eq!(bad_margin.validate(), Err(BondError::InvalidMargin(-0.5)));

        let bad_radius = BondingOptions {
            default_radius: -1.0,
            ..Default::default()
        };
        assert_eq!(
            bad_radius.validate(),
            Err(BondError::InvalidDefaultRadius(-1.0))
        );
    }

    #[test]
    fn test_zero_margin_is_allowed() {
        let opts = BondingOptions {
            margin: Some(0.0),
            ..Default::default()
        };
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_min_atoms_floor() {
        let opts = BondingOptions {
            min_atoms: 1,
            ..Default::default()
        };
        assert_eq!(opts.effective_min_atoms(), 2);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let opts: BondingOptions = serde_json::from_str(r#"{ "tolerance": 1.25 }"#).unwrap();
        assert_eq!(opts.tolerance, 1.25);
        assert_eq!(opts.min_atoms, 20);
        assert!(!opts.parallel);
    }
}
