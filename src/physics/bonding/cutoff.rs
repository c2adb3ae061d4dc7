// src/physics/bonding/cutoff.rs

use crate::model::radius_or_default;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Unordered pair of element symbols, stored in sorted order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementPair(String, String);

impl ElementPair {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            ElementPair(a.to_string(), b.to_string())
        } else {
            ElementPair(b.to_string(), a.to_string())
        }
    }

    pub fn first(&self) -> &str {
        &self.0
    }

    pub fn second(&self) -> &str {
        &self.1
    }
}

/// Memoized bonding cutoffs for one bond-finding run.
///
/// **Formula**: cutoff = (r_a + r_b) * tolerance
///
/// Entries are created on first use and never recomputed, so every lookup
/// of a pair returns the same bits for the lifetime of the cache. The map
/// sits behind a lock so parallel partitions can share it.
#[derive(Debug)]
pub struct CutoffCache {
    tolerance: f64,
    default_radius: f64,
    table: RwLock<HashMap<ElementPair, f64>>,
}

impl CutoffCache {
    pub fn new(tolerance: f64, default_radius: f64) -> Self {
        Self {
            tolerance,
            default_radius,
            table: RwLock::new(HashMap::new()),
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn cutoff(&self, a: &str, b: &str) -> f64 {
        let key = ElementPair::new(a, b);

        if let Some(&cached) = self
            .table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return cached;
        }

        let computed = self.compute(&key);
        // Another thread may have won the race; keep whichever landed first.
        *self
            .table
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(computed)
    }

    /// Number of distinct pairs computed so far
    pub fn len(&self) -> usize {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn compute(&self, key: &ElementPair) -> f64 {
        let r_a = radius_or_default(key.first(), self.default_radius);
        let r_b = radius_or_default(key.second(), self.default_radius);
        (r_a + r_b) * self.tolerance
    }
}

/// True when `distance` is below the cutoff for the element pair.
///
/// There is no lower bound: coincident atoms count as bonded.
pub fn are_bonded(a: &str, b: &str, distance: f64, cache: &CutoffCache) -> bool {
    distance < cache.cutoff(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_RADIUS;

    fn cache(tolerance: f64) -> CutoffCache {
        CutoffCache::new(tolerance, DEFAULT_RADIUS)
    }

    #[test]
    fn test_carbon_carbon() {
        let c = cache(1.1);
        assert!((c.cutoff("C", "C") - 1.694).abs() < 1e-12);
        assert!(are_bonded("C", "C", 1.5, &c));
        assert!(!are_bonded("C", "C", 1.8, &c));
        // Strict comparison: exactly at the cutoff is not a bond
        assert!(!are_bonded("C", "C", c.cutoff("C", "C"), &c));
    }

    #[test]
    fn test_unknown_element_uses_default() {
        let c = cache(1.1);
        assert!((c.cutoff("H", "Xx") - 2.002).abs() < 1e-12);
    }

    #[test]
    fn test_pair_key_is_order_independent() {
        assert_eq!(ElementPair::new("H", "C"), ElementPair::new("C", "H"));

        let c = cache(1.1);
        let ch = c.cutoff("C", "H");
        let hc = c.cutoff("H", "C");
        assert_eq!(ch.to_bits(), hc.to_bits());
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_predicate_symmetry() {
        let c = cache(1.2);
        let symbols = ["H", "C", "N", "O", "Cl", "Fe", "Xx"];
        for a in symbols {
            for b in symbols {
                for d in [0.0, 0.9, 1.4, 1.9, 2.6, 3.5] {
                    assert_eq!(are_bonded(a, b, d, &c), are_bonded(b, a, d, &c));
                }
            }
        }
    }

    #[test]
    fn test_repeated_lookups_are_identical() {
        let c = cache(1.15);
        let first = c.cutoff("N", "O");
        for _ in 0..10 {
            assert_eq!(c.cutoff("O", "N").to_bits(), first.to_bits());
        }
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_zero_distance_is_bonded() {
        let c = cache(1.1);
        assert!(are_bonded("O", "O", 0.0, &c));
    }

    #[test]
    fn test_caches_do_not_share_tolerance() {
        let tight = cache(1.0);
        let loose = cache(1.3);
        assert!(tight.cutoff("C", "C") < loose.cutoff("C", "C"));
        assert!(!are_bonded("C", "C", 1.6, &tight));
        assert!(are_bonded("C", "C", 1.6, &loose));
    }
}
