// src/physics/bonding/partition.rs

use super::options::MIN_PARTITION;
use super::scanner::{scan_cross, scan_single, Sites};
use crate::model::Bond;
use log::trace;

/// Partitions at least this large fork onto the rayon pool in parallel mode.
pub const PARALLEL_THRESHOLD: usize = 512;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartitionStats {
    /// Partitions solved by the pair scanner
    pub leaves: usize,
    /// Partitions split in two and stitched
    pub splits: usize,
    /// Deepest recursion level reached (root = 0)
    pub max_depth: usize,
    /// Pairs handed to the bonding predicate
    pub pairs_evaluated: usize,
}

impl PartitionStats {
    fn leaf(depth: usize, pairs_evaluated: usize) -> Self {
        Self {
            leaves: 1,
            splits: 0,
            max_depth: depth,
            pairs_evaluated,
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            leaves: self.leaves + other.leaves,
            splits: self.splits + other.splits,
            max_depth: self.max_depth.max(other.max_depth),
            pairs_evaluated: self.pairs_evaluated + other.pairs_evaluated,
        }
    }
}

/// Recursive divide-and-conquer bond search.
///
/// # Algorithm
/// 1. Partitions below `min_atoms` go straight to the pair scanner
/// 2. Otherwise split at the mean coordinate along the current axis
/// 3. Recurse into both halves with the next axis
/// 4. Cross-scan the atoms lying within `margin` of the split plane
///
/// Only step 4 finds bonds crossing a split, so `margin` must be at least
/// the largest cutoff of any element pair present.
pub struct Partitioner<'s, 'c> {
    sites: &'s Sites<'c>,
    margin: f64,
    min_atoms: usize,
    parallel: bool,
}

impl<'s, 'c> Partitioner<'s, 'c> {
    pub fn new(sites: &'s Sites<'c>, margin: f64, min_atoms: usize, parallel: bool) -> Self {
        Self {
            sites,
            margin,
            min_atoms: min_atoms.max(MIN_PARTITION),
            parallel,
        }
    }

    /// Runs the search over `atoms`, reordering the slice in place.
    ///
    /// Bonds come back left subtree first, then right subtree, then the
    /// stitch, in both sequential and parallel mode.
    pub fn run(&self, atoms: &mut [usize]) -> (Vec<Bond>, PartitionStats) {
        let mut bonds = Vec::new();
        let stats = self.partition(atoms, 0, 0, &mut bonds);
        (bonds, stats)
    }

    fn partition(
        &self,
        atoms: &mut [usize],
        axis: usize,
        depth: usize,
        bonds: &mut Vec<Bond>,
    ) -> PartitionStats {
        if atoms.len() < self.min_atoms {
            return PartitionStats::leaf(depth, scan_single(self.sites, atoms, bonds));
        }

        let center = self.mean(atoms, axis);
        let split = self.split_at(atoms, axis, center);

        // Coincident (or NaN) coordinates leave one side empty
        if split == 0 || split == atoms.len() {
            trace!(
                "Partition of {} atoms cannot split on axis {}; scanning directly",
                atoms.len(),
                axis
            );
            return PartitionStats::leaf(depth, scan_single(self.sites, atoms, bonds));
        }

        let next_axis = (axis + 1) % 3;
        let (left, right) = atoms.split_at_mut(split);

        let children = if self.parallel && left.len() + right.len() >= PARALLEL_THRESHOLD {
            let ((left_bonds, left_stats), (right_bonds, right_stats)) = rayon::join(
                || self.fork(left, next_axis, depth + 1),
                || self.fork(right, next_axis, depth + 1),
            );
            bonds.extend(left_bonds);
            bonds.extend(right_bonds);
            left_stats.merge(right_stats)
        } else {
            let left_stats = self.partition(left, next_axis, depth + 1, bonds);
            let right_stats = self.partition(right, next_axis, depth + 1, bonds);
            left_stats.merge(right_stats)
        };

        let stitched = self.stitch(left, right, axis, center, bonds);

        PartitionStats {
            splits: children.splits + 1,
            pairs_evaluated: children.pairs_evaluated + stitched,
            ..children
        }
    }

    fn fork(&self, atoms: &mut [usize], axis: usize, depth: usize) -> (Vec<Bond>, PartitionStats) {
        let mut bonds = Vec::new();
        let stats = self.partition(atoms, axis, depth, &mut bonds);
        (bonds, stats)
    }

    fn mean(&self, atoms: &[usize], axis: usize) -> f64 {
        let sum: f64 = atoms.iter().map(|&i| self.sites.coord(i, axis)).sum();
        sum / atoms.len() as f64
    }

    /// Moves atoms below `center` to the front and returns how many there are.
    fn split_at(&self, atoms: &mut [usize], axis: usize, center: f64) -> usize {
        let mut split = 0;
        for k in 0..atoms.len() {
            if self.sites.coord(atoms[k], axis) < center {
                atoms.swap(k, split);
                split += 1;
            }
        }
        split
    }

    fn stitch(
        &self,
        left: &[usize],
        right: &[usize],
        axis: usize,
        center: f64,
        bonds: &mut Vec<Bond>,
    ) -> usize {
        let low = center - self.margin;
        let high = center + self.margin;

        let left_edge: Vec<usize> = left
            .iter()
            .copied()
            .filter(|&i| self.sites.coord(i, axis) > low)
            .collect();
        let right_edge: Vec<usize> = right
            .iter()
            .copied()
            .filter(|&i| self.sites.coord(i, axis) < high)
            .collect();

        trace!(
            "Stitching axis {} at {:.3}: {} x {} edge atoms",
            axis,
            center,
            left_edge.len(),
            right_edge.len()
        );

        scan_cross(self.sites, &left_edge, &right_edge, bonds)
    }
}
