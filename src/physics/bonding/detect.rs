// src/physics/bonding/detect.rs

use super::cutoff::CutoffCache;
use super::error::BondError;
use super::margin::estimate_margin;
use super::options::BondingOptions;
use super::partition::{PartitionStats, Partitioner};
use super::scanner::{scan_single, Sites};
use crate::model::{Bond, Molecule};
use log::{debug, warn};

/// Infers covalent bonds from coordinates and appends them to `molecule`.
///
/// Options are checked before any work is done. Molecules with fewer than
/// two atoms are left untouched.
pub fn find_bonds<M: Molecule + ?Sized>(
    molecule: &mut M,
    options: &BondingOptions,
) -> Result<(), BondError> {
    find_bonds_with_stats(molecule, options).map(|_| ())
}

/// Same as [`find_bonds`], also reporting how the atom set was partitioned.
pub fn find_bonds_with_stats<M: Molecule + ?Sized>(
    molecule: &mut M,
    options: &BondingOptions,
) -> Result<PartitionStats, BondError> {
    options.validate()?;

    let n_atoms = molecule.atom_count();
    if n_atoms < 2 {
        debug!("{} atom(s); nothing to bond", n_atoms);
        return Ok(PartitionStats::default());
    }

    let sound_margin = estimate_margin(
        molecule.elements(),
        options.tolerance,
        options.default_radius,
    );
    let margin = match options.margin {
        Some(m) => {
            if m < sound_margin {
                warn!(
                    "Margin {:.3} is below the safe bound {:.3}; bonds across partitions may be lost",
                    m, sound_margin
                );
            }
            m
        }
        None => sound_margin,
    };

    // Scoped to this call so a different tolerance never sees stale cutoffs
    let cache = CutoffCache::new(options.tolerance, options.default_radius);

    let (bonds, stats) = {
        let sites = Sites::from_molecule(&*molecule, &cache);
        let mut atoms: Vec<usize> = (0..n_atoms).collect();
        Partitioner::new(&sites, margin, options.effective_min_atoms(), options.parallel)
            .run(&mut atoms)
    };

    for bond in &bonds {
        molecule.add_bond(bond.a, bond.b);
    }

    debug!(
        "Found {} bonds among {} atoms (margin {:.3}, {} leaves, {} splits, depth {}, {} pairs tested, {} cutoffs)",
        bonds.len(),
        n_atoms,
        margin,
        stats.leaves,
        stats.splits,
        stats.max_depth,
        stats.pairs_evaluated,
        cache.len()
    );

    Ok(stats)
}

/// All-pairs baseline. Returns sorted bonds without touching the molecule.
pub fn brute_force_bonds<M: Molecule + ?Sized>(
    molecule: &M,
    options: &BondingOptions,
) -> Result<Vec<Bond>, BondError> {
    options.validate()?;

    let cache = CutoffCache::new(options.tolerance, options.default_radius);
    let sites = Sites::from_molecule(molecule, &cache);
    let atoms: Vec<usize> = (0..sites.len()).collect();

    let mut bonds = Vec::new();
    scan_single(&sites, &atoms, &mut bonds);
    bonds.sort();
    Ok(bonds)
}
