// src/physics/bonding/scanner.rs

use super::cutoff::CutoffCache;
use crate::model::{Bond, Molecule};
use nalgebra::Vector3;
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Above this many distinct symbols the per-pair table switches to a map.
pub const MAX_DENSE_SPECIES: usize = 64;

#[derive(Clone, Debug)]
pub struct Site {
    pub species: usize,
    pub position: Vector3<f64>,
}

/// Species-pair memo in front of the `CutoffCache`, keyed by `(lo, hi)` ids.
enum PairCutoffs {
    /// Packed upper triangle, one cell per unordered pair
    Dense(Vec<OnceLock<f64>>),
    /// Only pairs actually tested, for inputs with many distinct labels
    Sparse(RwLock<HashMap<(usize, usize), f64>>),
}

impl PairCutoffs {
    fn new(n_species: usize) -> Self {
        if n_species <= MAX_DENSE_SPECIES {
            let cells = n_species * (n_species + 1) / 2;
            PairCutoffs::Dense((0..cells).map(|_| OnceLock::new()).collect())
        } else {
            PairCutoffs::Sparse(RwLock::new(HashMap::new()))
        }
    }

    fn get_or_init(&self, lo: usize, hi: usize, init: impl FnOnce() -> f64) -> f64 {
        match self {
            PairCutoffs::Dense(cells) => *cells[hi * (hi + 1) / 2 + lo].get_or_init(init),
            PairCutoffs::Sparse(map) => {
                if let Some(&cached) = map
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .get(&(lo, hi))
                {
                    return cached;
                }
                let computed = init();
                *map.write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .entry((lo, hi))
                    .or_insert(computed)
            }
        }
    }
}

/// Read-only snapshot of a molecule's atoms for one bond-finding run.
///
/// Element symbols are interned into species ids on construction. Each
/// species pair resolves its cutoff through the shared `CutoffCache`
/// once, then serves it by id without hashing strings.
pub struct Sites<'c> {
    symbols: Vec<String>,
    sites: Vec<Site>,
    pair_cutoffs: PairCutoffs,
    cache: &'c CutoffCache,
}

impl<'c> Sites<'c> {
    pub fn from_molecule<M: Molecule + ?Sized>(molecule: &M, cache: &'c CutoffCache) -> Self {
        let mut lookup: HashMap<&str, usize> = HashMap::new();
        let mut symbols: Vec<String> = Vec::new();
        let mut sites = Vec::with_capacity(molecule.atom_count());

        for i in 0..molecule.atom_count() {
            let element = molecule.element(i);
            let species = *lookup.entry(element).or_insert_with(|| {
                symbols.push(element.to_string());
                symbols.len() - 1
            });
            sites.push(Site {
                species,
                position: Vector3::from(molecule.position(i)),
            });
        }

        let pair_cutoffs = PairCutoffs::new(symbols.len());
        Self {
            symbols,
            sites,
            pair_cutoffs,
            cache,
        }
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn coord(&self, atom: usize, axis: usize) -> f64 {
        self.sites[atom].position[axis]
    }

    pub fn distance(&self, a: usize, b: usize) -> f64 {
        (self.sites[a].position - self.sites[b].position).norm()
    }

    fn cutoff(&self, a: usize, b: usize) -> f64 {
        let (sa, sb) = (self.sites[a].species, self.sites[b].species);
        let (lo, hi) = if sa <= sb { (sa, sb) } else { (sb, sa) };
        self.pair_cutoffs
            .get_or_init(lo, hi, || self.cache.cutoff(&self.symbols[lo], &self.symbols[hi]))
    }

    /// Pairwise bonding predicate on two atoms of the snapshot.
    pub fn bonded(&self, a: usize, b: usize) -> bool {
        self.distance(a, b) < self.cutoff(a, b)
    }
}

/// Tests every unordered pair in `atoms` once. Returns the number of pairs evaluated.
pub fn scan_single(sites: &Sites, atoms: &[usize], bonds: &mut Vec<Bond>) -> usize {
    let mut evaluated = 0;
    for (k, &i) in atoms.iter().enumerate() {
        for &j in &atoms[k + 1..] {
            evaluated += 1;
            if sites.bonded(i, j) {
                bonds.push(Bond::new(i, j));
            }
        }
    }
    evaluated
}

/// Tests every pair with one atom from each list. The lists must be disjoint.
pub fn scan_cross(
    sites: &Sites,
    left: &[usize],
    right: &[usize],
    bonds: &mut Vec<Bond>,
) -> usize {
    for &i in left {
        for &j in right {
            if sites.bonded(i, j) {
                bonds.push(Bond::new(i, j));
            }
        }
    }
    left.len() * right.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Atom, Structure, DEFAULT_RADIUS};

    fn methane() -> Structure {
        Structure::new(vec![
            Atom::new("C", [0.0, 0.0, 0.0]),
            Atom::new("H", [0.63, 0.63, 0.63]),
            Atom::new("H", [-0.63, -0.63, 0.63]),
            Atom::new("H", [-0.63, 0.63, -0.63]),
            Atom::new("H", [0.63, -0.63, -0.63]),
        ])
    }

    #[test]
    fn test_species_are_interned() {
        let cache = CutoffCache::new(1.1, DEFAULT_RADIUS);
        let mol = methane();
        let sites = Sites::from_molecule(&mol, &cache);
        assert_eq!(sites.len(), 5);
        assert_eq!(sites.symbols(), &["C".to_string(), "H".to_string()]);
    }

    #[test]
    fn test_single_scan_methane() {
        let cache = CutoffCache::new(1.1, DEFAULT_RADIUS);
        let mol = methane();
        let sites = Sites::from_molecule(&mol, &cache);

        let mut bonds = Vec::new();
        let evaluated = scan_single(&sites, &[0, 1, 2, 3, 4], &mut bonds);

        // C-H is 1.09 A, H-H is 1.78 A (cutoff 0.704)
        assert_eq!(evaluated, 10);
        bonds.sort();
        assert_eq!(
            bonds,
            vec![Bond::new(0, 1), Bond::new(0, 2), Bond::new(0, 3), Bond::new(0, 4)]
        );
    }

    #[test]
    fn test_cross_scan_only_crosses() {
        let cache = CutoffCache::new(1.1, DEFAULT_RADIUS);
        let mol = methane();
        let sites = Sites::from_molecule(&mol, &cache);

        let mut bonds = Vec::new();
        let evaluated = scan_cross(&sites, &[1, 2], &[0, 3], &mut bonds);

        assert_eq!(evaluated, 4);
        bonds.sort();
        assert_eq!(bonds, vec![Bond::new(0, 1), Bond::new(0, 2)]);
    }

    #[test]
    fn test_empty_and_single_inputs() {
        let cache = CutoffCache::new(1.1, DEFAULT_RADIUS);
        let mol = methane();
        let sites = Sites::from_molecule(&mol, &cache);

        let mut bonds = Vec::new();
        assert_eq!(scan_single(&sites, &[], &mut bonds), 0);
        assert_eq!(scan_single(&sites, &[3], &mut bonds), 0);
        assert_eq!(scan_cross(&sites, &[], &[0, 1], &mut bonds), 0);
        assert!(bonds.is_empty());
    }

    #[test]
    fn test_pair_cutoffs_go_through_cache() {
        let cache = CutoffCache::new(1.1, DEFAULT_RADIUS);
        let mol = methane();
        let sites = Sites::from_molecule(&mol, &cache);

        let mut bonds = Vec::new();
        scan_single(&sites, &[0, 1, 2, 3, 4], &mut bonds);

        // C-H and H-H only; C-C never occurs
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_many_species_use_sparse_table() {
        let cache = CutoffCache::new(1.1, DEFAULT_RADIUS);
        let n = 3 * MAX_DENSE_SPECIES;
        let atoms: Vec<Atom> = (0..n)
            .map(|k| Atom::new(&format!("X{}", k), [k as f64 * 1.5, 0.0, 0.0]))
            .collect();
        let mol = Structure::new(atoms);
        let sites = Sites::from_molecule(&mol, &cache);
        assert_eq!(sites.symbols().len(), n);
        assert!(matches!(sites.pair_cutoffs, PairCutoffs::Sparse(_)));

        // Unknown labels fall back to 1.5 A each: cutoff 3.3, so only neighbours bond
        let all: Vec<usize> = (0..n).collect();
        let mut bonds = Vec::new();
        scan_single(&sites, &all, &mut bonds);
        bonds.sort();
        let expected: Vec<Bond> = (1..n).map(|k| Bond::new(k - 1, k)).collect();
        assert_eq!(bonds, expected);

        // Repeat lookups are served from the sparse table
        assert!(sites.bonded(0, 1));
        assert!(!sites.bonded(0, 2));
    }

    #[test]
    fn test_dense_table_at_species_cap() {
        let cache = CutoffCache::new(1.1, DEFAULT_RADIUS);
        let atoms: Vec<Atom> = (0..MAX_DENSE_SPECIES)
            .map(|k| Atom::new(&format!("X{}", k), [k as f64 * 1.5, 0.0, 0.0]))
            .collect();
        let mol = Structure::new(atoms);
        let sites = Sites::from_molecule(&mol, &cache);
        assert!(matches!(sites.pair_cutoffs, PairCutoffs::Dense(_)));

        let last = MAX_DENSE_SPECIES - 1;
        assert!(sites.bonded(last - 1, last));
        assert!(sites.bonded(last, last - 1));
        assert!(!sites.bonded(0, last));
    }
}
