// src/model/structure.rs

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// What the bond finder needs from a molecule.
///
/// Atoms are addressed by their index in the ordered atom list.
pub trait Molecule {
    fn atom_count(&self) -> usize;
    fn element(&self, atom: usize) -> &str;
    fn position(&self, atom: usize) -> [f64; 3];
    fn bond_count(&self, atom: usize) -> usize;
    fn add_bond(&mut self, a: usize, b: usize);

    /// Distinct element symbols present.
    fn elements(&self) -> BTreeSet<&str> {
        (0..self.atom_count()).map(|i| self.element(i)).collect()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Atom {
    pub element: String,
    pub position: [f64; 3],
    // Derived from the bond list, so not persisted.
    #[serde(skip)]
    pub bonds: usize,
}

impl Atom {
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            element: element.into(),
            position,
            bonds: 0,
        }
    }
}

/// Unordered connectivity edge. Always stored with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Bond {
    pub a: usize,
    pub b: usize,
}

impl Bond {
    pub fn new(i: usize, j: usize) -> Self {
        if i <= j {
            Self { a: i, b: j }
        } else {
            Self { a: j, b: i }
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Structure {
    pub atoms: Vec<Atom>,
    #[serde(default)]
    pub bonds: Vec<Bond>,
    #[serde(skip)]
    pub formula: String,
}

impl Structure {
    pub fn new(atoms: Vec<Atom>) -> Self {
        let mut s = Self {
            atoms,
            bonds: Vec::new(),
            formula: String::new(),
        };
        s.formula = s.formula();
        s
    }

    /// Composition string with sorted element counts, e.g. "C2 H6 O1".
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for atom in &self.atoms {
            *counts.entry(atom.element.as_str()).or_insert(0) += 1;
        }

        counts
            .iter()
            .map(|(el, count)| format!("{}{}", el, count))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Bonds normalised and sorted, for comparisons.
    pub fn sorted_bonds(&self) -> Vec<Bond> {
        let mut bonds = self.bonds.clone();
        bonds.sort();
        bonds
    }
}

impl Molecule for Structure {
    fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    fn element(&self, atom: usize) -> &str {
        &self.atoms[atom].element
    }

    fn position(&self, atom: usize) -> [f64; 3] {
        self.atoms[atom].position
    }

    fn bond_count(&self, atom: usize) -> usize {
        self.atoms[atom].bonds
    }

    fn add_bond(&mut self, a: usize, b: usize) {
        self.bonds.push(Bond::new(a, b));
        self.atoms[a].bonds += 1;
        self.atoms[b].bonds += 1;
    }
}
