// src/utils/report.rs

use crate::model::structure::Structure;
use std::collections::BTreeMap;

/// Text summary printed after bonds are assigned
pub fn bond_summary(structure: &Structure, filename: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("File: {}\n", filename));
    out.push_str(&format!("Formula: {}\n", structure.formula()));
    out.push_str(&format!(
        "Atoms: {}   Bonds: {}\n",
        structure.atoms.len(),
        structure.bonds.len()
    ));

    // Bond counts per element pair, e.g. "C-H: 6"
    let mut pairs: BTreeMap<(String, String), usize> = BTreeMap::new();
    for bond in &structure.bonds {
        let ea = &structure.atoms[bond.a].element;
        let eb = &structure.atoms[bond.b].element;
        let key = if ea <= eb {
            (ea.clone(), eb.clone())
        } else {
            (eb.clone(), ea.clone())
        };
        *pairs.entry(key).or_insert(0) += 1;
    }

    if !pairs.is_empty() {
        out.push_str("--------------------------------------------------\n");
        for ((a, b), count) in &pairs {
            out.push_str(&format!("{:<8} {}\n", format!("{}-{}:", a, b), count));
        }
    }

    out.push_str("--------------------------------------------------\n");
    out.push_str(&format!(
        "{:<8} {:<8} {:<10} {:<10} {:<10} {:<6}\n",
        "Index", "Element", "X", "Y", "Z", "Bonds"
    ));
    out.push_str("--------------------------------------------------\n");

    for (i, atom) in structure.atoms.iter().take(20).enumerate() {
        out.push_str(&format!(
            "{:<8} {:<8} {:<10.4} {:<10.4} {:<10.4} {:<6}\n",
            i, atom.element, atom.position[0], atom.position[1], atom.position[2], atom.bonds
        ));
    }

    if structure.atoms.len() > 20 {
        out.push_str(&format!("... and {} more atoms.\n", structure.atoms.len() - 20));
    }

    out
}
