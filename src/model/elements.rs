// src/model/elements.rs

/// Radius used for any symbol missing from the table (Angstroms).
pub const DEFAULT_RADIUS: f64 = 1.5;

/// Covalent radius in Angstroms for an element symbol.
///
/// Symbols are matched exactly: "Cl" is chlorine, "CL" is unknown.
/// Returns `None` for anything not in the table.
pub fn covalent_radius(element: &str) -> Option<f64> {
    let r = match element {
        // --- Period 1 ---
        "H" => 0.32,
        "He" => 0.93,

        // --- Period 2 ---
        "Li" => 1.23, "Be" => 0.90, "B" => 0.82, "C" => 0.77,
        "N" => 0.75, "O" => 0.73, "F" => 0.71, "Ne" => 0.71,

        // --- Period 3 ---
        "Na" => 1.54, "Mg" => 1.36, "Al" => 1.18, "Si" => 1.11,
        "P" => 1.06, "S" => 1.02, "Cl" => 0.99, "Ar" => 0.98,

        // --- Period 4 ---
        "K" => 2.03, "Ca" => 1.74, "Sc" => 1.44, "Ti" => 1.32, "V" => 1.22,
        "Cr" => 1.18, "Mn" => 1.17, "Fe" => 1.17, "Co" => 1.16, "Ni" => 1.15,
        "Cu" => 1.17, "Zn" => 1.25, "Ga" => 1.26, "Ge" => 1.22, "As" => 1.20,
        "Se" => 1.16, "Br" => 1.14, "Kr" => 1.12,

        // --- Period 5 (Selected) ---
        "Rb" => 2.16, "Sr" => 1.91, "Zr" => 1.45, "Mo" => 1.30, "Ru" => 1.25,
        "Rh" => 1.25, "Pd" => 1.28, "Ag" => 1.34, "Cd" => 1.48, "In" => 1.44,
        "Sn" => 1.41, "Sb" => 1.40, "Te" => 1.36, "I" => 1.33, "Xe" => 1.31,

        // --- Period 6 (Selected) ---
        "Cs" => 2.35, "Ba" => 1.98, "W" => 1.30, "Pt" => 1.30, "Au" => 1.34,
        "Hg" => 1.49, "Pb" => 1.47, "Bi" => 1.46,

        _ => return None,
    };
    Some(r)
}

/// Table lookup with an explicit fallback for unknown symbols.
pub fn radius_or_default(element: &str, default_radius: f64) -> f64 {
    covalent_radius(element).unwrap_or(default_radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_radii() {
        assert_eq!(covalent_radius("C"), Some(0.77));
        assert_eq!(covalent_radius("H"), Some(0.32));
        assert_eq!(covalent_radius("Cl"), Some(0.99));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(covalent_radius("CL"), None);
        assert_eq!(covalent_radius("c"), None);
    }

    #[test]
    fn test_unknown_falls_back() {
        assert_eq!(radius_or_default("Xx", DEFAULT_RADIUS), 1.5);
        assert_eq!(radius_or_default("O", DEFAULT_RADIUS), 0.73);
    }
}
