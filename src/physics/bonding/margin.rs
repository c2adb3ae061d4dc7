// src/physics/bonding/margin.rs

use crate::model::radius_or_default;

/// Stitching margin that can never miss a bond between the given elements.
///
/// **Formula**: margin = 2 * max(r_i) * tolerance
///
/// This bounds the cutoff of every pair that can occur, including the
/// homonuclear pair of the largest element, so it is conservative when
/// that pair never appears.
pub fn estimate_margin<'a, I>(elements: I, tolerance: f64, default_radius: f64) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    let max_radius = elements
        .into_iter()
        .map(|e| radius_or_default(e, default_radius))
        .fold(0.0, f64::max);

    2.0 * max_radius * tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_RADIUS;

    #[test]
    fn test_margin_uses_largest_radius() {
        let m = estimate_margin(["H", "C", "O"], 1.1, DEFAULT_RADIUS);
        assert!((m - 2.0 * 0.77 * 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_element_raises_margin() {
        let m = estimate_margin(["H", "Xx"], 1.0, DEFAULT_RADIUS);
        assert!((m - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_elements() {
        assert_eq!(estimate_margin(std::iter::empty::<&str>(), 1.1, DEFAULT_RADIUS), 0.0);
    }
}
