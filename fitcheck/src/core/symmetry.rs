//! Left/right asymmetry check for paired measurements.

use super::types::Side;

/// Result of comparing one right/left measurement pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetryCheck {
    /// `(max - min) / max * 100`, or `0` when both sides are zero.
    pub difference_pct: f64,
    pub asymmetric: bool,
    /// Side with the smaller raw value. Ties report `Left`.
    pub weaker_side: Side,
}

/// Percentage difference between `right` and `left`, relative to the larger.
pub fn difference_pct(right: f64, left: f64) -> f64 {
    let max = right.max(left);
    let min = right.min(left);
    if max > 0.0 {
        (max - min) / max * 100.0
    } else {
        0.0
    }
}

/// Compare a pair against `threshold_pct`. Asymmetric only when strictly above.
pub fn check_asymmetry(right: f64, left: f64, threshold_pct: f64) -> SymmetryCheck {
    let difference_pct = difference_pct(right, left);
    SymmetryCheck {
        difference_pct,
        asymmetric: difference_pct > threshold_pct,
        weaker_side: if right < left { Side::Right } else { Side::Left },
    }
}
