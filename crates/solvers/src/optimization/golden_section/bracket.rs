/// The inverse golden ratio, `1/φ = φ - 1 = (√5 - 1) / 2`.
const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Fraction of the width between the left bound and the inner left point.
const INV_PHI_SQ: f64 = 1.0 - INV_PHI;

/// Outer bounds of the search and the two interior probe points.
///
/// Interior points sit at `left + (1 - φ⁻¹)·width` and `left + φ⁻¹·width`,
/// so after either shrink one of them lands exactly where the next probe is
/// needed.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    pub(super) left: f64,
    pub(super) right: f64,
    pub(super) inner_left: f64,
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Creates a bracket from bounds, swapping them if reversed.
    pub(super) fn new(bounds: [f64; 2]) -> Self {
        let [a, b] = bounds;
        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        let width = right - left;
        Self {
            left,
            right,
            inner_left: left + INV_PHI_SQ * width,
            inner_right: left + INV_PHI * width,
        }
    }

    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Keeps `[left, inner_right]`.
    ///
    /// The old `inner_left` becomes `inner_right`; the new `inner_left` is the
    /// point that needs evaluating next.
    pub(super) fn shrink_right(&mut self) {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = self.left + INV_PHI_SQ * self.width();
    }

    /// Keeps `[inner_left, right]`.
    ///
    /// The old `inner_right` becomes `inner_left`; the new `inner_right` is the
    /// point that needs evaluating next.
    pub(super) fn shrink_left(&mut self) {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = self.left + INV_PHI * self.width();
    }
}
