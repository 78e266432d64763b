//! Named value ranges and the clamp helpers built on them.

/// Bounds configuration for a single stat.
///
/// Each configured stat (attack damage, hit chance, fighter height, ...) has
/// its own range. Clamping is total: a reversed range is normalized and a NaN
/// input collapses to the lower bound, so it never panics.
///
/// # Usage
/// ```
/// # use fight_core::stats::Range;
/// let damage = Range::new(5.0, 300.0);
/// assert_eq!(damage.clamp(450.0), 300.0);
/// assert_eq!(damage.clamp(1.0), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Bound `value` into this range.
    pub fn clamp(&self, value: f32) -> f32 {
        clamp(value, self.min, self.max)
    }

    /// Returns true if `value` lies inside the range (inclusive).
    pub fn contains(&self, value: f32) -> bool {
        let (lo, hi) = ordered(self.min, self.max);
        value >= lo && value <= hi
    }

    /// Returns true if `min <= max` and both bounds are finite.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Width of the range.
    pub fn span(&self) -> f32 {
        let (lo, hi) = ordered(self.min, self.max);
        hi - lo
    }
}

/// Bound `value` into `[lo, hi]`.
///
/// Idempotent: `clamp(clamp(x, lo, hi), lo, hi) == clamp(x, lo, hi)`.
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    let (lo, hi) = ordered(lo, hi);
    if value.is_nan() || value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Map `value` from `range` onto `[-1, +1]`, midpoint at zero.
///
/// Values outside the range map outside `[-1, +1]`; callers that need a
/// bounded offset validate the input first. A zero-width range maps to 0.
pub fn normalize(value: f32, range: Range) -> f32 {
    let span = range.span();
    if span == 0.0 {
        return 0.0;
    }
    let (lo, _) = ordered(range.min, range.max);
    2.0 * (value - lo) / span - 1.0
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}
