//! Affine rescaling of scalar fields (intensity, feature scores).

use ringscan_core::{LidarScan, Result, RingScanError, Scored};
use tracing::debug;

/// Interval a field is rescaled into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRange {
    pub min: f32,
    pub max: f32,
}

impl TargetRange {
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    pub fn new(min: f32, max: f32) -> Result<Self> {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(RingScanError::InvalidTargetRange { min, max });
        }
        Ok(Self { min, max })
    }
}

impl Default for TargetRange {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Observed extremes of a field, the source interval of a rescale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservedRange {
    pub min: f32,
    pub max: f32,
}

impl ObservedRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Extremes over the finite values, or `None` if there are none.
    pub fn of(values: impl IntoIterator<Item = f32>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(Self::new(v, v)),
                Some(r) => Some(Self::new(r.min.min(v), r.max.max(v))),
            })
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// A zero, negative or non-finite span cannot be divided by.
    pub fn is_degenerate(&self) -> bool {
        let span = self.span();
        !(span.is_finite() && span > 0.0)
    }

    pub fn rescale(&self, v: f32, target: TargetRange) -> f32 {
        (v - self.min) / self.span() * (target.max - target.min) + target.min
    }
}

/// What a normalization call did to its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    Applied,
    /// Nothing to rescale.
    Empty,
    /// Observed span was zero or non-finite; the field was left unchanged.
    Degenerate,
}

impl Normalization {
    pub fn is_applied(self) -> bool {
        self == Normalization::Applied
    }
}

/// Rescale every value from `observed` into `target`, in place.
///
/// Empty fields and degenerate observed ranges are left untouched instead
/// of being filled with infinities or NaNs.
pub fn normalize_values<'a, I>(values: I, observed: ObservedRange, target: TargetRange) -> Normalization
where
    I: IntoIterator<Item = &'a mut f32>,
{
    let mut values = values.into_iter().peekable();
    if values.peek().is_none() {
        return Normalization::Empty;
    }
    if observed.is_degenerate() {
        debug!(
            min = observed.min,
            max = observed.max,
            "skipping normalization of a constant field"
        );
        return Normalization::Degenerate;
    }

    for v in values {
        *v = observed.rescale(*v, target);
    }
    Normalization::Applied
}

pub fn normalize_in_place(
    values: &mut [f32],
    observed: ObservedRange,
    target: TargetRange,
) -> Normalization {
    normalize_values(values.iter_mut(), observed, target)
}

/// Pure variant of [`normalize_in_place`].
pub fn normalized(values: &[f32], observed: ObservedRange, target: TargetRange) -> Vec<f32> {
    let mut out = values.to_vec();
    normalize_in_place(&mut out, observed, target);
    out
}

/// Rescale the intensity channel of `scan` in place.
pub fn normalize_intensity(
    scan: &mut LidarScan,
    observed: ObservedRange,
    target: TargetRange,
) -> Normalization {
    normalize_in_place(&mut scan.intensity, observed, target)
}

/// Rescale the transient scores of annotated points in place.
pub fn normalize_scores<P>(
    scored: &mut [Scored<P>],
    observed: ObservedRange,
    target: TargetRange,
) -> Normalization {
    normalize_values(scored.iter_mut().map(|s| &mut s.score), observed, target)
}
