//! Fixed-stride downsampling.

/// Default maximum number of chart points.
pub const DEFAULT_POINT_BUDGET: usize = 100;

/// Reduces `points` by keeping every `stride`-th element.
///
/// If `points.len() <= budget` the input is returned unchanged. Otherwise
/// `stride = points.len() / budget` (floored) and the elements whose index is
/// a multiple of `stride` are kept, in order.
///
/// This is a plain selection, not a resample: extremes between kept points
/// may be dropped. Because the stride is floored the result can be longer
/// than `budget` (up to `2 * budget - 1`); a stride of 1 returns the full
/// input. A budget of zero yields no points.
///
/// # Example
///
/// ```
/// use suiwatch_chart::downsample;
///
/// let points: Vec<u32> = (0..250).collect();
/// let kept = downsample(&points, 100);
///
/// assert_eq!(kept.len(), 125);
/// assert_eq!(kept[1], 2);
/// ```
#[must_use]
pub fn downsample<T: Clone>(points: &[T], budget: usize) -> Vec<T> {
    if points.len() <= budget {
        return points.to_vec();
    }
    if budget == 0 {
        return Vec::new();
    }

    let stride = points.len() / budget;
    points.iter().step_by(stride).cloned().collect()
}

/// Returns the stride `downsample` would use, or None when no reduction applies.
#[must_use]
pub const fn stride_for(len: usize, budget: usize) -> Option<usize> {
    if len <= budget || budget == 0 {
        None
    } else {
        Some(len / budget)
    }
}
