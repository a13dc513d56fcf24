//! Resolution-based thinning that preserves shape-defining points.
//!
//! A point is *significant* when it is a local peak or valley relative to
//! its immediate neighbours (non-strict comparison with at least one strict
//! side, so plateaus do not qualify) or a sequence endpoint. Significant
//! points always survive; the remaining "middle" points are kept at an even
//! spread whose density is the `resolution` fraction.

use crate::core::data::Entry;

/// Thin `entries` down to significant points plus `resolution` of the rest.
///
/// Identity for series of two or fewer points and for `resolution >= 1.0`;
/// out-of-range resolutions are clamped. Removed entries are dropped whole,
/// never merged or averaged.
#[must_use]
pub fn filter_by_resolution(entries: &[Entry], resolution: f64) -> Vec<Entry> {
    if entries.len() <= 2 || resolution >= 1.0 {
        return entries.to_vec();
    }
    let resolution = resolution.clamp(0.0, 1.0);

    let n = entries.len();
    let mut significant = vec![false; n];
    significant[0] = true;
    significant[n - 1] = true;

    for i in 1..n - 1 {
        let prev = entries[i - 1].y;
        let curr = entries[i].y;
        let next = entries[i + 1].y;

        let peak = curr >= prev && curr >= next && (curr > prev || curr > next);
        let valley = curr <= prev && curr <= next && (curr < prev || curr < next);

        significant[i] = peak || valley;
    }

    // Evenly spread `keep_count` picks across the middle indices.
    let middle: Vec<usize> = (0..n).filter(|&i| !significant[i]).collect();
    let keep_count = (middle.len() as f64 * resolution) as usize;

    let mut keep = vec![false; n];
    if keep_count > 0 && !middle.is_empty() {
        let step = middle.len() as f64 / keep_count as f64;
        for i in 0..keep_count {
            let index = (i as f64 * step) as usize;
            if index < middle.len() {
                keep[middle[index]] = true;
            }
        }
    }

    entries
        .iter()
        .enumerate()
        .filter(|&(i, _)| significant[i] || keep[i])
        .map(|(_, e)| *e)
        .collect()
}
