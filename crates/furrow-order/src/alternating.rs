//! Alternating-row ("boustrophedon") ordering.
//!
//! Points sharing an exact primary-axis coordinate form a row. Rows are
//! visited in ascending primary order. Within each row points are sorted by
//! the secondary axis, ascending on even rows and descending on odd rows, so
//! a regular grid is swept in a snake without running back to the start of
//! each row.
//!
//! Grouping uses exact equality. Points that are nearly but not exactly
//! aligned form separate rows; with no shared coordinates at all the result
//! is simply a primary-ascending sort.

use std::cmp;

use crate::types::{Axis, AxisPair, Ordering, Point};

/// Build an alternating-row ordering over `axes`.
#[must_use = "returns the alternating-row ordering"]
pub fn alternating(points: &[Point], axes: AxisPair) -> Ordering {
    let primary = axes.primary();
    let secondary = axes.secondary();

    // Stable sort: points equal on both axes keep input order.
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        compare(primary, a, b).then_with(|| compare(secondary, a, b))
    });

    let mut result = Vec::with_capacity(sorted.len());
    for (row_index, row) in sorted.chunk_by(|a, b| same_row(primary, a, b)).enumerate() {
        if row_index % 2 == 0 {
            result.extend_from_slice(row);
        } else {
            result.extend(row.iter().rev().copied());
        }
    }

    debug_assert!(result.len() == points.len());
    Ordering::new(result)
}

/// Numeric comparison on one axis. `-0.0` and `0.0` compare equal.
fn compare(axis: Axis, a: &Point, b: &Point) -> cmp::Ordering {
    axis.of(a)
        .partial_cmp(&axis.of(b))
        .unwrap_or(cmp::Ordering::Equal)
}

#[allow(clippy::float_cmp)]
fn same_row(axis: Axis, a: &Point, b: &Point) -> bool {
    axis.of(a) == axis.of(b)
}
