//! Nearest-neighbor tour: greedily visit the closest unvisited point.
//!
//! The tour starts from the machine's home position, [`Coord::ORIGIN`],
//! which is not itself part of the output. At each step the remaining
//! point closest to the current position is appended. When several points
//! are equally close, the one that comes first in input order wins.
//!
//! Two interchangeable backends produce identical tours:
//!
//! - [`NearestNeighborIndex::Linear`] scans every remaining point per step,
//!   O(n^2) overall. Fine for the tens to low hundreds of points in one
//!   group.
//! - [`NearestNeighborIndex::Spatial`] keeps the remaining points in an
//!   R\*-tree and only examines the nearest candidates.

use rstar::RTree;
use rstar::primitives::GeomWithData;
use serde::{Deserialize, Serialize};

use crate::types::{Coord, Ordering, Point};

/// Selects the search structure behind [`nearest_neighbor_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NearestNeighborIndex {
    /// Exhaustive scan of the remaining points.
    #[default]
    Linear,
    /// R\*-tree over the remaining points.
    Spatial,
}

/// Build a nearest-neighbor tour with the default [`Linear`](NearestNeighborIndex::Linear) backend.
#[must_use = "returns the nearest-neighbor ordering"]
pub fn nearest_neighbor(points: &[Point]) -> Ordering {
    nearest_neighbor_with(points, NearestNeighborIndex::Linear)
}

/// Build a nearest-neighbor tour using the given search backend.
///
/// Points are removed by input position, not coordinate, so duplicate
/// coordinates are each visited once.
#[must_use = "returns the nearest-neighbor ordering"]
pub fn nearest_neighbor_with(points: &[Point], index: NearestNeighborIndex) -> Ordering {
    let ordered = match index {
        NearestNeighborIndex::Linear => tour_linear(points),
        NearestNeighborIndex::Spatial => tour_spatial(points),
    };
    debug_assert!(ordered.is_permutation_of(points));
    ordered
}

fn tour_linear(points: &[Point]) -> Ordering {
    let n = points.len();
    let mut visited = vec![false; n];
    let mut result = Vec::with_capacity(n);
    let mut from = Coord::ORIGIN;

    for _ in 0..n {
        let mut best: Option<usize> = None;
        let mut best_dist = f64::INFINITY;

        for (j, candidate) in points.iter().enumerate() {
            if visited[j] {
                continue;
            }
            // Strict `<` keeps the first of several equal minima.
            let dist = from.distance_squared(candidate.coord());
            if best.is_none() || dist < best_dist {
                best_dist = dist;
                best = Some(j);
            }
        }

        // At least one unvisited point remains on every iteration.
        let Some(best_idx) = best else {
            break;
        };

        visited[best_idx] = true;
        from = points[best_idx].coord();
        result.push(points[best_idx]);
    }

    Ordering::new(result)
}

/// R-tree entry: a point position tagged with its input index.
type IndexedPoint = GeomWithData<[f64; 2], usize>;

/// Relative slack when collecting equidistant candidates from the R-tree.
///
/// The tree computes squared distances without fused multiply-add, so its
/// values can differ from [`Coord::distance_squared`] in the last bits.
/// Candidates within this band are re-ranked with the engine's own metric.
const TIE_SLACK: f64 = 8.0 * f64::EPSILON;

fn tour_spatial(points: &[Point]) -> Ordering {
    let entries: Vec<IndexedPoint> = points
        .iter()
        .enumerate()
        .map(|(i, p)| GeomWithData::new([p.x, p.y], i))
        .collect();
    let mut tree = RTree::bulk_load(entries);

    let mut result = Vec::with_capacity(points.len());
    let mut from = Coord::ORIGIN;

    while tree.size() > 0 {
        let Some(best) = nearest_entry(&tree, points, from) else {
            break;
        };
        tree.remove(&best);
        let point = points[best.data];
        from = point.coord();
        result.push(point);
    }

    Ordering::new(result)
}

/// Find the remaining entry closest to `from`, lowest input index first on ties.
fn nearest_entry(tree: &RTree<IndexedPoint>, points: &[Point], from: Coord) -> Option<IndexedPoint> {
    let query = [from.x, from.y];
    let mut candidates = tree.nearest_neighbor_iter_with_distance_2(&query);
    let (first, first_d2) = candidates.next()?;
    let limit = first_d2.mul_add(TIE_SLACK, first_d2);

    let mut best = *first;
    let mut best_dist = from.distance_squared(points[first.data].coord());

    for (entry, d2) in candidates {
        if d2 > limit {
            break;
        }
        let dist = from.distance_squared(points[entry.data].coord());
        if dist < best_dist || (dist <= best_dist && entry.data < best.data) {
            best = *entry;
            best_dist = dist;
        }
    }

    Some(best)
}
