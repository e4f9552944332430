//! Path scoring: total travel length per strategy and relative comparison.
//!
//! [`score_all`] builds an ordering for each requested strategy and records
//! its rounded [`path_length`]. Nothing is cached; every call produces a
//! fresh [`ScoreMap`] from the point set it is given.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::alternating::alternating;
use crate::linear::{LinearSortProvider, StandardSorts};
use crate::nearest::{NearestNeighborIndex, nearest_neighbor_with};
use crate::strategy::{LinearSort, StrategyName};
use crate::types::{AxisPair, Ordering, Point};

/// Configuration for a scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Search backend for the nearest-neighbor tour.
    pub nearest_neighbor_index: NearestNeighborIndex,
    /// Shuffle seed for the `random` strategy. `None` draws from the OS.
    pub random_seed: Option<u64>,
}

impl ScoreConfig {
    /// The stock linear sorts, seeded from [`Self::random_seed`].
    #[must_use]
    pub const fn standard_sorts(&self) -> StandardSorts {
        StandardSorts {
            seed: self.random_seed,
        }
    }
}

/// Total travel length along an ordering, rounded to the nearest integer.
///
/// Sums the distance between each consecutive pair of points. Travel from
/// the home position to the first point is not counted. Empty and
/// single-point orderings score 0. Halves round away from zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn path_length(ordering: &Ordering) -> u64 {
    let total: f64 = ordering
        .points()
        .windows(2)
        .map(|pair| pair[0].distance(&pair[1]))
        .sum();
    // Non-negative and finite for finite input, so the cast is exact after rounding.
    total.round() as u64
}

/// Build the ordering for one strategy.
///
/// Linear strategies are delegated to `sorts`; the heuristics are built here.
#[must_use = "returns the strategy's ordering"]
pub fn build_ordering(
    strategy: StrategyName,
    points: &[Point],
    config: &ScoreConfig,
    sorts: &impl LinearSortProvider,
) -> Ordering {
    match strategy {
        StrategyName::Random => sorts.order(LinearSort::Random, points),
        StrategyName::XyAscending => sorts.order(LinearSort::XyAscending, points),
        StrategyName::XyDescending => sorts.order(LinearSort::XyDescending, points),
        StrategyName::YxAscending => sorts.order(LinearSort::YxAscending, points),
        StrategyName::YxDescending => sorts.order(LinearSort::YxDescending, points),
        StrategyName::NearestNeighbor => {
            nearest_neighbor_with(points, config.nearest_neighbor_index)
        }
        StrategyName::XyAlternating => alternating(points, AxisPair::Xy),
        StrategyName::YxAlternating => alternating(points, AxisPair::Yx),
    }
}

/// Score every requested strategy against `points`.
///
/// The returned map has exactly one entry per distinct requested strategy.
#[must_use = "returns the computed scores"]
pub fn score_all(
    points: &[Point],
    strategies: &[StrategyName],
    config: &ScoreConfig,
    sorts: &impl LinearSortProvider,
) -> ScoreMap {
    let lengths: BTreeMap<StrategyName, u64> = strategies
        .iter()
        .map(|&strategy| {
            let ordering = build_ordering(strategy, points, config, sorts);
            debug_assert!(ordering.is_permutation_of(points));
            (strategy, path_length(&ordering))
        })
        .collect();

    log::debug!(
        "scored {} strategies over {} points: {lengths:?}",
        lengths.len(),
        points.len(),
    );

    ScoreMap(lengths)
}

/// Path length per strategy, iterated in [`StrategyName`] declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreMap(BTreeMap<StrategyName, u64>);

impl ScoreMap {
    /// Length recorded for `strategy`, if it was scored.
    #[must_use]
    pub fn get(&self, strategy: StrategyName) -> Option<u64> {
        self.0.get(&strategy).copied()
    }

    /// Number of scored strategies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no strategy was scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(strategy, length)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (StrategyName, u64)> + '_ {
        self.0.iter().map(|(&name, &len)| (name, len))
    }

    /// The longest recorded length, or 0 for an empty map.
    #[must_use]
    pub fn max_length(&self) -> u64 {
        self.0.values().copied().max().unwrap_or(0)
    }

    /// The shortest strategy; ties go to the earliest in declaration order.
    #[must_use]
    pub fn best(&self) -> Option<(StrategyName, u64)> {
        self.iter().min_by_key(|&(_, len)| len)
    }

    /// Length of `strategy` as a percentage of the longest scored length.
    ///
    /// Used to size comparison bars. The longest strategy is exactly 100.
    /// When every length is 0 (or `strategy` was not scored) the result is
    /// 0 rather than NaN.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn relative_length(&self, strategy: StrategyName) -> f64 {
        let max = self.max_length();
        match self.get(strategy) {
            Some(len) if max > 0 => len as f64 / max as f64 * 100.0,
            _ => 0.0,
        }
    }
}

impl FromIterator<(StrategyName, u64)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (StrategyName, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
