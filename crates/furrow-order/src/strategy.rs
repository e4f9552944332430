//! Strategy identifiers.
//!
//! [`StrategyName`] is the closed set of ways to order a point group.
//! Every consumer (scoring, labelling, applicability) matches on it
//! exhaustively, so adding a strategy is a compile-checked change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{AxisPair, OrderError};

/// One ordering-construction method.
///
/// Serializes as the snake_case names used by the persistence layer
/// (`"xy_ascending"`, `"nn"`, ...). The derived `Ord` follows declaration
/// order, which is also the iteration order of a
/// [`ScoreMap`](crate::ScoreMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyName {
    /// Shuffled order.
    Random,
    /// Sorted by x, then y, ascending.
    XyAscending,
    /// Sorted by x, then y, descending.
    XyDescending,
    /// Sorted by y, then x, ascending.
    YxAscending,
    /// Sorted by y, then x, descending.
    YxDescending,
    /// Greedy nearest-neighbor tour from the home position.
    #[serde(rename = "nn")]
    NearestNeighbor,
    /// Rows of equal x, snaking along y.
    XyAlternating,
    /// Rows of equal y, snaking along x.
    YxAlternating,
}

impl StrategyName {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Random,
        Self::XyAscending,
        Self::XyDescending,
        Self::YxAscending,
        Self::YxDescending,
        Self::NearestNeighbor,
        Self::XyAlternating,
        Self::YxAlternating,
    ];

    /// Strategies produced by a [`LinearSortProvider`](crate::LinearSortProvider).
    pub const LINEAR: [Self; 5] = [
        Self::Random,
        Self::XyAscending,
        Self::XyDescending,
        Self::YxAscending,
        Self::YxDescending,
    ];

    /// Heuristic strategies built by this crate. They can be scored and
    /// previewed but not yet persisted.
    pub const HEURISTIC: [Self; 3] = [
        Self::XyAlternating,
        Self::YxAlternating,
        Self::NearestNeighbor,
    ];

    /// The wire name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::XyAscending => "xy_ascending",
            Self::XyDescending => "xy_descending",
            Self::YxAscending => "yx_ascending",
            Self::YxDescending => "yx_descending",
            Self::NearestNeighbor => "nn",
            Self::XyAlternating => "xy_alternating",
            Self::YxAlternating => "yx_alternating",
        }
    }

    /// Human-readable label for display next to a score.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Random => "Random Order",
            Self::XyAscending => "X/Y, Ascending",
            Self::XyDescending => "X/Y, Descending",
            Self::YxAscending => "Y/X, Ascending",
            Self::YxDescending => "Y/X, Descending",
            Self::NearestNeighbor => "Optimized",
            Self::XyAlternating => "X/Y Alternating",
            Self::YxAlternating => "Y/X Alternating",
        }
    }

    /// The linear sort backing this strategy, or `None` for heuristics.
    #[must_use]
    pub const fn linear_sort(self) -> Option<LinearSort> {
        match self {
            Self::Random => Some(LinearSort::Random),
            Self::XyAscending => Some(LinearSort::XyAscending),
            Self::XyDescending => Some(LinearSort::XyDescending),
            Self::YxAscending => Some(LinearSort::YxAscending),
            Self::YxDescending => Some(LinearSort::YxDescending),
            Self::NearestNeighbor | Self::XyAlternating | Self::YxAlternating => None,
        }
    }

    /// Whether the strategy can be applied to a group through persistence.
    #[must_use]
    pub const fn is_applicable(self) -> bool {
        self.linear_sort().is_some()
    }

    /// Whether the result is deterministic for a fixed point set.
    #[must_use]
    pub const fn is_deterministic(self) -> bool {
        !matches!(self, Self::Random)
    }
}

impl fmt::Display for StrategyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyName {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| OrderError::UnknownStrategy(s.to_owned()))
    }
}

/// The linear subset of [`StrategyName`], owned by a sort provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinearSort {
    /// Shuffled order.
    Random,
    /// Sorted by x, then y, ascending.
    XyAscending,
    /// Sorted by x, then y, descending.
    XyDescending,
    /// Sorted by y, then x, ascending.
    YxAscending,
    /// Sorted by y, then x, descending.
    YxDescending,
}

impl LinearSort {
    /// Composite key axes and direction, or `None` for [`Self::Random`].
    #[must_use]
    pub const fn key(self) -> Option<(AxisPair, bool)> {
        match self {
            Self::Random => None,
            Self::XyAscending => Some((AxisPair::Xy, false)),
            Self::XyDescending => Some((AxisPair::Xy, true)),
            Self::YxAscending => Some((AxisPair::Yx, false)),
            Self::YxDescending => Some((AxisPair::Yx, true)),
        }
    }
}

impl From<LinearSort> for StrategyName {
    fn from(sort: LinearSort) -> Self {
        match sort {
            LinearSort::Random => Self::Random,
            LinearSort::XyAscending => Self::XyAscending,
            LinearSort::XyDescending => Self::XyDescending,
            LinearSort::YxAscending => Self::YxAscending,
            LinearSort::YxDescending => Self::YxDescending,
        }
    }
}
