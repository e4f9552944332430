//! Shared types for the furrow ordering engine.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A bare 2D coordinate.
///
/// Lightweight projection of a [`Point`] used by distance and row
/// grouping logic. Has no identity of its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Coord {
    /// The machine's home position, where every nearest-neighbor tour starts.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another coordinate.
    ///
    /// Avoids the square root for comparison purposes.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Euclidean distance to another coordinate.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

/// A location the machine must visit.
///
/// Owned by the caller; the engine only reads points and copies them
/// into [`Ordering`]s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Caller-assigned identity, unique within one point set.
    pub id: u64,
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(id: u64, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// The point's position without its identity.
    #[must_use]
    pub const fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        self.coord().distance(other.coord())
    }
}

/// A visiting sequence: a permutation of some input point set.
///
/// Every builder in this crate returns an `Ordering` containing each input
/// point exactly once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ordering(Vec<Point>);

impl Ordering {
    /// Create a new ordering from a vector of points.
    #[must_use]
    pub const fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Returns `true` if the ordering visits no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of points visited.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point> {
        self.0.first()
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point> {
        self.0.last()
    }

    /// Returns a slice of all points in visiting order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Point ids in visiting order.
    #[must_use]
    pub fn ids(&self) -> Vec<u64> {
        self.0.iter().map(|p| p.id).collect()
    }

    /// Consumes the ordering and returns the underlying vector of points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }

    /// Returns `true` if this ordering holds exactly the points of `input`,
    /// each once, matched by id.
    #[must_use]
    pub fn is_permutation_of(&self, input: &[Point]) -> bool {
        if self.0.len() != input.len() {
            return false;
        }
        let mut ours = self.ids();
        let mut theirs: Vec<u64> = input.iter().map(|p| p.id).collect();
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }
}

/// One coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// Read this axis' value from a point.
    #[must_use]
    pub const fn of(self, point: &Point) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
        }
    }
}

/// An ordered (primary, secondary) axis selection.
///
/// Only the two distinct pairings exist, so `primary != secondary` holds
/// by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisPair {
    /// Rows share an `x` value and run along `y`.
    Xy,
    /// Rows share a `y` value and run along `x`.
    Yx,
}

impl AxisPair {
    /// The axis rows are grouped and sorted by.
    #[must_use]
    pub const fn primary(self) -> Axis {
        match self {
            Self::Xy => Axis::X,
            Self::Yx => Axis::Y,
        }
    }

    /// The axis points are sorted by within a row.
    #[must_use]
    pub const fn secondary(self) -> Axis {
        match self {
            Self::Xy => Axis::Y,
            Self::Yx => Axis::X,
        }
    }
}

/// Errors raised when validating input at the engine boundary.
///
/// The builders and scoring functions themselves are total and never
/// fail; callers validate once with [`validate_points`] or
/// [`StrategyName::from_str`](crate::StrategyName) before handing data in.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    /// A point has a NaN or infinite coordinate.
    #[error("point {id} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate {
        /// Id of the offending point.
        id: u64,
        /// Its x coordinate.
        x: f64,
        /// Its y coordinate.
        y: f64,
    },

    /// Two points share an id.
    #[error("duplicate point id {0}")]
    DuplicateId(u64),

    /// A strategy name did not match any known strategy.
    #[error("unknown ordering strategy {0:?}")]
    UnknownStrategy(String),
}

/// Check that a point set is well formed: finite coordinates and unique ids.
///
/// # Errors
///
/// Returns [`OrderError::NonFiniteCoordinate`] for the first point with a
/// NaN or infinite coordinate, or [`OrderError::DuplicateId`] for the first
/// repeated id.
pub fn validate_points(points: &[Point]) -> Result<(), OrderError> {
    let mut seen = HashSet::with_capacity(points.len());
    for p in points {
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(OrderError::NonFiniteCoordinate {
                id: p.id,
                x: p.x,
                y: p.y,
            });
        }
        if !seen.insert(p.id) {
            return Err(OrderError::DuplicateId(p.id));
        }
    }
    Ok(())
}
