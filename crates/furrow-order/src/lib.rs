//! furrow-order: point visiting-order engine (sans-IO).
//!
//! Builds candidate visiting orders for a set of 2D points and scores each
//! by total travel distance:
//!
//! - linear sorts (by x/y composite key, or shuffled), via a pluggable
//!   [`LinearSortProvider`];
//! - a greedy nearest-neighbor tour from the home position;
//! - alternating-row ("boustrophedon") sweeps along either axis.
//!
//! [`score_all`] turns a point set into a [`ScoreMap`], and the
//! [`Selector`] turns that into comparison bars and routes activation to
//! the host's persistence layer.
//!
//! All computation is synchronous and pure with respect to its inputs.
//! Nothing here performs I/O; the command-line harness lives in
//! `furrow-bench`.

pub mod alternating;
pub mod linear;
pub mod nearest;
pub mod score;
pub mod selector;
pub mod strategy;
pub mod types;

pub use alternating::alternating;
pub use linear::{LinearSortProvider, StandardSorts};
pub use nearest::{NearestNeighborIndex, nearest_neighbor, nearest_neighbor_with};
pub use score::{ScoreConfig, ScoreMap, build_ordering, path_length, score_all};
pub use selector::{
    Activation, GroupId, Persistence, Selector, SelectorConfig, StrategyBar, UiHost,
};
pub use strategy::{LinearSort, StrategyName};
pub use types::{Axis, AxisPair, Coord, OrderError, Ordering, Point, validate_points};
