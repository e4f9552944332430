//! Linear sort strategies: single composite-key orderings and random.
//!
//! The engine consumes these through the [`LinearSortProvider`] trait so a
//! host application can plug in its own sorting module. [`StandardSorts`]
//! is the stock implementation.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::strategy::LinearSort;
use crate::types::{Ordering, Point};

/// Source of orderings for the linear strategies.
///
/// Implementations must be total and return a permutation of `points`.
/// All sorts except [`LinearSort::Random`] must be deterministic.
pub trait LinearSortProvider {
    /// Order `points` according to `sort`.
    fn order(&self, sort: LinearSort, points: &[Point]) -> Ordering;
}

/// Stock linear sorts.
///
/// - `xy_*` sort by x, breaking ties by y; `yx_*` the other way round.
/// - `*_descending` is the exact reverse of the ascending sort.
/// - `random` shuffles, seeded when `seed` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSorts {
    /// Fixed shuffle seed for reproducible `random` orderings.
    pub seed: Option<u64>,
}

impl StandardSorts {
    /// Stock sorts with a fixed shuffle seed.
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl LinearSortProvider for StandardSorts {
    fn order(&self, sort: LinearSort, points: &[Point]) -> Ordering {
        let mut ordered = points.to_vec();

        let Some((axes, descending)) = sort.key() else {
            let mut rng = self
                .seed
                .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
            ordered.shuffle(&mut rng);
            return Ordering::new(ordered);
        };

        let (primary, secondary) = (axes.primary(), axes.secondary());
        ordered.sort_by(|a, b| {
            primary
                .of(a)
                .total_cmp(&primary.of(b))
                .then_with(|| secondary.of(a).total_cmp(&secondary.of(b)))
        });
        if descending {
            ordered.reverse();
        }

        Ordering::new(ordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(1, 10.0, 0.0),
            Point::new(2, 0.0, 10.0),
            Point::new(3, 0.0, 0.0),
            Point::new(4, 10.0, 10.0),
        ]
    }

    #[test]
    fn xy_ascending_sorts_x_then_y() {
        let result = StandardSorts::default().order(LinearSort::XyAscending, &square());
        assert_eq!(result.ids(), vec![3, 2, 1, 4]);
    }

    #[test]
    fn xy_descending_is_reverse_of_ascending() {
        let sorts = StandardSorts::default();
        let mut ascending = sorts.order(LinearSort::XyAscending, &square()).ids();
        ascending.reverse();
        let descending = sorts.order(LinearSort::XyDescending, &square()).ids();
        assert_eq!(descending, ascending);
    }

    #[test]
    fn yx_ascending_sorts_y_then_x() {
        let result = StandardSorts::default().order(LinearSort::YxAscending, &square());
        assert_eq!(result.ids(), vec![3, 1, 2, 4]);
    }

    #[test]
    fn yx_descending_sorts_y_then_x_reversed() {
        let result = StandardSorts::default().order(LinearSort::YxDescending, &square());
        assert_eq!(result.ids(), vec![4, 2, 1, 3]);
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let points: Vec<Point> = (0..20_u32)
            .map(|i| Point::new(u64::from(i), f64::from(i), 0.0))
            .collect();
        let a = StandardSorts::seeded(42).order(LinearSort::Random, &points);
        let b = StandardSorts::seeded(42).order(LinearSort::Random, &points);
        assert_eq!(a, b);
        assert!(a.is_permutation_of(&points));
    }

    #[test]
    fn unseeded_random_is_a_permutation() {
        let points = square();
        let result = StandardSorts::default().order(LinearSort::Random, &points);
        assert!(result.is_permutation_of(&points));
    }

    #[test]
    fn every_sort_handles_empty_input() {
        let sorts = StandardSorts::seeded(1);
        for sort in [
            LinearSort::Random,
            LinearSort::XyAscending,
            LinearSort::XyDescending,
            LinearSort::YxAscending,
            LinearSort::YxDescending,
        ] {
            assert!(sorts.order(sort, &[]).is_empty());
        }
    }
}
