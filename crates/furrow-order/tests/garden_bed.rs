//! Integration test: score a planted grid end to end and drive the selector.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use furrow_order::{
    Activation, GroupId, Persistence, Point, ScoreConfig, Selector, SelectorConfig,
    StrategyName, UiHost, validate_points,
};

/// A 6 x 4 bed of plants on a 300 mm grid, listed in scrambled order.
fn garden_bed() -> Vec<Point> {
    let mut points: Vec<Point> = (0..6_u32)
        .flat_map(|col| {
            (0..4_u32).map(move |row| {
                Point::new(
                    u64::from(col * 4 + row + 1),
                    f64::from(col).mul_add(300.0, 100.0),
                    f64::from(row).mul_add(300.0, 100.0),
                )
            })
        })
        .collect();
    points.reverse();
    points.swap(3, 17);
    points.swap(8, 20);
    points
}

#[derive(Default)]
struct Log {
    persisted: Vec<String>,
    ui: Vec<String>,
}

impl Persistence for Log {
    fn apply_sort(&mut self, group: GroupId, strategy: StrategyName) {
        self.persisted.push(format!("apply {group} {strategy}"));
    }

    fn commit(&mut self, group: GroupId) {
        self.persisted.push(format!("commit {group}"));
    }
}

impl UiHost for Log {
    fn preview(&mut self, strategy: Option<StrategyName>) {
        self.ui.push(format!("preview {strategy:?}"));
    }

    fn notify(&mut self, message: &str) {
        self.ui.push(format!("notify {message}"));
    }
}

#[test]
fn garden_bed_scores_and_selection() {
    let points = garden_bed();
    validate_points(&points).expect("grid is well formed");

    let config = ScoreConfig {
        random_seed: Some(2024),
        ..ScoreConfig::default()
    };
    let selector = Selector::new(SelectorConfig::all_experimental());
    let scores = selector.score(&points, &config, &config.standard_sorts());
    assert_eq!(scores.len(), StrategyName::ALL.len());

    // Column-wise snake: 6 columns of 3 x 300 mm runs, plus 5 x 300 mm hops.
    assert_eq!(scores.get(StrategyName::XyAlternating), Some(6 * 900 + 5 * 300));
    // Row-wise snake: 4 rows of 5 x 300 mm runs, plus 3 x 300 mm hops.
    assert_eq!(scores.get(StrategyName::YxAlternating), Some(4 * 1500 + 3 * 300));

    // Plain ascending sorts fly back to the start of each column.
    let xy_ascending = scores.get(StrategyName::XyAscending).unwrap();
    assert!(scores.get(StrategyName::XyAlternating).unwrap() < xy_ascending);

    // Greedy strands a few plants and has to jump back, but still beats the
    // plain sort. No ordering can beat 23 hops of 300 mm.
    let nn = scores.get(StrategyName::NearestNeighbor).unwrap();
    assert!(nn < xy_ascending);
    assert!(nn >= 23 * 300);

    let (best, best_len) = scores.best().unwrap();
    assert_eq!(Some(best_len), scores.get(best));

    let bars = selector.bars(&scores, Some(StrategyName::XyAscending));
    assert_eq!(bars.len(), 8);
    assert!(bars.iter().any(|b| (b.relative_width - 100.0).abs() < f64::EPSILON));
    assert!(bars.iter().all(|b| (0.0..=100.0).contains(&b.relative_width)));

    let mut log = Log::default();
    selector.hover_enter(StrategyName::NearestNeighbor, &mut log);
    assert_eq!(
        selector.activate(StrategyName::NearestNeighbor, 5, &mut log, &mut Log::default()),
        Activation::Unsupported
    );
    selector.hover_exit(&mut log);
    assert_eq!(
        selector.activate(StrategyName::YxAscending, 5, &mut log, &mut Log::default()),
        Activation::Applied
    );

    assert_eq!(log.persisted, vec!["apply 5 yx_ascending", "commit 5"]);
    assert_eq!(log.ui, vec!["preview Some(NearestNeighbor)", "preview None"]);
}

#[test]
fn rescoring_unchanged_points_is_stable() {
    let points = garden_bed();
    let selector = Selector::default();
    let config = ScoreConfig::default();
    let deterministic: Vec<StrategyName> = StrategyName::ALL
        .into_iter()
        .filter(|s| s.is_deterministic())
        .collect();
    let first = furrow_order::score_all(&points, &deterministic, &config, &config.standard_sorts());
    let second = furrow_order::score_all(&points, &deterministic, &config, &config.standard_sorts());
    assert_eq!(first, second);
    assert_eq!(selector.exposed().len(), 5);
}

#[test]
fn every_strategy_returns_a_permutation() {
    let points = garden_bed();
    let config = ScoreConfig::default();
    for strategy in StrategyName::ALL {
        let ordering =
            furrow_order::build_ordering(strategy, &points, &config, &config.standard_sorts());
        assert!(
            ordering.is_permutation_of(&points),
            "{strategy} dropped or duplicated a point"
        );
    }
}
