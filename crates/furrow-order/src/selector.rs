//! Strategy selection: comparison bars, activation, and hover preview.
//!
//! The selector is the UI-facing edge of the engine. It owns no scores;
//! the host recomputes a [`ScoreMap`] whenever its point set changes and
//! asks the selector to turn it into [`StrategyBar`]s. Activation and hover
//! are forwarded to the host through the [`Persistence`] and [`UiHost`]
//! traits.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::linear::LinearSortProvider;
use crate::score::{ScoreConfig, ScoreMap, score_all};
use crate::strategy::StrategyName;
use crate::types::Point;

/// Identifies the point group a strategy is applied to.
pub type GroupId = u64;

/// Message shown when a heuristic strategy is activated.
pub const NOT_SUPPORTED_MESSAGE: &str = "Not supported yet.";

/// Receives "apply this ordering" requests.
///
/// Calls are fire-and-forget: failures are reported through the
/// collaborator's own error channel and never returned to the selector.
pub trait Persistence {
    /// Stage `strategy` as the sort type of `group`.
    fn apply_sort(&mut self, group: GroupId, strategy: StrategyName);

    /// Save the staged change for `group`.
    fn commit(&mut self, group: GroupId);
}

/// Receives presentation signals from the selector.
pub trait UiHost {
    /// Preview `strategy`'s ordering, or clear the preview with `None`.
    fn preview(&mut self, strategy: Option<StrategyName>);

    /// Show an informational message to the user.
    fn notify(&mut self, message: &str);
}

/// Which strategies the selector exposes.
///
/// Linear strategies are always exposed. Heuristic strategies are exposed
/// only when listed in `enabled_experimental_strategies`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Heuristic strategies to show alongside the linear ones.
    pub enabled_experimental_strategies: BTreeSet<StrategyName>,
}

impl SelectorConfig {
    /// Expose every heuristic strategy.
    #[must_use]
    pub fn all_experimental() -> Self {
        Self {
            enabled_experimental_strategies: StrategyName::HEURISTIC.into_iter().collect(),
        }
    }

    /// Whether `strategy` appears in the selector.
    #[must_use]
    pub fn is_exposed(&self, strategy: StrategyName) -> bool {
        strategy.is_applicable() || self.enabled_experimental_strategies.contains(&strategy)
    }
}

/// Outcome of activating a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    /// An apply-and-commit pair was sent to persistence.
    Applied,
    /// The strategy is display-only; the user was notified.
    Unsupported,
}

/// One row of the strategy comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyBar {
    /// The strategy this bar represents.
    pub strategy: StrategyName,
    /// Display label.
    pub label: &'static str,
    /// Rounded path length in engine units (millimetres).
    pub length: u64,
    /// Path length in metres, rounded to centimetres.
    pub display_meters: f64,
    /// Bar width as a percentage of the longest strategy.
    pub relative_width: f64,
    /// Whether this is the group's current strategy.
    pub selected: bool,
}

impl StrategyBar {
    /// Text shown inside the bar, e.g. `"Optimized: 1.23m"`.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{}: {}m", self.label, self.display_meters)
    }
}

/// Convert a length in millimetres to metres rounded to two decimals.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn display_meters(length: u64) -> f64 {
    (length as f64 / 10.0).round() / 100.0
}

/// Presents strategy scores and routes activation and hover signals.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    config: SelectorConfig,
}

impl Selector {
    /// Create a selector with the given exposure settings.
    #[must_use]
    pub const fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// The selector's configuration.
    #[must_use]
    pub const fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Exposed strategies in display order: linear sorts first, then the
    /// enabled heuristics.
    #[must_use]
    pub fn exposed(&self) -> Vec<StrategyName> {
        StrategyName::LINEAR
            .into_iter()
            .chain(StrategyName::HEURISTIC)
            .filter(|&s| self.config.is_exposed(s))
            .collect()
    }

    /// Score every exposed strategy against `points`.
    #[must_use = "returns the computed scores"]
    pub fn score(
        &self,
        points: &[Point],
        config: &ScoreConfig,
        sorts: &impl LinearSortProvider,
    ) -> ScoreMap {
        score_all(points, &self.exposed(), config, sorts)
    }

    /// Build one comparison bar per exposed strategy.
    ///
    /// `current` is the group's persisted strategy, if any, and marks its
    /// bar as selected. Relative widths are computed against the longest
    /// strategy in `scores`.
    #[must_use]
    pub fn bars(&self, scores: &ScoreMap, current: Option<StrategyName>) -> Vec<StrategyBar> {
        self.exposed()
            .into_iter()
            .filter_map(|strategy| {
                let Some(length) = scores.get(strategy) else {
                    log::warn!("no score for exposed strategy {strategy}");
                    return None;
                };
                Some(StrategyBar {
                    strategy,
                    label: strategy.label(),
                    length,
                    display_meters: display_meters(length),
                    relative_width: scores.relative_length(strategy),
                    selected: current == Some(strategy),
                })
            })
            .collect()
    }

    /// Activate `strategy` for `group`.
    ///
    /// Applicable strategies issue exactly one `apply_sort` followed by one
    /// `commit`. Heuristic strategies only notify the user.
    pub fn activate(
        &self,
        strategy: StrategyName,
        group: GroupId,
        persistence: &mut impl Persistence,
        ui: &mut impl UiHost,
    ) -> Activation {
        if strategy.is_applicable() {
            log::info!("applying {strategy} to group {group}");
            persistence.apply_sort(group, strategy);
            persistence.commit(group);
            Activation::Applied
        } else {
            log::info!("{strategy} cannot be applied to group {group} yet");
            ui.notify(NOT_SUPPORTED_MESSAGE);
            Activation::Unsupported
        }
    }

    /// Pointer entered `strategy`'s bar.
    pub fn hover_enter(&self, strategy: StrategyName, ui: &mut impl UiHost) {
        ui.preview(Some(strategy));
    }

    /// Pointer left a bar.
    pub fn hover_exit(&self, ui: &mut impl UiHost) {
        ui.preview(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingPersistence {
        calls: Vec<(&'static str, GroupId, Option<StrategyName>)>,
    }

    impl Persistence for RecordingPersistence {
        fn apply_sort(&mut self, group: GroupId, strategy: StrategyName) {
            self.calls.push(("apply", group, Some(strategy)));
        }

        fn commit(&mut self, group: GroupId) {
            self.calls.push(("commit", group, None));
        }
    }

    #[derive(Debug, Default)]
    struct RecordingUi {
        previews: Vec<Option<StrategyName>>,
        notices: Vec<String>,
    }

    impl UiHost for RecordingUi {
        fn preview(&mut self, strategy: Option<StrategyName>) {
            self.previews.push(strategy);
        }

        fn notify(&mut self, message: &str) {
            self.notices.push(message.to_owned());
        }
    }

    fn full_scores() -> ScoreMap {
        [
            (StrategyName::Random, 4000),
            (StrategyName::XyAscending, 2000),
            (StrategyName::XyDescending, 2000),
            (StrategyName::YxAscending, 3000),
            (StrategyName::YxDescending, 3000),
            (StrategyName::NearestNeighbor, 1234),
            (StrategyName::XyAlternating, 1500),
            (StrategyName::YxAlternating, 1800),
        ]
        .into_iter()
        .collect()
    }

    // --- exposure ---

    #[test]
    fn default_exposes_only_linear() {
        assert_eq!(Selector::default().exposed(), StrategyName::LINEAR.to_vec());
    }

    #[test]
    fn experimental_strategies_follow_linear() {
        let selector = Selector::new(SelectorConfig::all_experimental());
        assert_eq!(
            selector.exposed(),
            vec![
                StrategyName::Random,
                StrategyName::XyAscending,
                StrategyName::XyDescending,
                StrategyName::YxAscending,
                StrategyName::YxDescending,
                StrategyName::XyAlternating,
                StrategyName::YxAlternating,
                StrategyName::NearestNeighbor,
            ]
        );
    }

    #[test]
    fn individual_experimental_strategy_can_be_enabled() {
        let config = SelectorConfig {
            enabled_experimental_strategies: [StrategyName::NearestNeighbor].into_iter().collect(),
        };
        let exposed = Selector::new(config).exposed();
        assert!(exposed.contains(&StrategyName::NearestNeighbor));
        assert!(!exposed.contains(&StrategyName::XyAlternating));
    }

    // --- bars ---

    #[test]
    fn bars_follow_exposure_and_mark_selection() {
        let selector = Selector::new(SelectorConfig::all_experimental());
        let bars = selector.bars(&full_scores(), Some(StrategyName::XyAscending));
        assert_eq!(bars.len(), 8);
        let selected: Vec<_> = bars.iter().filter(|b| b.selected).map(|b| b.strategy).collect();
        assert_eq!(selected, vec![StrategyName::XyAscending]);
        assert!((bars[0].relative_width - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bar_caption_uses_label_and_meters() {
        let selector = Selector::new(SelectorConfig::all_experimental());
        let bars = selector.bars(&full_scores(), None);
        let nn = bars
            .iter()
            .find(|b| b.strategy == StrategyName::NearestNeighbor);
        assert_eq!(nn.map(StrategyBar::caption).as_deref(), Some("Optimized: 1.23m"));
    }

    #[test]
    fn bars_skip_unscored_strategies() {
        let scores: ScoreMap = [(StrategyName::XyAscending, 10)].into_iter().collect();
        let bars = Selector::default().bars(&scores, None);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].strategy, StrategyName::XyAscending);
    }

    #[test]
    fn display_meters_rounds_to_centimetres() {
        assert!((display_meters(1234) - 1.23).abs() < 1e-12);
        assert!((display_meters(1235) - 1.24).abs() < 1e-12);
        assert!(display_meters(0).abs() < f64::EPSILON);
        assert!((display_meters(20) - 0.02).abs() < 1e-12);
    }

    // --- activation ---

    #[test]
    fn linear_activation_applies_then_commits_once() {
        for strategy in StrategyName::LINEAR {
            let mut persistence = RecordingPersistence::default();
            let mut ui = RecordingUi::default();
            let outcome = Selector::default().activate(strategy, 42, &mut persistence, &mut ui);
            assert_eq!(outcome, Activation::Applied);
            assert_eq!(
                persistence.calls,
                vec![("apply", 42, Some(strategy)), ("commit", 42, None)]
            );
            assert!(ui.notices.is_empty());
        }
    }

    #[test]
    fn heuristic_activation_never_persists() {
        let selector = Selector::new(SelectorConfig::all_experimental());
        for strategy in StrategyName::HEURISTIC {
            let mut persistence = RecordingPersistence::default();
            let mut ui = RecordingUi::default();
            let outcome = selector.activate(strategy, 7, &mut persistence, &mut ui);
            assert_eq!(outcome, Activation::Unsupported);
            assert!(persistence.calls.is_empty());
            assert_eq!(ui.notices, vec![NOT_SUPPORTED_MESSAGE.to_owned()]);
        }
    }

    // --- hover ---

    #[test]
    fn hover_sends_preview_then_clear() {
        let selector = Selector::default();
        let mut ui = RecordingUi::default();
        selector.hover_enter(StrategyName::YxDescending, &mut ui);
        selector.hover_exit(&mut ui);
        assert_eq!(ui.previews, vec![Some(StrategyName::YxDescending), None]);
        assert!(ui.notices.is_empty());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = SelectorConfig::all_experimental();
        let json = serde_json::to_string(&config).unwrap_or_default();
        assert_eq!(
            json,
            r#"{"enabled_experimental_strategies":["nn","xy_alternating","yx_alternating"]}"#
        );
        let parsed: SelectorConfig = serde_json::from_str(&json).unwrap_or_default();
        assert_eq!(parsed, config);
    }
}
