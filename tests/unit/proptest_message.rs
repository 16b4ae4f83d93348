//! Property-based tests for the result aggregate
//!
//! Uses proptest to verify properties that should hold for all inputs.

use checkreport::core::models::CheckState;
use checkreport::core::services::RenderOptions;
use checkreport::core::services::render::RESULT_SEPARATOR;
use proptest::prelude::*;

use crate::common::{message, result};

fn any_state() -> impl Strategy<Value = CheckState> {
    prop::sample::select(CheckState::ALL.to_vec())
}

/// Results as `(app index, state, summary)` in arrival order
fn any_arrivals() -> impl Strategy<Value = Vec<(usize, CheckState, String)>> {
    prop::collection::vec((0usize..4, any_state(), "[a-z]{0,8}"), 0..30)
}

fn app_name(i: usize) -> String {
    format!("app-{i}")
}

proptest! {
    /// The worst state is the maximum of every recorded state
    #[test]
    fn worst_state_is_max(arrivals in any_arrivals()) {
        let message = message();
        for i in 0..4 {
            message.register_app(&app_name(i));
        }
        for (app, state, summary) in &arrivals {
            message.add_result(&app_name(*app), result(*state, summary, "")).unwrap();
        }

        let expected = arrivals.iter().map(|(_, s, _)| *s).max().unwrap_or(CheckState::None);
        prop_assert_eq!(message.worst_state(), expected);
    }

    /// Interleaving across applications never changes the rendered report
    #[test]
    fn render_ignores_cross_app_interleaving(arrivals in any_arrivals()) {
        let interleaved = message();
        let grouped = message();
        for i in 0..4 {
            interleaved.register_app(&app_name(i));
        }
        for i in (0..4).rev() {
            grouped.register_app(&app_name(i));
        }

        for (app, state, summary) in &arrivals {
            interleaved.add_result(&app_name(*app), result(*state, summary, "d")).unwrap();
        }
        // same per-app order, applications fed one after another in reverse
        for target in (0..4).rev() {
            for (app, state, summary) in arrivals.iter().filter(|(a, _, _)| *a == target) {
                grouped.add_result(&app_name(*app), result(*state, summary, "d")).unwrap();
            }
        }

        let options = RenderOptions::default();
        prop_assert_eq!(interleaved.build_comment(&options), grouped.build_comment(&options));
    }

    /// Suppressing an app removes exactly its contribution
    #[test]
    fn suppression_removes_app(arrivals in any_arrivals(), victim in 0usize..4) {
        let message = message();
        for i in 0..4 {
            message.register_app(&app_name(i));
        }
        for (app, state, summary) in &arrivals {
            message.add_result(&app_name(*app), result(*state, summary, "")).unwrap();
        }
        message.suppress(&app_name(victim));

        let expected = arrivals
            .iter()
            .filter(|(a, _, _)| *a != victim)
            .map(|(_, s, _)| *s)
            .max()
            .unwrap_or(CheckState::None);
        prop_assert_eq!(message.worst_state(), expected);
        let victim_heading = format!("`{}`", app_name(victim));
        prop_assert!(!message.build_comment(&RenderOptions::default()).contains(&victim_heading));
    }

    /// One separator between each pair of adjacent results, even with hyphen-heavy details
    #[test]
    fn separator_count(details in prop::collection::vec("[a-z\\- ]{0,12}", 1..6)) {
        let message = message();
        message.register_app("app");
        for d in &details {
            message.add_result("app", result(CheckState::Success, "s", d)).unwrap();
        }
        let comment = message.build_comment(&RenderOptions::default());
        prop_assert_eq!(comment.matches(RESULT_SEPARATOR).count(), details.len() - 1);
    }
}
