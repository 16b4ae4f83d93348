//! Tests for the result aggregate
//!
//! Covers suppression precedence and behaviour under concurrent producers.

use std::sync::{Arc, Barrier};
use std::thread;

use checkreport::core::models::CheckState;
use checkreport::core::services::{MessageError, RenderOptions};

use crate::common::{message, record, result};

// =============================================================================
// Suppression
// =============================================================================

#[test]
fn suppressed_app_is_excluded_everywhere() {
    let message = message();
    record(&message, "keep", &[result(CheckState::Success, "ok", "fine")]);
    record(&message, "drop", &[result(CheckState::Panic, "boom", "stack")]);

    message.suppress("drop");

    assert_eq!(message.worst_state(), CheckState::Success);
    let comment = message.build_comment(&RenderOptions::default());
    assert!(!comment.contains("`drop`"));
    assert!(!comment.contains("boom"));
    assert!(comment.contains("`keep`"));
}

#[test]
fn writes_after_suppression_stay_hidden() {
    let message = message();
    record(&message, "late", &[]);
    message.suppress("late");

    assert_eq!(message.add_result("late", result(CheckState::Error, "x", "y")), Ok(()));
    message.register_app("late");

    assert_eq!(message.worst_state(), CheckState::None);
    assert_eq!(message.build_comment(&RenderOptions::default()), "# Kubechecks Report\n");
}

#[test]
fn suppression_is_permanent() {
    let message = message();
    message.suppress("app");
    message.suppress("app");
    message.register_app("app");
    assert!(message.is_suppressed("app"));
    assert!(message.app_names().is_empty());
}

// =============================================================================
// Unregistered applications
// =============================================================================

#[test]
fn unregistered_app_reports_error_without_side_effects() {
    let message = message();
    record(&message, "real", &[result(CheckState::Success, "ok", "")]);

    let err = message.add_result("typo", result(CheckState::Failure, "f", "")).unwrap_err();
    assert_eq!(err, MessageError::UnregisteredApplication("typo".to_string()));
    assert_eq!(err.to_string(), "application not registered: typo");

    assert_eq!(message.worst_state(), CheckState::Success);
    assert_eq!(message.app_names(), ["real"]);
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn concurrent_producers_render_deterministically() {
    let apps = ["zeta", "alpha", "mu", "beta", "omega"];

    let render_once = |reverse: bool| {
        let message = Arc::new(message());
        let barrier = Arc::new(Barrier::new(apps.len()));
        let mut order: Vec<&str> = apps.to_vec();
        if reverse {
            order.reverse();
        }

        let handles: Vec<_> = order
            .into_iter()
            .map(|app| {
                let message = Arc::clone(&message);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    message.register_app(app);
                    barrier.wait();
                    for i in 0..20 {
                        let state = if i == 7 { CheckState::Warning } else { CheckState::Success };
                        message
                            .add_result(app, result(state, &format!("{app}-{i}"), "details"))
                            .unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        message.build_comment(&RenderOptions::default())
    };

    let first = render_once(false);
    for _ in 0..5 {
        assert_eq!(render_once(true), first);
        assert_eq!(render_once(false), first);
    }
}

#[test]
fn reads_during_writes_see_whole_results() {
    let message = Arc::new(message());
    message.register_app("app");

    let writer = {
        let message = Arc::clone(&message);
        thread::spawn(move || {
            for _ in 0..200 {
                message.add_result("app", result(CheckState::Failure, "f", "d")).unwrap();
            }
        })
    };

    let mut last = CheckState::None;
    for _ in 0..200 {
        let state = message.worst_state();
        // monotonic: once failure is visible it never goes back
        assert!(state >= last);
        assert!(state == CheckState::None || state == CheckState::Failure);
        last = state;
    }
    writer.join().unwrap();

    assert_eq!(message.worst_state(), CheckState::Failure);
    let snapshot = message.snapshot();
    let (_, results) = snapshot.visible().next().unwrap();
    assert_eq!(results.len(), 200);
}

#[test]
fn concurrent_suppression_wins() {
    let message = Arc::new(message());
    message.register_app("flaky");

    let writer = {
        let message = Arc::clone(&message);
        thread::spawn(move || {
            for _ in 0..100 {
                message.add_result("flaky", result(CheckState::Error, "e", "")).unwrap();
            }
        })
    };
    message.suppress("flaky");
    writer.join().unwrap();

    assert_eq!(message.worst_state(), CheckState::None);
    assert!(!message.build_comment(&RenderOptions::default()).contains("flaky"));
}
