//! Tests for the Output module

use checkreport::core::models::CheckState;
use checkreport::output::{OutputMode, ReportOutput, StatusOutput};

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn report_output_serialization() {
    let output = ReportOutput {
        worst_state: CheckState::Failure,
        passed: false,
        apps: vec!["api".to_string(), "web".to_string()],
        rejected: 0,
        comment: "# Kubechecks Report\n".to_string(),
        written_to: None,
    };

    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"worst_state\":\"failure\""));
    assert!(json.contains("\"passed\":false"));
    assert!(json.contains("\"apps\":[\"api\",\"web\"]"));
    assert!(!json.contains("written_to"));
}

#[test]
fn status_output_serialization() {
    let output = StatusOutput {
        worst_state: CheckState::Warning,
        fail_on: CheckState::Failure,
        passed: true,
    };

    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"worst_state\":\"warning\""));
    assert!(json.contains("\"fail_on\":\"failure\""));
    assert!(json.contains("\"passed\":true"));
}
