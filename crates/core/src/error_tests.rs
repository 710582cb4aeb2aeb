// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn test_error_field_not_found_display() {
    let err = Error::FieldNotFound {
        field: "Description".to_string(),
        dump: "Type: Task\nName: Bar".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("Description"));
    assert!(msg.contains("Type: Task\nName: Bar"));
}

#[test]
fn test_error_wrong_issue_type_display() {
    let err = Error::WrongIssueType {
        id: IssueId::new(12),
        expected: IssueKind::Task,
        actual: IssueKind::Output,
        dump: "MKS Issue: 12\nType: Output".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("issue 12 is not Task"));
    assert!(msg.contains("'Output'"));
    assert!(msg.contains("MKS Issue: 12"));
}

#[test]
fn test_error_unknown_issue_type_display() {
    let err = Error::UnknownIssueType {
        id: IssueId::new(3),
        actual: "Defect".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("unknown issue type 'Defect'"));
    assert!(msg.contains("Task, Inspection, Output"));
}

#[test]
fn test_error_inspection_incomplete_display() {
    let err = Error::InspectionIncomplete(IssueId::new(300));
    let msg = err.to_string();
    assert!(msg.contains("Inspection is not completed"));
    assert!(msg.contains("--force"));
}

#[test]
fn test_error_no_output_for_hash_display() {
    let err = Error::NoOutputForHash("deadbeef".to_string());
    assert!(err.to_string().contains("deadbeef"));
}

#[test]
fn test_error_command_failed_display() {
    let err = Error::CommandFailed {
        command: "git commit -m x".to_string(),
        code: Some(1),
        stderr: "nothing to commit".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "'git commit -m x' failed (exit code 1): nothing to commit"
    );
}

#[test]
fn test_error_command_failed_by_signal_without_stderr() {
    let err = Error::CommandFailed {
        command: "im viewissue 1".to_string(),
        code: None,
        stderr: String::new(),
    };
    assert_eq!(
        err.to_string(),
        "'im viewissue 1' failed (terminated by signal)"
    );
}

#[test]
fn test_error_spawn_display() {
    let err = Error::Spawn {
        command: "im viewissue 1".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
    };
    let msg = err.to_string();
    assert!(msg.contains("failed to launch 'im viewissue 1'"));
    assert!(msg.contains("No such file"));
}
