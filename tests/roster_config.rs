use attendance_core::{AttendanceSession, Batch, Roster, Status};
use serde_json::json;

#[test]
fn parses_the_ui_configuration_shape() {
    let raw = r#"[
        { "id": "Batch-A", "students": ["Arjun Kumar", "Karthik Raja"] },
        { "id": "Batch-B", "students": ["Ajith Krishna"] }
    ]"#;
    let roster = Roster::from_json_str(raw).expect("parse roster");

    assert_eq!(roster.batch_ids().collect::<Vec<_>>(), ["Batch-A", "Batch-B"]);
    assert!(roster.contains_batch("Batch-A"));
    assert!(!roster.contains_batch("Batch-C"));
    assert_eq!(
        roster.students("Batch-A"),
        Some(&["Arjun Kumar".to_string(), "Karthik Raja".to_string()][..])
    );
    assert_eq!(roster.students("Batch-C"), None);
}

#[test]
fn validation_runs_during_deserialization() {
    let duplicate_batch = r#"[
        { "id": "Batch-A", "students": [] },
        { "id": "Batch-A", "students": [] }
    ]"#;
    let err = Roster::from_json_str(duplicate_batch).unwrap_err();
    assert!(err.to_string().contains("duplicate batch id: Batch-A"));

    let duplicate_student = r#"[
        { "id": "Batch-A", "students": ["A", "A"] }
    ]"#;
    let err = Roster::from_json_str(duplicate_student).unwrap_err();
    assert!(err.to_string().contains("duplicate student A in batch Batch-A"));
}

#[test]
fn serializes_back_to_the_configuration_shape() {
    let roster = Roster::new(vec![Batch {
        id: "Batch-A".to_string(),
        students: vec!["A".to_string(), "B".to_string()],
    }])
    .expect("valid roster");

    assert_eq!(
        serde_json::to_value(&roster).expect("serialize"),
        json!([{ "id": "Batch-A", "students": ["A", "B"] }])
    );
}

#[test]
fn an_empty_batch_is_legal_configuration() {
    let roster = Roster::new(vec![Batch {
        id: "Batch-A".to_string(),
        students: vec![],
    }])
    .expect("valid roster");
    assert_eq!(roster.students("Batch-A"), Some(&[][..]));
}

#[test]
fn a_configured_roster_drives_a_session_end_to_end() {
    let raw = r#"[{ "id": "Evening", "students": ["A", "B"] }]"#;
    let roster = Roster::from_json_str(raw).expect("parse roster");
    let mut session = AttendanceSession::new(roster);

    session.select_batch("Evening").expect("select");
    session.record_marking("A", Status::Present).expect("mark");
    session.record_marking("B", Status::Absent).expect("mark");
    let summary = session.submit().expect("submit");

    assert_eq!(summary.batch_name, "Evening");
    assert_eq!(summary.percentage, 50);
}
