use super::*;
use serde_json::json;

#[test]
fn test_parses_projects_in_order() {
    let dataset = Dataset::from_value(&json!([
        {"id": "a", "name": "alpha", "description": "first", "maintainer": {"name": "Ada"}},
        {"id": "b", "name": "beta", "description": "", "maintainer": {"name": ""}},
    ]))
    .unwrap();

    assert_eq!(dataset.len(), 2);
    let projects = dataset.projects();
    assert_eq!(projects[0].id.as_str(), "a");
    assert_eq!(projects[0].maintainer.as_ref().unwrap().name, "Ada");
    assert_eq!(projects[1].name, "beta");
}

#[test]
fn test_optional_fields_default() {
    let dataset = Dataset::from_value(&json!([{"id": "a", "name": "alpha"}])).unwrap();

    let project = &dataset.projects()[0];
    assert_eq!(project.description, "");
    assert!(project.maintainer.is_none());
}

#[test]
fn test_null_text_fields_read_as_blank() {
    let dataset = Dataset::from_value(&json!([
        {"id": "a", "name": "alpha", "description": null, "maintainer": {"name": null}},
        {"id": "b", "name": "beta", "maintainer": null},
    ]))
    .unwrap();

    let projects = dataset.projects();
    assert_eq!(projects[0].description, "");
    assert_eq!(projects[0].maintainer.as_ref().unwrap().name, "");
    assert!(projects[1].maintainer.is_none());
}

#[test]
fn test_wrong_shapes_are_still_rejected() {
    let err = Dataset::from_value(&json!([{"id": "a", "name": "alpha", "description": 7}]))
        .unwrap_err();
    assert!(matches!(err, DatasetError::InvalidProject { index: 0, .. }));

    let err = Dataset::from_value(&json!([{"id": null, "name": "alpha"}])).unwrap_err();
    assert!(matches!(err, DatasetError::InvalidProject { index: 0, .. }));

    let err = Dataset::from_value(&json!([{"id": "a", "name": "alpha"}, "beta"])).unwrap_err();
    assert!(matches!(err, DatasetError::InvalidProject { index: 1, .. }));
}

#[test]
fn test_numeric_ids_become_text() {
    let dataset = Dataset::from_value(&json!([{"id": 42, "name": "answer"}])).unwrap();

    assert_eq!(dataset.projects()[0].id.as_str(), "42");
}

#[test]
fn test_rejects_non_sequence() {
    let err = Dataset::from_value(&json!({"id": "a", "name": "alpha"})).unwrap_err();
    assert!(matches!(err, DatasetError::NotASequence { found: "object" }));

    let err = Dataset::from_value(&json!("alpha")).unwrap_err();
    assert!(matches!(err, DatasetError::NotASequence { found: "string" }));

    let err = Dataset::from_value(&Value::Null).unwrap_err();
    assert!(matches!(err, DatasetError::NotASequence { found: "null" }));
}

#[test]
fn test_rejects_empty_sequence() {
    let err = Dataset::from_value(&json!([])).unwrap_err();
    assert!(matches!(err, DatasetError::Empty));

    let err = Dataset::new(vec![]).unwrap_err();
    assert!(matches!(err, DatasetError::Empty));
}

#[test]
fn test_reports_malformed_project_index() {
    let err = Dataset::from_value(&json!([
        {"id": "a", "name": "alpha"},
        {"id": "", "name": "blank id"},
    ]))
    .unwrap_err();

    assert!(matches!(err, DatasetError::InvalidProject { index: 1, .. }));

    let err = Dataset::from_value(&json!([{"name": "no id"}])).unwrap_err();
    assert!(matches!(err, DatasetError::InvalidProject { index: 0, .. }));
}

#[test]
fn test_from_json_str_rejects_invalid_json() {
    let err = Dataset::from_json_str("[{").unwrap_err();
    assert!(matches!(err, DatasetError::Json(_)));
}
