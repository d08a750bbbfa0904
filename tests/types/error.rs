use schema_rail::{ErrorCode, Issue, PathSegment, ValidationError, ValidationErrors, Value};

#[test]
fn error_codes_have_stable_tags() {
    let tags: Vec<&str> = [
        ErrorCode::TypeMismatch,
        ErrorCode::Required,
        ErrorCode::UnrecognizedKey,
        ErrorCode::ArityMismatch,
        ErrorCode::RangeViolation,
        ErrorCode::EnumMismatch,
        ErrorCode::Discriminator,
        ErrorCode::Custom,
    ]
    .iter()
    .map(|code| code.as_str())
    .collect();

    assert_eq!(
        tags,
        [
            "type_mismatch",
            "required",
            "unrecognized_key",
            "arity_mismatch",
            "range_violation",
            "enum_mismatch",
            "discriminator",
            "custom"
        ]
    );
}

#[test]
fn issue_renders_arguments() {
    let issue = Issue::new("expected {expected}, got {actual} ({missing})")
        .arg("expected", "integer")
        .arg("actual", Value::List(vec![Value::Int(1)]));

    assert_eq!(issue.render(), "expected integer, got [1] ({missing})");
    assert_eq!(issue.get("expected"), Some(&Value::from("integer")));
    assert!(issue.get("missing").is_none());
}

#[test]
fn type_mismatch_reports_both_kinds() {
    let err = ValidationError::type_mismatch("integer", &Value::from("x"));

    assert_eq!(err.code(), ErrorCode::TypeMismatch);
    assert_eq!(err.message(), "expected integer, got string");
    assert_eq!(err.issue().template(), "expected {expected}, got {actual}");
    assert!(err.path().is_root());
}

#[test]
fn with_message_keeps_code_issue_and_path() {
    let err = ValidationError::required().with_prefix("email".into()).with_message("we need it");

    assert_eq!(err.code(), ErrorCode::Required);
    assert_eq!(err.message(), "we need it");
    assert_eq!(err.issue().render(), "is required");
    assert_eq!(err.to_string(), "email: we need it");
}

#[test]
fn at_places_error_below_current_node() {
    let err = ValidationError::custom("passwords differ")
        .at(["confirm"])
        .with_prefix("account".into());

    assert_eq!(err.path().to_string(), "account.confirm");
}

#[test]
fn prefixes_build_root_to_leaf_order() {
    let err = ValidationError::too_big(10, 11)
        .with_prefix(PathSegment::Index(0))
        .with_prefix("items".into());

    assert_eq!(err.path().to_string(), "items[0]");
    assert_eq!(err.message(), "must be at most 10 (got 11)");
}

#[test]
fn enum_mismatch_lists_allowed_values() {
    let err = ValidationError::enum_mismatch(&"x".into(), vec!["a".into(), "b".into()]);
    assert_eq!(err.message(), r#"must be one of ["a", "b"], got "x""#);
}

#[test]
fn mismatch_messages_tell_strings_from_numbers() {
    let text = ValidationError::enum_mismatch(&"2".into(), vec![Value::Int(2)]);
    let number = ValidationError::enum_mismatch(&Value::Int(3), vec![Value::Int(2)]);
    assert_eq!(text.message(), r#"must be one of [2], got "2""#);
    assert_eq!(number.message(), "must be one of [2], got 3");

    let key = ValidationError::unrecognized_key(&"extra".into());
    assert_eq!(key.message(), r#"unrecognized key "extra""#);

    let tag = ValidationError::unknown_discriminator(&"1".into(), vec![Value::Int(1)]);
    assert_eq!(tag.message(), r#"unknown discriminator value "1", expected one of [1]"#);
}

#[test]
fn debug_placeholders_quote_strings() {
    let issue = Issue::new("{bare} vs {quoted:?} vs {absent:?}")
        .arg("bare", "text")
        .arg("quoted", "text");
    assert_eq!(issue.render(), r#"text vs "text" vs {absent:?}"#);
}

#[test]
fn validation_errors_display_as_report() {
    use schema_rail::Schema;

    let errors: ValidationErrors = Schema::integer().validate(&Value::from("x")).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.partial().is_none());
    assert_eq!(errors.to_string(), "expected integer, got string (type_mismatch)");
}
