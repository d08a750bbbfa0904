use schema_rail::{fields, map, ErrorCode, ParseOptions, Schema, SequenceOptions, Value};

fn item() -> Schema {
    Schema::record(fields! { "sku" => Schema::string(), "qty" => Schema::integer() })
}

#[test]
fn sequence_reports_every_failing_element() {
    let schema = Schema::sequence(Schema::integer());
    let input = Value::from(vec![Value::from("a"), Value::Int(2), Value::from("c")]);

    let errors = schema.parse(&input).into_errors().unwrap();
    let paths: Vec<String> = errors.iter().map(|e| e.path().to_string()).collect();
    assert_eq!(paths, ["[0]", "[2]"]);
}

#[test]
fn sequence_partial_keeps_siblings_in_place() {
    let schema = Schema::sequence(item());
    let input = Value::from(vec![
        map! { "sku" => "a", "qty" => 1, "junk" => true },
        map! { "sku" => "b", "qty" => "many" },
        map! { "sku" => "c", "qty" => 3 },
    ]);

    let parsed = schema.parse(&input);
    assert_eq!(parsed.errors().len(), 1);
    assert_eq!(parsed.errors()[0].path().to_string(), "[1].qty");

    let partial = parsed.partial().and_then(Value::as_slice).unwrap();
    assert_eq!(partial.len(), 3);
    assert_eq!(partial[0], map! { "sku" => "a", "qty" => 1 });
    assert_eq!(partial[1], map! { "sku" => "b" });
    assert_eq!(partial[2], map! { "sku" => "c", "qty" => 3 });
}

#[test]
fn sequence_length_bounds() {
    let schema = Schema::sequence_with(Schema::any(), SequenceOptions::default().min_length(1).max_length(2));

    assert!(schema.parse(&Value::from(vec![1])).is_valid());
    let too_few = schema.parse(&Value::List(vec![])).into_errors().unwrap();
    assert_eq!(too_few[0].code(), ErrorCode::RangeViolation);
    let too_many = schema.parse(&Value::from(vec![1, 2, 3])).into_errors().unwrap();
    assert_eq!(too_many[0].message(), "must be at most 2 (got 3)");
}

#[test]
fn sequence_rejects_non_lists() {
    let errors = Schema::sequence(Schema::any()).parse(&map! {}).into_errors().unwrap();
    assert_eq!(errors[0].code(), ErrorCode::TypeMismatch);
}

#[test]
fn tuple_checks_arity_first() {
    let schema = Schema::tuple([Schema::string(), Schema::integer()]);

    assert_eq!(
        schema.parse(&Value::from(vec![Value::from("a"), Value::Int(1)])).into_value(),
        Some(Value::Tuple(vec!["a".into(), 1.into()]))
    );

    let errors = schema.parse(&Value::from(vec![1])).into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), ErrorCode::ArityMismatch);
    assert_eq!(errors[0].message(), "expected 2 elements, got 1");
}

#[test]
fn tuple_element_errors_are_indexed() {
    let schema = Schema::tuple([Schema::string(), Schema::integer()]);
    let parsed = schema.parse(&Value::Tuple(vec![1.into(), "x".into()]));

    let paths: Vec<String> = parsed.errors().iter().map(|e| e.path().to_string()).collect();
    assert_eq!(paths, ["[0]", "[1]"]);
    assert_eq!(parsed.partial(), Some(&Value::Tuple(vec![1.into(), "x".into()])));
}

#[test]
fn map_validates_every_key_and_value() {
    let scores = Schema::map(Schema::string(), Schema::integer());

    assert!(scores.parse(&map! { "ada" => 3, "bob" => 4 }).is_valid());

    let errors = scores.parse(&map! { "ada" => "x", 7 => 1 }).into_errors().unwrap();
    let paths: Vec<String> = errors.iter().map(|e| e.path().to_string()).collect();
    assert_eq!(paths, ["ada", "7"]);
}

#[test]
fn alternation_first_match_wins() {
    let as_int = Schema::integer().coerce();
    let as_text = Schema::string();
    let input = Value::from("42");

    let ab = Schema::alternation([as_int.clone(), as_text.clone()]);
    let ba = Schema::alternation([as_text, as_int]);
    assert_eq!(ab.parse(&input).into_value(), Some(Value::Int(42)));
    assert_eq!(ba.parse(&input).into_value(), Some(Value::from("42")));
}

#[test]
fn alternation_reports_last_failure() {
    let schema = Schema::alternation([Schema::integer(), Schema::boolean()]);
    let errors = schema.parse(&"x".into()).into_errors().unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "expected boolean, got string");
}

#[test]
fn alternation_custom_error_is_a_single_mismatch() {
    let schema = Schema::alternation([Schema::integer(), Schema::boolean()]).error("number or flag");
    let errors = schema.parse(&"x".into()).into_errors().unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), ErrorCode::TypeMismatch);
    assert_eq!(errors[0].message(), "number or flag");
}

#[test]
fn alternation_gives_no_partial() {
    let schema = Schema::alternation([item()]);
    let parsed = schema.parse(&map! { "sku" => "a" });
    assert!(parsed.is_invalid());
    assert!(parsed.partial().is_none());
}

#[test]
fn conjunction_requires_every_child_and_keeps_last_output() {
    let schema = Schema::conjunction([
        Schema::record(fields! { "a" => Schema::integer() }),
        Schema::record(fields! { "b" => Schema::integer() }),
    ]);

    assert_eq!(schema.parse(&map! { "a" => 1, "b" => 2 }).into_value(), Some(map! { "b" => 2 }));

    let errors = schema.parse(&map! { "b" => 2 }).into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path().to_string(), "a");
}

#[test]
fn conjunction_short_circuits() {
    let schema = Schema::conjunction([Schema::integer(), Schema::string()]);
    let errors = schema.parse(&Value::Bool(true)).into_errors().unwrap();
    assert_eq!(errors.len(), 1);
}

fn shapes() -> Schema {
    Schema::discriminated(
        "type",
        [
            Schema::record(fields! { "type" => Schema::literal("circle"), "radius" => Schema::float() }),
            Schema::record(fields! {
                "type" => Schema::literal("rect"),
                "w" => Schema::float(),
                "h" => Schema::float(),
            }),
        ],
    )
}

#[test]
fn discriminator_delegates_to_matching_branch() {
    assert_eq!(
        shapes().parse(&map! { "type" => "rect", "w" => 1.0, "h" => 2.0 }).into_value(),
        Some(map! { "type" => "rect", "w" => 1.0, "h" => 2.0 })
    );

    let errors = shapes().parse(&map! { "type" => "rect", "w" => 1.0 }).into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), ErrorCode::Required);
    assert_eq!(errors[0].path().to_string(), "h");
}

#[test]
fn missing_discriminator_is_required_at_the_key() {
    for input in [map! { "radius" => 1.0 }, map! { "type" => Value::Null }] {
        let errors = shapes().parse(&input).into_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code(), ErrorCode::Required);
        assert_eq!(errors[0].path().to_string(), "type");
    }
}

#[test]
fn unknown_discriminator_lists_allowed_tags() {
    let errors = shapes().parse(&map! { "type" => "hexagon" }).into_errors().unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), ErrorCode::Discriminator);
    assert_eq!(errors[0].path().to_string(), "type");
    assert_eq!(errors[0].issue().get("allowed"), Some(&Value::from(vec!["circle", "rect"])));
}

#[test]
fn discriminator_matches_normalized_under_coercion() {
    let schema = Schema::discriminated(
        "v",
        [
            Schema::record(fields! { "v" => Schema::literal(1) }),
            Schema::record(fields! { "v" => Schema::literal(2), "extra" => Schema::any() }),
        ],
    );
    let input = map! { "v" => "2", "extra" => 0 };

    let strict = schema.parse(&input).into_errors().unwrap();
    assert_eq!(strict[0].code(), ErrorCode::Discriminator);

    let coerced = schema.parse_with(&input, &ParseOptions::new().coerce(true));
    assert_eq!(coerced.into_value(), Some(map! { "v" => 2, "extra" => 0 }));
}

#[test]
fn coercing_discriminated_node_coerces_its_branch() {
    let schema = Schema::discriminated(
        "v",
        [
            Schema::record(fields! { "v" => Schema::literal(1) }),
            Schema::record(fields! { "v" => Schema::literal(2), "n" => Schema::integer() }),
        ],
    )
    .coerce();

    let parsed = schema.parse(&map! { "v" => "2", "n" => " 5 " });
    assert_eq!(parsed.into_value(), Some(map! { "v" => 2, "n" => 5 }));

    let errors = schema.parse(&map! { "v" => "2", "n" => "five" }).into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), ErrorCode::TypeMismatch);
    assert_eq!(errors[0].path().to_string(), "n");
}

#[test]
fn plain_discriminated_branch_stays_strict() {
    let schema = Schema::discriminated(
        "v",
        [Schema::record(fields! { "v" => Schema::literal("a"), "n" => Schema::integer() })],
    );

    let errors = schema.parse(&map! { "v" => "a", "n" => "5" }).into_errors().unwrap();
    assert_eq!(errors[0].code(), ErrorCode::TypeMismatch);
}
