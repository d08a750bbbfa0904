use schema_rail::{
    fields, map, ErrorCode, ParseOptions, Path, RecordOptions, Schema, UnknownKeys, Value,
};

fn user() -> Schema {
    Schema::record(fields! {
        "name" => Schema::string(),
        "email" => Schema::string(),
        "age" => Schema::integer().optional(),
        "role" => Schema::string().default("member"),
    })
}

#[test]
fn valid_record_applies_defaults_and_skips_optionals() {
    let parsed = user().parse(&map! { "name" => "ada", "email" => "a@b.c" });
    assert_eq!(
        parsed.into_value(),
        Some(map! { "name" => "ada", "email" => "a@b.c", "role" => "member" })
    );
}

#[test]
fn independent_required_fields_fail_together() {
    let errors = user().parse(&map! {}).into_errors().unwrap();

    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.code() == ErrorCode::Required));
    let paths: Vec<String> = errors.iter().map(|e| e.path().to_string()).collect();
    assert_eq!(paths, ["name", "email"]);
}

#[test]
fn invalid_fields_are_dropped_from_partial_output() {
    let parsed = user().parse(&map! { "name" => "ada", "email" => 5, "age" => 30 });

    assert_eq!(parsed.errors().len(), 1);
    assert_eq!(parsed.errors()[0].path().to_string(), "email");
    assert_eq!(
        parsed.partial(),
        Some(&map! { "name" => "ada", "age" => 30, "role" => "member" })
    );
}

#[test]
fn nested_errors_carry_root_to_leaf_paths() {
    let schema = Schema::record(fields! {
        "id" => Schema::integer(),
        "profile" => Schema::record(fields! {
            "nick" => Schema::string(),
            "age" => Schema::integer_with(schema_rail::NumberOptions::default().min(0)),
        }),
    });

    let errors = schema
        .parse(&map! { "id" => 1, "profile" => map! { "nick" => "x", "age" => -1 } })
        .into_errors()
        .unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), ErrorCode::RangeViolation);
    assert_eq!(errors[0].path(), &Path::root().join("profile").join("age"));
}

#[test]
fn null_counts_as_missing() {
    let parsed = user().parse(&map! { "name" => "ada", "email" => Value::Null, "role" => Value::Null });
    let errors = parsed.errors();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), ErrorCode::Required);
    assert_eq!(parsed.partial().and_then(|v| v.get("role")), Some(&Value::from("member")));
}

#[test]
fn null_is_kept_for_fields_that_accept_it() {
    let schema = Schema::record(fields! { "note" => Schema::string().nullable() });
    assert_eq!(
        schema.parse(&map! { "note" => Value::Null }).into_value(),
        Some(map! { "note" => Value::Null })
    );
}

#[test]
fn empty_sentinels_behave_like_absent_keys() {
    let options = RecordOptions::default().empty_values([""]);
    let schema = Schema::record_with(
        fields! {
            "title" => Schema::string(),
            "lang" => Schema::string().default("en"),
            "tag" => Schema::string().optional(),
        },
        options,
    );

    let blank = schema.parse(&map! { "title" => "", "lang" => "", "tag" => "" });
    let absent = schema.parse(&map! {});
    assert_eq!(blank, absent);
    assert_eq!(blank.partial(), Some(&map! { "lang" => "en" }));
    assert_eq!(blank.errors()[0].code(), ErrorCode::Required);
}

#[test]
fn unknown_keys_are_stripped_by_default() {
    let schema = Schema::record(fields! { "a" => Schema::integer() });
    assert_eq!(schema.parse(&map! { "a" => 1, "b" => 2 }).into_value(), Some(map! { "a" => 1 }));
}

#[test]
fn strict_records_reject_each_unknown_key_once() {
    let schema = Schema::record_with(fields! { "a" => Schema::integer() }, RecordOptions::strict());

    assert!(schema.parse(&map! { "a" => 1 }).is_valid());

    let errors = schema.parse(&map! { "a" => 1, "zzz" => true }).into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), ErrorCode::UnrecognizedKey);
    assert_eq!(errors[0].issue().get("key"), Some(&Value::from("zzz")));
    assert!(errors[0].path().is_root());
}

#[test]
fn strict_pairs_deduplicate_repeated_unknown_keys() {
    let schema = Schema::pairs_with(fields! { "a" => Schema::integer() }, RecordOptions::strict());
    let input = Value::List(vec![
        Value::Tuple(vec!["x".into(), 1.into()]),
        Value::Tuple(vec!["x".into(), 2.into()]),
        Value::Tuple(vec!["a".into(), 3.into()]),
    ]);

    let errors = schema.parse(&input).into_errors().unwrap();
    assert_eq!(errors.len(), 1);
}

#[test]
fn preserve_copies_unknown_pairs_verbatim() {
    let schema = Schema::record_with(fields! { "a" => Schema::integer() }, RecordOptions::preserve());
    assert_eq!(
        schema.parse(&map! { "extra" => vec![1], "a" => 1 }).into_value(),
        Some(map! { "a" => 1, "extra" => vec![1] })
    );
}

#[test]
fn preserve_with_schema_validates_unknown_pairs() {
    let schema = Schema::record_with(
        fields! { "id" => Schema::integer() },
        RecordOptions::preserve_with(Schema::string(), Schema::boolean()),
    );

    assert_eq!(
        schema.parse(&map! { "id" => 1, "beta" => true }).into_value(),
        Some(map! { "id" => 1, "beta" => true })
    );

    let errors = schema.parse(&map! { "id" => 1, "beta" => "no" }).into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path().to_string(), "beta");
}

#[test]
fn unknown_keys_policy_can_be_replaced() {
    let options = RecordOptions::strict().unknown_keys(UnknownKeys::Strip);
    let schema = Schema::record_with(fields! { "a" => Schema::any() }, options);
    assert!(schema.parse(&map! { "a" => 1, "b" => 2 }).is_valid());
}

#[test]
fn pairs_accept_maps_and_pair_lists_and_output_tuples() {
    let schema = Schema::pairs(fields! { "x" => Schema::integer(), "y" => Schema::integer() });
    let expected = Value::List(vec![
        Value::Tuple(vec!["x".into(), 1.into()]),
        Value::Tuple(vec!["y".into(), 2.into()]),
    ]);

    assert_eq!(schema.parse(&map! { "y" => 2, "x" => 1 }).into_value(), Some(expected.clone()));
    let pair_list = Value::List(vec![
        Value::List(vec!["y".into(), 2.into()]),
        Value::List(vec!["x".into(), 1.into()]),
    ]);
    assert_eq!(schema.parse(&pair_list).into_value(), Some(expected));
}

#[test]
fn malformed_pair_lists_are_type_mismatches() {
    let schema = Schema::pairs(fields! { "x" => Schema::any() });
    let errors = schema.parse(&Value::from(vec![1, 2])).into_errors().unwrap();
    assert_eq!(errors[0].code(), ErrorCode::TypeMismatch);
}

#[test]
fn records_reject_non_maps() {
    let errors = user().parse(&Value::from("nope")).into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), ErrorCode::TypeMismatch);
    assert!(errors[0].path().is_root());
}

#[test]
fn key_lookup_is_normalized_under_coercion() {
    let schema = Schema::record(fields! { 1 => Schema::string(), "2" => Schema::string() });
    let input = map! { "1" => "one", 2 => "two" };

    assert!(schema.parse(&input).is_invalid());
    assert_eq!(
        schema.parse_with(&input, &ParseOptions::new().coerce(true)).into_value(),
        Some(map! { 1 => "one", "2" => "two" })
    );
}

#[test]
fn exact_keys_win_over_normalized_matches() {
    let schema = Schema::record(fields! { "1" => Schema::any() }).coerce();
    let input = map! { 1 => "int", "1" => "text" };
    assert_eq!(schema.parse(&input).into_value(), Some(map! { "1" => "text" }));
}
