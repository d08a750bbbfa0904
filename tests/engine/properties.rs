use proptest::prelude::*;
use schema_rail::{
    fields, map, ErrorCode, Map, Path, RecordOptions, Schema, Validation, Value,
};

fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(Value::Int),
        (-1.0e6f64..1.0e6).prop_map(Value::Float),
        "[a-z0-9 ]{0,6}".prop_map(Value::Str),
    ]
}

fn any_value() -> impl Strategy<Value = Value> {
    scalar_value().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec(("[a-c]", inner), 0..4)
                .prop_map(|entries| Value::Map(entries.into_iter().collect::<Map>())),
        ]
    })
}

fn record_input() -> impl Strategy<Value = Value> {
    prop::collection::vec(("[a-e]", any_value()), 0..6)
        .prop_map(|entries| Value::Map(entries.into_iter().collect::<Map>()))
}

fn catalog() -> Schema {
    Schema::record_with(
        fields! {
            "a" => Schema::integer().coerce(),
            "b" => Schema::sequence(Schema::alternation([Schema::integer(), Schema::string().coerce()]))
                .optional(),
            "c" => Schema::string().default("none"),
            "d" => Schema::map(Schema::string(), Schema::any()).nullable().optional(),
        },
        RecordOptions::preserve(),
    )
}

proptest! {
    #[test]
    fn parse_is_idempotent(input in record_input()) {
        let schema = catalog();
        if let Validation::Valid(first) = schema.parse(&input) {
            prop_assert_eq!(schema.parse(&first), Validation::Valid(first.clone()));
        }
    }

    #[test]
    fn pairs_parse_is_idempotent(input in record_input()) {
        let schema = Schema::pairs(fields! {
            "a" => Schema::number().coerce(),
            "b" => Schema::boolean().coerce().optional(),
        });
        if let Validation::Valid(first) = schema.parse(&input) {
            prop_assert_eq!(schema.parse(&first), Validation::Valid(first.clone()));
        }
    }

    #[test]
    fn sequence_best_effort_keeps_every_position(items in prop::collection::vec(any_value(), 0..8)) {
        let schema = Schema::sequence(Schema::integer());
        let (best, errors) = schema.parse(&Value::List(items.clone())).into_parts();

        let best = best.unwrap_or_default();
        let parsed = best.as_slice().unwrap_or_default();
        prop_assert_eq!(parsed.len(), items.len());
        for error in &errors {
            prop_assert_eq!(error.path().len(), 1);
        }
        let failing = items.iter().filter(|item| !matches!(item, Value::Int(_))).count();
        prop_assert_eq!(errors.len(), failing);
    }

    #[test]
    fn strict_records_report_each_distinct_unknown_key(input in record_input()) {
        let schema = Schema::record_with(
            fields! { "a" => Schema::any().optional(), "b" => Schema::any().optional() },
            RecordOptions::strict(),
        );
        let unknown = input.as_map().map_or(0, |m| {
            m.keys().filter(|k| !matches!(k.as_str(), Some("a" | "b"))).count()
        });

        let errors = schema.parse(&input).into_errors().map(|e| e.len()).unwrap_or(0);
        prop_assert_eq!(errors, unknown);
    }

    #[test]
    fn blank_sentinel_matches_absence(blank in prop::bool::ANY, present in prop::bool::ANY) {
        let schema = Schema::record_with(
            fields! {
                "x" => Schema::string(),
                "y" => Schema::string().default("d"),
                "z" => Schema::string().optional(),
            },
            RecordOptions::default().empty_values([""]),
        );
        let mut input = Map::new();
        if present {
            let fill = if blank { "" } else { "v" };
            input.insert("x", fill);
            input.insert("y", fill);
            input.insert("z", fill);
        }

        let parsed = schema.parse(&Value::Map(input));
        if present && !blank {
            prop_assert!(parsed.is_valid());
        } else {
            prop_assert_eq!(parsed, schema.parse(&map! {}));
        }
    }
}

#[test]
fn error_path_ignores_sibling_declaration_order() {
    let leaf = || Schema::record(fields! { "inner" => Schema::integer_with(
        schema_rail::NumberOptions::default().max(5),
    ) });
    let forward = Schema::record(fields! { "a" => Schema::any(), "outer" => leaf(), "z" => Schema::any() });
    let backward = Schema::record(fields! { "z" => Schema::any(), "outer" => leaf(), "a" => Schema::any() });
    let input = map! { "a" => 1, "z" => 2, "outer" => map! { "inner" => 9 } };

    let expected = Path::root().join("outer").join("inner");
    for schema in [forward, backward] {
        let errors = schema.parse(&input).into_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code(), ErrorCode::RangeViolation);
        assert_eq!(errors[0].path(), &expected);
    }
}
