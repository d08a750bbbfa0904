//! The key-value resolver shared by both record flavours.
//!
//! Declared fields are walked in declaration order, which only affects the
//! order of reported errors. A missing key and a key holding an empty
//! sentinel are the same thing here, so defaults and required errors apply
//! uniformly to absent and blank input.
use crate::engine::{composite, ParseContext};
use crate::schema::{Presence, RecordOptions, RecordSchema, RecordShape, Schema, UnknownKeys};
use crate::types::{PathSegment, ValidationError, Value};

type Entry<'v> = (&'v Value, &'v Value);

pub(super) fn record(cx: &mut ParseContext<'_>, record: &RecordSchema) -> Option<Value> {
    let input = cx.input;
    let Some(entries) = entries(input, record.shape() == RecordShape::Pairs) else {
        cx.fail(ValidationError::type_mismatch("record", input));
        return None;
    };
    let normalize = cx.coerces();
    let options = record.options();
    let unknown: Vec<Entry<'_>> =
        entries.iter().copied().filter(|(key, _)| record.field(key, normalize).is_none()).collect();

    if matches!(options.unknown_keys, UnknownKeys::Error) {
        let mut reported: Vec<&Value> = Vec::new();
        for (key, _) in &unknown {
            if reported.iter().any(|seen| seen.key_matches(key, normalize)) {
                continue;
            }
            reported.push(*key);
            cx.fail(ValidationError::unrecognized_key(key));
        }
    }

    let mut output: Vec<(Value, Value)> = Vec::with_capacity(record.fields().len());
    for field in record.fields() {
        let segment = PathSegment::key(field.key());
        let present = find(&entries, field.key(), normalize)
            .filter(|value| !is_empty(value, field.schema(), options));

        let Some(value) = present else {
            match field.schema().presence() {
                Presence::Optional => {}
                Presence::Default(value) => output.push((field.key().clone(), value.into_owned())),
                Presence::Required => cx.errors.absorb(&segment, [ValidationError::required()]),
            }
            continue;
        };

        let child = cx.descend(field.schema(), value, &segment).run();
        match cx.absorb(Some(&segment), child) {
            Ok(parsed) | Err(Some(parsed)) => output.push((field.key().clone(), parsed)),
            Err(None) => {}
        }
    }

    match &options.unknown_keys {
        UnknownKeys::Preserve => {
            output.extend(unknown.iter().map(|(key, value)| ((*key).clone(), (*value).clone())));
        }
        UnknownKeys::PreserveWith { key, value } => {
            output.extend(composite::parse_entries(cx, unknown.iter().copied(), key, value));
        }
        UnknownKeys::Strip | UnknownKeys::Error => {}
    }

    Some(match record.shape() {
        RecordShape::Map => Value::Map(output.into_iter().collect()),
        RecordShape::Pairs => Value::List(
            output.into_iter().map(|(key, value)| Value::Tuple(vec![key, value])).collect(),
        ),
    })
}

/// Key/value entries of a map, or of a list of two-element pairs when allowed.
pub(super) fn entries(input: &Value, allow_pairs: bool) -> Option<Vec<Entry<'_>>> {
    match input {
        Value::Map(map) => Some(map.iter().collect()),
        Value::List(items) | Value::Tuple(items) if allow_pairs => items
            .iter()
            .map(|item| match item.as_slice() {
                Some([key, value]) => Some((key, value)),
                _ => None,
            })
            .collect(),
        _ => None,
    }
}

/// First entry matching `key` exactly, falling back to normalized comparison.
pub(super) fn find<'v>(entries: &[Entry<'v>], key: &Value, normalize: bool) -> Option<&'v Value> {
    entries
        .iter()
        .find(|(k, _)| *k == key)
        .or_else(|| normalize.then(|| entries.iter().find(|(k, _)| k.key_matches(key, true))).flatten())
        .map(|(_, value)| *value)
}

/// Whether a present value stands for absence: a configured sentinel, or a
/// `Null` the field schema would not accept as a value.
fn is_empty(value: &Value, schema: &Schema, options: &RecordOptions) -> bool {
    options.empty_values.contains(value) || (value.is_null() && !schema.accepts_null())
}
