use crate::engine::{resolver, ParseContext};
use crate::schema::{DiscriminatedSchema, MapSchema, Schema, SequenceSchema};
use crate::types::{PathSegment, ValidationError, Value};

/// Parses every element, never stopping at the first failure. A failed
/// element keeps its partial value, or the raw input, at its index.
pub(super) fn sequence(cx: &mut ParseContext<'_>, sequence: &SequenceSchema) -> Option<Value> {
    let input = cx.input;
    let Some(items) = input.as_slice() else {
        cx.fail(ValidationError::type_mismatch("sequence", input));
        return None;
    };

    let options = sequence.options();
    if let Some(min) = options.min_length.filter(|min| items.len() < *min) {
        cx.fail(ValidationError::too_small(min as i64, items.len() as i64));
    }
    if let Some(max) = options.max_length.filter(|max| items.len() > *max) {
        cx.fail(ValidationError::too_big(max as i64, items.len() as i64));
    }

    let output = positional(cx, items.iter().map(|item| (sequence.inner(), item)));
    Some(Value::List(output))
}

/// Fixed-arity positional parse. An arity mismatch is reported on its own,
/// without looking at the elements.
pub(super) fn tuple(cx: &mut ParseContext<'_>, schemas: &[Schema]) -> Option<Value> {
    let input = cx.input;
    let Some(items) = input.as_slice() else {
        cx.fail(ValidationError::type_mismatch("tuple", input));
        return None;
    };
    if items.len() != schemas.len() {
        cx.fail(ValidationError::arity_mismatch(schemas.len(), items.len()));
        return None;
    }
    Some(Value::Tuple(positional(cx, schemas.iter().zip(items))))
}

fn positional<'v, I>(cx: &mut ParseContext<'_>, pairs: I) -> Vec<Value>
where
    I: IntoIterator<Item = (&'v Schema, &'v Value)>,
{
    pairs
        .into_iter()
        .enumerate()
        .map(|(index, (schema, item))| {
            let segment = PathSegment::Index(index);
            let child = cx.descend(schema, item, &segment).run();
            match cx.absorb(Some(&segment), child) {
                Ok(value) | Err(Some(value)) => value,
                Err(None) => item.clone(),
            }
        })
        .collect()
}

pub(super) fn map(cx: &mut ParseContext<'_>, map: &MapSchema) -> Option<Value> {
    let input = cx.input;
    let Some(entries) = resolver::entries(input, false) else {
        cx.fail(ValidationError::type_mismatch("map", input));
        return None;
    };
    let parsed = parse_entries(cx, entries, map.key(), map.value());
    Some(Value::Map(parsed.into_iter().collect()))
}

/// Parses each key and value against the given schemas, both located at the
/// entry's key. Entries whose key fails are dropped from the output.
pub(super) fn parse_entries<'v, I>(
    cx: &mut ParseContext<'_>,
    entries: I,
    key_schema: &Schema,
    value_schema: &Schema,
) -> Vec<(Value, Value)>
where
    I: IntoIterator<Item = (&'v Value, &'v Value)>,
{
    let mut output = Vec::new();
    for (key, value) in entries {
        let segment = PathSegment::key(key);
        let key_child = cx.descend(key_schema, key, &segment).run();
        let parsed_key = cx.absorb(Some(&segment), key_child);
        let value_child = cx.descend(value_schema, value, &segment).run();
        let parsed_value = cx.absorb(Some(&segment), value_child);
        if let (Ok(key), Ok(value) | Err(Some(value))) = (parsed_key, parsed_value) {
            output.push((key, value));
        }
    }
    output
}

/// First child to parse wins. Without a custom error, the last child's
/// errors are reported.
pub(super) fn alternation(cx: &mut ParseContext<'_>, children: &[Schema]) -> Option<Value> {
    let mut last = None;
    for child in children {
        let attempt = cx.nested(child).run();
        if attempt.is_valid() {
            #[cfg(feature = "tracing")]
            tracing::trace!(branch = child.kind_name(), path = %cx.path, "alternative matched");
            return cx.absorb(None, attempt).ok();
        }
        last = Some(attempt);
    }

    if cx.schema.metadata().custom_error().is_some() {
        cx.fail(ValidationError::type_mismatch("alternation", cx.input));
    } else if let Some(attempt) = last {
        let _ = cx.absorb(None, attempt);
    }
    None
}

/// Every child parses the same input; the last output wins.
pub(super) fn conjunction(cx: &mut ParseContext<'_>, children: &[Schema]) -> Option<Value> {
    let mut output = None;
    for child in children {
        let attempt = cx.nested(child).run();
        output = Some(cx.absorb(None, attempt).ok()?);
    }
    output
}

/// Reads the discriminator and delegates the whole input to the matching branch.
/// A coercing node parses the chosen branch with coercion too, so a tag that
/// matched after normalization also satisfies the branch's own literal.
pub(super) fn discriminated(cx: &mut ParseContext<'_>, table: &DiscriminatedSchema) -> Option<Value> {
    let input = cx.input;
    let Some(entries) = resolver::entries(input, true) else {
        cx.fail(ValidationError::type_mismatch("record", input));
        return None;
    };
    let normalize = cx.coerces();
    let segment = PathSegment::key(table.key());

    let Some(tag) = resolver::find(&entries, table.key(), normalize).filter(|tag| !tag.is_null()) else {
        cx.errors.absorb(&segment, [ValidationError::required()]);
        return None;
    };
    let Some(branch) = table.branch(tag, normalize) else {
        let allowed = table.branches().iter().map(|(literal, _)| literal.clone()).collect();
        cx.errors.absorb(&segment, [ValidationError::unknown_discriminator(tag, allowed)]);
        return None;
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(tag = %tag, path = %cx.path, "discriminator matched");
    let attempt = cx.nested(branch);
    let attempt = if normalize { attempt.coercing() } else { attempt }.run();
    match cx.absorb(None, attempt) {
        Ok(value) => Some(value),
        Err(partial) => partial,
    }
}
