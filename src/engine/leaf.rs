use crate::engine::ParseContext;
use crate::schema::{EnumEntry, Scalar};
use crate::types::{ValidationError, Value};

pub(super) fn scalar(cx: &mut ParseContext<'_>, scalar: &Scalar) -> Option<Value> {
    let Some(value) = scalar.accept(cx.input, cx.coerces()) else {
        cx.fail(ValidationError::type_mismatch(scalar.kind().name(), cx.input));
        return None;
    };
    let violations = scalar.violations(&value);
    if violations.is_empty() {
        Some(value)
    } else {
        cx.errors.extend(violations);
        None
    }
}

pub(super) fn literal(cx: &mut ParseContext<'_>, expected: &Value) -> Option<Value> {
    if loosely_equal(expected, cx.input, cx.coerces()) {
        return Some(expected.clone());
    }
    cx.fail(ValidationError::enum_mismatch(cx.input, vec![expected.clone()]));
    None
}

/// Exact match on the stored value first; under coercion, labels and loose
/// equality select an entry as well. The output is always the stored value.
pub(super) fn enumeration(cx: &mut ParseContext<'_>, entries: &[EnumEntry]) -> Option<Value> {
    let input = cx.input;
    let exact = entries.iter().find(|entry| entry.value == *input);
    let hit = match exact {
        Some(entry) => Some(entry),
        None if cx.coerces() => entries.iter().find(|entry| {
            input.as_str() == Some(entry.label.as_str()) || loosely_equal(&entry.value, input, true)
        }),
        None => None,
    };
    match hit {
        Some(entry) => Some(entry.value.clone()),
        None => {
            let allowed = entries.iter().map(|entry| entry.value.clone()).collect();
            cx.fail(ValidationError::enum_mismatch(input, allowed));
            None
        }
    }
}

fn loosely_equal(expected: &Value, input: &Value, coerce: bool) -> bool {
    if expected == input {
        return true;
    }
    if !coerce {
        return false;
    }
    if expected.key_matches(input, true) {
        return true;
    }
    match (numeric(expected), numeric(input)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Numeric reading of a value, including numeric strings.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Str(s) => s.trim().parse().ok(),
        other => other.as_f64(),
    }
}
