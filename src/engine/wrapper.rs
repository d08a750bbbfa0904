use crate::engine::ParseContext;
use crate::schema::{Schema, Wrapper};
use crate::types::{ValidationError, Value};

pub(super) fn wrapper(cx: &mut ParseContext<'_>, wrapper: &Wrapper) -> Option<Value> {
    let absent = cx.input.is_null();
    match wrapper {
        Wrapper::Optional(inner) if absent && !inner.accepts_null() => {
            cx.bypass = true;
            Some(Value::Null)
        }
        Wrapper::Default(inner, value) if absent && !inner.accepts_null() => {
            cx.bypass = true;
            Some(value.clone())
        }
        Wrapper::Nullable(_) if absent => Some(Value::Null),
        Wrapper::Required(inner) if absent && !inner.accepts_null() => {
            cx.fail(ValidationError::required());
            None
        }
        Wrapper::Optional(inner)
        | Wrapper::Default(inner, _)
        | Wrapper::Nullable(inner)
        | Wrapper::Required(inner) => delegate(cx, inner),
        Wrapper::Lazy(resolver) => {
            let resolved = resolver.resolve();
            delegate(cx, &resolved)
        }
    }
}

/// Runs `inner` on the same input and adopts its outcome.
fn delegate(cx: &mut ParseContext<'_>, inner: &Schema) -> Option<Value> {
    let attempt = cx.nested(inner).run();
    match cx.absorb(None, attempt) {
        Ok(value) => Some(value),
        Err(partial) => partial,
    }
}
