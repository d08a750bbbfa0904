//! In-memory structured values accepted and produced by the engine.
//!
//! Inputs are already decoded: the crate never lexes bytes. A [`Value`] is a
//! small dynamic tree of scalars, sequences, tuples and ordered maps, which is
//! enough to represent JSON documents, form submissions or decoded config.
//!
//! # Examples
//!
//! ```
//! use schema_rail::{map, Value};
//!
//! let user = map! { "name" => "ada", "age" => 36 };
//! assert_eq!(user.get("name"), Some(&Value::from("ada")));
//! assert_eq!(user.to_string(), r#"{"name": "ada", "age": 36}"#);
//! ```
use std::borrow::Cow;
use std::fmt;

/// A decoded, dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Map(Map),
}

impl Value {
    /// Stable label for the runtime kind of this value.
    ///
    /// Used in `type_mismatch` issues as the `{actual}` argument.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Map(_) => "map",
        }
    }

    /// Normalized textual form of a key.
    ///
    /// Only strings, integers and booleans have one; other kinds never match
    /// under string-normalized key comparison.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_rail::Value;
    ///
    /// assert_eq!(Value::Int(7).key_text().as_deref(), Some("7"));
    /// assert_eq!(Value::from("7").key_text().as_deref(), Some("7"));
    /// assert!(Value::Null.key_text().is_none());
    /// ```
    #[must_use]
    pub fn key_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Str(s) => Some(Cow::Borrowed(s)),
            Self::Int(i) => Some(Cow::Owned(i.to_string())),
            Self::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            _ => None,
        }
    }

    /// Compares two keys either exactly or by their normalized text.
    #[must_use]
    pub fn key_matches(&self, other: &Value, normalize: bool) -> bool {
        if self == other {
            return true;
        }
        if !normalize {
            return false;
        }
        match (self.key_text(), other.key_text()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of integers and floats.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Borrowed elements of a list or tuple.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) | Self::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up a map entry by exact key.
    #[must_use]
    pub fn get<K: Into<Value>>(&self, key: K) -> Option<&Value> {
        self.as_map().and_then(|m| m.get(&key.into()))
    }
}

/// Insertion-ordered association list keyed by [`Value`].
///
/// Keys are unique under exact comparison; [`Map::insert`] replaces in place.
/// Lookups are linear, which is the right trade-off for record-sized maps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map {
    entries: Vec<(Value, Value)>,
}

impl Map {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    /// Inserts `value` under `key`, returning the previous value if the key existed.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Finds the first entry whose key matches `key`, optionally by normalized text.
    #[must_use]
    pub fn find(&self, key: &Value, normalize: bool) -> Option<(&Value, &Value)> {
        self.entries.iter().find(|(k, _)| k.key_matches(key, normalize)).map(|(k, v)| (k, v))
    }

    /// Looks up an entry whose key has the normalized text `text`.
    #[must_use]
    pub fn get_normalized(&self, text: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k.key_text().as_deref() == Some(text)).map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl IntoIterator for Map {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<Map> for Value {
    #[inline]
    fn from(map: Map) -> Self {
        Self::Map(map)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            #[inline]
            fn from(i: $t) -> Self {
                Self::Int(i64::from(i))
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    #[inline]
    fn from(f: f32) -> Self {
        Self::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Cow<'_, str>> for Value {
    #[inline]
    fn from(s: Cow<'_, str>) -> Self {
        Self::Str(s.into_owned())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

impl From<()> for Value {
    #[inline]
    fn from(_: ()) -> Self {
        Self::Null
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, open: &str, close: &str, items: &[Value]) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(close)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::List(items) => write_seq(f, "[", "]", items),
            Self::Tuple(items) => write_seq(f, "(", ")", items),
            Self::Map(map) => write!(f, "{map}"),
        }
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        f.write_str("}")
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Map, Value};
    use serde::ser::{SerializeMap, SerializeSeq};
    use serde::{Serialize, Serializer};

    impl Serialize for Value {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Value::Null => serializer.serialize_unit(),
                Value::Bool(b) => serializer.serialize_bool(*b),
                Value::Int(i) => serializer.serialize_i64(*i),
                Value::Float(f) => serializer.serialize_f64(*f),
                Value::Str(s) => serializer.serialize_str(s),
                Value::List(items) | Value::Tuple(items) => {
                    let mut seq = serializer.serialize_seq(Some(items.len()))?;
                    for item in items {
                        seq.serialize_element(item)?;
                    }
                    seq.end()
                }
                Value::Map(map) => map.serialize(serializer),
            }
        }
    }

    impl Serialize for Map {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut out = serializer.serialize_map(Some(self.len()))?;
            for (k, v) in self.iter() {
                match k.key_text() {
                    Some(text) => out.serialize_entry(text.as_ref(), v)?,
                    None => out.serialize_entry(&k.to_string(), v)?,
                }
            }
            out.end()
        }
    }
}

#[cfg(feature = "json")]
mod json_impl {
    use super::{Map, Value};

    impl From<serde_json::Value> for Value {
        fn from(json: serde_json::Value) -> Self {
            match json {
                serde_json::Value::Null => Value::Null,
                serde_json::Value::Bool(b) => Value::Bool(b),
                serde_json::Value::Number(n) => match n.as_i64() {
                    Some(i) => Value::Int(i),
                    None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
                },
                serde_json::Value::String(s) => Value::Str(s),
                serde_json::Value::Array(items) => {
                    Value::List(items.into_iter().map(Value::from).collect())
                }
                serde_json::Value::Object(obj) => Value::Map(
                    obj.into_iter().map(|(k, v)| (Value::Str(k), Value::from(v))).collect::<Map>(),
                ),
            }
        }
    }

    impl From<Value> for serde_json::Value {
        fn from(value: Value) -> Self {
            match value {
                Value::Null => serde_json::Value::Null,
                Value::Bool(b) => serde_json::Value::Bool(b),
                Value::Int(i) => serde_json::Value::from(i),
                Value::Float(f) => {
                    serde_json::Number::from_f64(f).map_or(serde_json::Value::Null, Into::into)
                }
                Value::Str(s) => serde_json::Value::String(s),
                Value::List(items) | Value::Tuple(items) => {
                    serde_json::Value::Array(items.into_iter().map(Into::into).collect())
                }
                Value::Map(map) => serde_json::Value::Object(
                    map.into_iter()
                        .map(|(k, v)| {
                            let key = match k {
                                Value::Str(s) => s,
                                other => other.key_text().map_or_else(
                                    || other.to_string(),
                                    std::borrow::Cow::into_owned,
                                ),
                            };
                            (key, v.into())
                        })
                        .collect(),
                ),
            }
        }
    }
}
