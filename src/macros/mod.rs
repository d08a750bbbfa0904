//! Shorthand macros for building values and record field lists.
//!
//! - [`macro@crate::map`] - Builds a [`Value::Map`](crate::Value::Map) from `key => value` pairs,
//!   converting both sides with `Into<Value>`.
//! - [`macro@crate::fields`] - Builds the ordered `(key, schema)` list taken by
//!   [`Schema::record`](crate::Schema::record) and [`Schema::pairs`](crate::Schema::pairs).
//!
//! # Examples
//!
//! ```
//! use schema_rail::{fields, map, Schema};
//!
//! let schema = Schema::record(fields! {
//!     "id" => Schema::integer(),
//!     "tags" => Schema::sequence(Schema::string()),
//! });
//!
//! let input = map! { "id" => 7, "tags" => vec!["a", "b"] };
//! assert!(schema.parse(&input).is_valid());
//! ```

/// Builds a [`Value::Map`](crate::Value::Map), preserving entry order.
///
/// # Examples
///
/// ```
/// use schema_rail::{map, Value};
///
/// let empty = map! {};
/// assert_eq!(empty, Value::Map(Default::default()));
///
/// let nested = map! { "user" => map! { "name" => "ada" }, 1 => true };
/// assert_eq!(nested.get("user").and_then(|u| u.get("name")), Some(&Value::from("ada")));
/// assert_eq!(nested.get(1), Some(&Value::Bool(true)));
/// ```
#[macro_export]
macro_rules! map {
    () => {
        $crate::Value::Map($crate::Map::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Map::new();
        $(map.insert($key, $value);)+
        $crate::Value::Map(map)
    }};
}

/// Builds an ordered `Vec<(Value, Schema)>` of record fields.
///
/// Keys go through `Into<Value>`, so string and integer keys can be mixed.
///
/// # Examples
///
/// ```
/// use schema_rail::{fields, Schema, Value};
///
/// let declared = fields! { "name" => Schema::string(), 0 => Schema::boolean() };
/// assert_eq!(declared[0].0, Value::from("name"));
/// assert_eq!(declared[1].0, Value::Int(0));
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<($crate::Value, $crate::Schema)>::new()
    };
    ($($key:expr => $schema:expr),+ $(,)?) => {
        ::std::vec![$(($crate::Value::from($key), $schema)),+]
    };
}
