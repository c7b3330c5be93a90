//! JSON stringify for value graphs whose members may still be computing.
//!
//! Any member, at any depth, can be a [`Deferred`] value: the graph is
//! serialized once every deferred has settled, and the text is the same a
//! synchronous serializer would produce for the settled graph.
//!
//! ```no_run
//! # async fn run() -> json::Result<()> {
//! use json::{Deferred, Object};
//!
//! let person = Object::new()
//!     .with("firstName", Deferred::new(async { Ok("John".into()) }))
//!     .with("lastName", "Doe");
//! let text = json::stringify(person, (), 2)?.await?;
//! assert_eq!(text.as_deref(), Some("{\n  \"firstName\": \"John\",\n  \"lastName\": \"Doe\"\n}"));
//! # Ok(())
//! # }
//! ```

extern crate self as json;

pub mod adapter;
pub mod ser;
pub mod value;

mod types;

pub use json_derive::IntoValue;

pub use crate::adapter::{Adapter, AdapterKind, Buffered, Concurrent, Pending};
pub use crate::ser::{quote, Replacer, Space, Stringifier};
pub use crate::types::{Error, Key, Result};
pub use crate::value::{Array, Custom, Deferred, Function, Kind, Number, Object, ToJson, Value};

/// Stringify with the default concurrent adapter. See
/// [`Stringifier::stringify`].
pub fn stringify(value: impl Into<Value>, replacer: impl Into<Value>, space: impl Into<Space>) -> Result<Pending<Option<String>>> {
    Stringifier::<Concurrent>::default().stringify(value, replacer, space)
}

/// Compact JSON text for `value`.
pub fn to_string(value: impl Into<Value>) -> Pending<Option<String>> {
    Stringifier::<Concurrent>::default().to_string(value)
}

pub fn to_string_pretty(value: impl Into<Value>, space: impl Into<Space>) -> Pending<Option<String>> {
    Stringifier::<Concurrent>::default().to_string_pretty(value, space)
}
