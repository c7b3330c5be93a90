mod escape;
pub use self::escape::quote;

mod options;
pub use self::options::{Replacer, Space};


use crate::adapter::{Adapter, AdapterKind, Concurrent, Pending};
use crate::value::{Array, Kind, Object, Value};
use crate::{Error, Key, Result};

use futures::future::FutureExt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Produces JSON text from value graphs that may contain deferred values,
/// settling them through the primitives of `A`.
///
/// The engine never spawns: every deferred in the graph is driven by polling
/// the future returned from [`Stringifier::stringify`]. A deferred that never
/// settles keeps that future pending forever; wrap it in a timeout if that
/// matters. Graphs that keep growing through coercion hooks or deferreds
/// (a hook returning a value containing itself) recurse without bound.
#[derive(Clone, Debug, Default)]
pub struct Stringifier<A = Concurrent> {
    adapter: A,
}

impl Stringifier<AdapterKind> {
    /// Stringifier for an adapter named by `hint`, see [`AdapterKind`].
    pub fn from_hint(hint: &str) -> Result<Self> {
        Ok(Stringifier::new(hint.parse()?))
    }
}

impl<A: Adapter> Stringifier<A> {
    pub fn new(adapter: A) -> Self {
        Stringifier { adapter }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Stringify `value` with an optional replacer (function, array-like,
    /// or absent) and indentation. An invalid replacer fails here, before
    /// anything is resolved; a failing deferred fails the returned future.
    ///
    /// Settles to `None` when the root itself has no JSON form.
    pub fn stringify(&self, value: impl Into<Value>, replacer: impl Into<Value>, space: impl Into<Space>) -> Result<Pending<Option<String>>> {
        let replacer = Replacer::from_value(replacer.into())?;
        Ok(self.stringify_with(value, replacer, space))
    }

    pub fn stringify_with(&self, value: impl Into<Value>, replacer: Option<Replacer>, space: impl Into<Space>) -> Pending<Option<String>> {
        let space = space.into();
        debug!(indent = space.indent().len(), replacer = ?replacer.as_ref().map(kind_of_replacer), "stringify");

        let walker = Arc::new(Walker {
            adapter: self.adapter.clone(),
            replacer,
            indent: space.indent().to_string(),
        });
        // fake root holder, the value lives under the key ""
        let root = Value::Object(Object::new().with("", value));
        let text = walker.resolve(Key::root(), root, String::new());

        async move {
            let text = text.await;
            if let Err(err) = &text {
                debug!(error = %err, "stringify failed");
            }
            text
        }
        .boxed()
    }

    pub fn to_string(&self, value: impl Into<Value>) -> Pending<Option<String>> {
        self.stringify_with(value, None, Space::none())
    }

    pub fn to_string_pretty(&self, value: impl Into<Value>, space: impl Into<Space>) -> Pending<Option<String>> {
        self.stringify_with(value, None, space)
    }
}

fn kind_of_replacer(replacer: &Replacer) -> &'static str {
    match replacer {
        Replacer::Function(_) => "function",
        Replacer::Keys(_) => "keys",
    }
}

/// State shared by every branch of one stringify call. Read-only.
struct Walker<A> {
    adapter: A,
    replacer: Option<Replacer>,
    indent: String,
}

impl<A: Adapter> Walker<A> {
    /// JSON text for `holder[key]`, or `None` when the value has no JSON
    /// form and should be left out.
    fn resolve(self: &Arc<Self>, key: Key, holder: Value, gap: String) -> Pending<Option<String>> {
        let walker = Arc::clone(self);
        async move {
            let mut value = holder.get(&key);

            // toJSON runs before settling; it may hand back a deferred
            if let Value::Custom(custom) = &value {
                value = custom.to_json(&key);
            }

            let mut value = walker.adapter.to_deferred(value).await?;

            if let Some(Replacer::Function(replace)) = &walker.replacer {
                value = replace.call(&holder, &key, value);
            }

            let text = match value.kind() {
                Kind::String(s) => Some(quote(s)),
                Kind::Number(n) => Some(n.to_json()),
                Kind::Bool(b) => Some(b.to_string()),
                Kind::Null => Some("null".to_string()),
                Kind::Sequence(array) => {
                    let array = array.clone();
                    Some(walker.serialize_array(array, gap).await?)
                }
                Kind::Mapping(object) => {
                    let object = object.clone();
                    Some(walker.serialize_object(object, gap).await?)
                }
                Kind::Unsupported => None,
            };
            Ok::<_, Error>(text)
        }
        .boxed()
    }

    fn serialize_array(self: &Arc<Self>, array: Array, mind: String) -> Pending<String> {
        let gap = format!("{}{}", mind, self.indent);
        trace!(len = array.len(), depth = gap.len(), "serializing array");

        let holder = Value::Array(array.clone());
        let partial: Vec<Pending<String>> = (0..array.len())
            .map(|i| {
                let element = self.resolve(Key::Index(i), holder.clone(), gap.clone());
                // arrays keep their length, values without JSON form become null
                async move { Ok::<_, Error>(element.await?.unwrap_or_else(|| "null".to_string())) }.boxed()
            })
            .collect();
        let joined = self.adapter.join_all(partial);

        async move {
            let partial = joined.await?;
            Ok::<_, Error>(join('[', ']', &partial, &gap, &mind))
        }
        .boxed()
    }

    fn serialize_object(self: &Arc<Self>, object: Object, mind: String) -> Pending<String> {
        let gap = format!("{}{}", mind, self.indent);
        trace!(len = object.len(), depth = gap.len(), "serializing object");

        let keys = match self.replacer.as_ref().and_then(Replacer::selected_keys) {
            Some(keys) => keys,
            None => object.keys().cloned().collect(),
        };

        let holder = Value::Object(object);
        let pairs: Vec<Pending<(String, Option<String>)>> = keys
            .into_iter()
            .map(|k| {
                let member = self.resolve(Key::Name(k.clone()), holder.clone(), gap.clone());
                async move { Ok::<_, Error>((k, member.await?)) }.boxed()
            })
            .collect();
        let joined = self.adapter.join_all(pairs);

        async move {
            let colon = if gap.is_empty() { ":" } else { ": " };
            let partial: Vec<String> = joined
                .await?
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| format!("{}{}{}", quote(&k), colon, v)))
                .collect();
            Ok::<_, Error>(join('{', '}', &partial, &gap, &mind))
        }
        .boxed()
    }
}

/// Join member texts with commas, one per line when indenting; the closing
/// bracket lines up with the enclosing level.
fn join(open: char, close: char, partial: &[String], gap: &str, mind: &str) -> String {
    if partial.is_empty() {
        return format!("{}{}", open, close);
    }
    if gap.is_empty() {
        return format!("{}{}{}", open, partial.join(","), close);
    }
    let separator = format!(",\n{}", gap);
    format!("{}\n{}{}\n{}{}", open, gap, partial.join(&separator), mind, close)
}
