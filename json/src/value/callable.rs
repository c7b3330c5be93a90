use super::Value;
use crate::Key;

use core::fmt::{self, Debug};
use std::sync::Arc;

/// Coercion hook: a value that supplies its own serializable representation,
/// asked for with the key it is stored under.
pub trait ToJson: Send + Sync {
    fn to_json(&self, key: &Key) -> Value;
}

impl<F> ToJson for F
where
    F: Fn(&Key) -> Value + Send + Sync,
{
    fn to_json(&self, key: &Key) -> Value {
        self(key)
    }
}

/// A value carrying a [`ToJson`] hook.
#[derive(Clone)]
pub struct Custom(Arc<dyn ToJson>);

impl Custom {
    pub fn new(hook: impl ToJson + 'static) -> Self {
        Custom(Arc::new(hook))
    }

    pub fn to_json(&self, key: &Key) -> Value {
        self.0.to_json(key)
    }
}

impl Debug for Custom {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("Custom(<toJSON>)")
    }
}

type Callable = dyn Fn(&Value, &Key, Value) -> Value + Send + Sync;

/// A callable value. Never emitted as JSON; used as a replacer it receives
/// the holder, the key and the settled value and returns the replacement.
#[derive(Clone)]
pub struct Function(Arc<Callable>);

impl Function {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &Key, Value) -> Value + Send + Sync + 'static,
    {
        Function(Arc::new(f))
    }

    pub fn call(&self, holder: &Value, key: &Key, value: Value) -> Value {
        (self.0)(holder, key, value)
    }
}

impl Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("Function(<callable>)")
    }
}
