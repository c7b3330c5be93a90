mod array;
pub use array::Array;

mod numbers;
pub use self::numbers::Number;

mod object;
pub use self::object::Object;

mod deferred;
pub use self::deferred::Deferred;

mod callable;
pub use self::callable::{Custom, Function, ToJson};

mod impls;

use crate::Key;

/// Any datum that can appear in a graph handed to the stringifier.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// Absent value. Omitted from objects, `null` in arrays.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Array),
    Object(Object),
    Deferred(Deferred),
    /// Value exposing a `toJSON`-style coercion hook.
    Custom(Custom),
    Function(Function),
}

/// What a settled value serializes as.
#[derive(Clone, Copy, Debug)]
pub enum Kind<'a> {
    String(&'a str),
    Number(&'a Number),
    Bool(bool),
    Null,
    Sequence(&'a Array),
    Mapping(&'a Object),
    Unsupported,
}

impl Value {
    /// Deferred values and coercion hooks are expected to be settled before
    /// this is asked; if they are not, they count as unsupported.
    pub fn kind(&self) -> Kind<'_> {
        match self {
            Value::String(s) => Kind::String(s),
            Value::Number(n) => Kind::Number(n),
            Value::Bool(b) => Kind::Bool(*b),
            Value::Null => Kind::Null,
            Value::Array(array) => Kind::Sequence(array),
            Value::Object(object) => Kind::Mapping(object),
            Value::Undefined | Value::Deferred(_) | Value::Custom(_) | Value::Function(_) => Kind::Unsupported,
        }
    }

    /// `self[key]`, or [`Value::Undefined`] when there is no such member.
    pub fn get(&self, key: &Key) -> Value {
        let member = match (self, key) {
            (Value::Array(array), Key::Index(i)) => array.get(*i),
            (Value::Array(array), Key::Name(name)) => name.parse::<usize>().ok().and_then(|i| array.get(i)),
            (Value::Object(object), Key::Name(name)) => object.get(name),
            (Value::Object(object), Key::Index(i)) => object.get(&i.to_string()),
            _ => None,
        };
        member.cloned().unwrap_or_default()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// `false`, `0`, NaN, `""`, `null` and undefined.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => {
                let f = n.as_f64();
                f == 0.0 || f.is_nan()
            }
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }
}
