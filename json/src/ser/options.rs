use crate::value::{Function, Value};
use crate::{Error, Key, Result};

/// Caller-supplied filter/transform applied while walking the graph.
#[derive(Clone, Debug)]
pub enum Replacer {
    /// Called as `f(holder, key, value)` on every settled value.
    Function(Function),
    /// Member list for every object; only string entries take part.
    Keys(Vec<Value>),
}

impl Replacer {
    /// Interpret a replacer argument. Absent and falsy values mean no
    /// replacer; functions and array-likes are accepted; anything else is a
    /// configuration error.
    pub fn from_value(value: Value) -> Result<Option<Replacer>> {
        if value.is_falsy() {
            return Ok(None);
        }
        match value {
            Value::Function(f) => Ok(Some(Replacer::Function(f))),
            Value::Array(array) => Ok(Some(Replacer::Keys(array.to_vec()))),
            Value::Object(ref object) => match object.get("length") {
                Some(Value::Number(length)) => {
                    let length = length.as_f64();
                    let length = if length.is_finite() && length > 0.0 { length.ceil() as usize } else { 0 };
                    let keys = (0..length).map(|i| value.get(&Key::Index(i))).collect();
                    Ok(Some(Replacer::Keys(keys)))
                }
                _ => Err(Error::InvalidReplacer),
            },
            _ => Err(Error::InvalidReplacer),
        }
    }

    /// Member names selected by a key list, in order.
    pub fn selected_keys(&self) -> Option<Vec<String>> {
        match self {
            Replacer::Function(_) => None,
            Replacer::Keys(keys) => Some(keys.iter().filter_map(Value::as_str).map(String::from).collect()),
        }
    }
}

impl From<Function> for Replacer {
    fn from(f: Function) -> Self {
        Replacer::Function(f)
    }
}

/// Indentation unit used when pretty-printing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Space(String);

impl Space {
    pub fn none() -> Self {
        Space::default()
    }

    pub fn indent(&self) -> &str {
        &self.0
    }

    /// A number gives that many spaces, a string is used verbatim, anything
    /// else means no indentation.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => {
                let count = n.as_f64();
                if count.is_finite() && count > 0.0 {
                    Space(" ".repeat(count.ceil() as usize))
                } else {
                    Space::none()
                }
            }
            Value::String(s) => Space(s.clone()),
            _ => Space::none(),
        }
    }
}

impl From<usize> for Space {
    fn from(count: usize) -> Self {
        Space(" ".repeat(count))
    }
}

impl From<i32> for Space {
    fn from(count: i32) -> Self {
        Space(" ".repeat(count.max(0) as usize))
    }
}

impl From<&str> for Space {
    fn from(indent: &str) -> Self {
        Space(indent.to_string())
    }
}

impl From<String> for Space {
    fn from(indent: String) -> Self {
        Space(indent)
    }
}

impl From<()> for Space {
    fn from(_: ()) -> Self {
        Space::none()
    }
}

impl From<Value> for Space {
    fn from(value: Value) -> Self {
        Space::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Deferred, Object};

    #[test]
    fn falsy_and_absent_replacers_are_ignored() {
        for value in [Value::Undefined, Value::Null, Value::from(false), Value::from(0), Value::from("")] {
            assert!(Replacer::from_value(value).unwrap().is_none());
        }
    }

    #[test]
    fn arrays_select_string_entries_in_order() {
        let replacer = Replacer::from_value(Value::from(vec![Value::from("b"), Value::from(1), Value::from("a")]))
            .unwrap()
            .unwrap();
        assert_eq!(replacer.selected_keys(), Some(vec!["b".to_string(), "a".to_string()]));
    }

    #[test]
    fn array_like_objects_are_accepted() {
        let like = Object::new().with("0", "x").with("1", "y").with("length", 2);
        let replacer = Replacer::from_value(Value::from(like)).unwrap().unwrap();
        assert_eq!(replacer.selected_keys(), Some(vec!["x".to_string(), "y".to_string()]));
    }

    #[test]
    fn other_replacers_are_configuration_errors() {
        assert_eq!(Replacer::from_value(Value::from(3)).unwrap_err(), Error::InvalidReplacer);
        assert_eq!(Replacer::from_value(Value::from("x")).unwrap_err(), Error::InvalidReplacer);
        assert_eq!(Replacer::from_value(Value::from(Object::new().with("a", 1))).unwrap_err(), Error::InvalidReplacer);
        assert_eq!(Replacer::from_value(Value::from(Deferred::resolved(1))).unwrap_err(), Error::InvalidReplacer);
    }

    #[test]
    fn space_follows_the_argument_kind() {
        assert_eq!(Space::from_value(&Value::from(2)).indent(), "  ");
        assert_eq!(Space::from_value(&Value::from(1.5)).indent(), "  ");
        assert_eq!(Space::from_value(&Value::from(-4)).indent(), "");
        assert_eq!(Space::from_value(&Value::from("\t")).indent(), "\t");
        assert_eq!(Space::from_value(&Value::from(true)).indent(), "");
        assert_eq!(Space::from(()).indent(), "");
    }
}
