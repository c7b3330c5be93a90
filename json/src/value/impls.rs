use super::{Array, Custom, Deferred, Function, Number, Object, Value};

macro_rules! from_unsigned {
    ($($ty:ty)*) => {$(
        impl From<$ty> for Value {
            fn from(n: $ty) -> Self {
                Value::Number(Number::U64(n as u64))
            }
        }
    )*};
}

macro_rules! from_signed {
    ($($ty:ty)*) => {$(
        impl From<$ty> for Value {
            fn from(i: $ty) -> Self {
                if i < 0 {
                    Value::Number(Number::I64(i as i64))
                } else {
                    Value::Number(Number::U64(i as u64))
                }
            }
        }
    )*};
}

from_unsigned!(u8 u16 u32 u64 usize);
from_signed!(i8 i16 i32 i64 isize);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Number(Number::F64(f as f64))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::F64(f))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(elements: Vec<T>) -> Self {
        Value::Array(elements.into_iter().collect())
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl From<Deferred> for Value {
    fn from(deferred: Deferred) -> Self {
        Value::Deferred(deferred)
    }
}

impl From<Custom> for Value {
    fn from(custom: Custom) -> Self {
        Value::Custom(custom)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Value::Function(function)
    }
}

#[cfg(test)]
mod tests {
    use crate::{IntoValue, Key, Kind, Value};

    #[derive(IntoValue)]
    struct Flight {
        id: u32,
        source: String,
        #[json(rename = "dest")]
        destination: String,
        #[json(skip)]
        #[allow(dead_code)]
        internal_note: String,
        airfare: f64,
        gate: Option<String>,
    }

    #[derive(IntoValue)]
    enum Status {
        Finished,
        Failed,
    }

    #[test]
    fn signed_integers_keep_their_sign() {
        assert!(matches!(Value::from(-3i32).kind(), Kind::Number(n) if n.to_json() == "-3"));
        assert!(matches!(Value::from(3i32).kind(), Kind::Number(n) if n.to_json() == "3"));
    }

    #[test]
    fn none_becomes_null_and_unit_becomes_undefined() {
        assert!(matches!(Value::from(None::<u32>), Value::Null));
        assert!(Value::from(()).is_undefined());
    }

    #[test]
    fn derived_struct_members_follow_declaration_order() {
        let flight = Flight {
            id: 1,
            source: "LAS".to_string(),
            destination: "HAN".to_string(),
            internal_note: "hidden".to_string(),
            airfare: 150.99,
            gate: None,
        };
        let value = Value::from(flight);
        let object = match &value {
            Value::Object(object) => object,
            other => panic!("expected an object, got {:?}", other),
        };
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "source", "dest", "airfare", "gate"]);
        assert_eq!(value.get(&Key::from("dest")).as_str(), Some("HAN"));
        assert!(value.get(&Key::from("internal_note")).is_undefined());
    }

    #[test]
    fn derived_unit_enum_is_its_variant_name() {
        assert_eq!(Value::from(Status::Finished).as_str(), Some("Finished"));
        assert_eq!(Value::from(Status::Failed).as_str(), Some("Failed"));
    }
}
