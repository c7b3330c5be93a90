use json::{Deferred, Object, Value};
use rand::prelude::*;
use tokio::time::{sleep, Duration};
use tracing::trace;

/// Settles to `value` after a random delay of at most `max_delay_ms`,
/// standing in for a database lookup or a remote call.
pub fn lookup(name: &'static str, value: impl Into<Value>, max_delay_ms: u64) -> Value {
    let value = value.into();
    let delay = thread_rng().gen_range(0..=max_delay_ms);
    Value::from(Deferred::new(async move {
        sleep(Duration::from_millis(delay)).await;
        trace!(name, delay, "lookup settled");
        Ok(value)
    }))
}

/// Like [`lookup`] but fails after the delay.
pub fn failing_lookup(name: &'static str, max_delay_ms: u64) -> Value {
    let delay = thread_rng().gen_range(0..=max_delay_ms);
    Value::from(Deferred::new(async move {
        sleep(Duration::from_millis(delay)).await;
        Err(json::Error::rejected(format!("lookup of `{}` failed", name)))
    }))
}

/// A person record whose fields arrive from independent lookups, some of
/// them nested inside other deferred values.
pub fn person(max_delay_ms: u64, reject: bool) -> Object {
    let mother = Object::new()
        .with("name", "Claire")
        .with("age", 57)
        .with("working", lookup("mother.working", true, max_delay_ms))
        .with("eyeColor", "blue");
    let father_eyes = if reject {
        failing_lookup("father.eyeColor", max_delay_ms)
    } else {
        lookup("father.eyeColor", "brown", max_delay_ms)
    };
    let father = Object::new()
        .with("name", "Steven")
        .with("age", 60)
        .with("working", false)
        .with("eyeColor", father_eyes);

    Object::new()
        .with("firstName", lookup("firstName", "John", max_delay_ms))
        .with("lastName", "Doe")
        .with("age", lookup("age", 32, max_delay_ms))
        .with("eyeColor", "blue")
        .with(
            "family",
            Object::new()
                .with("mother", lookup("mother", mother, max_delay_ms))
                .with("father", father),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn person_settles_to_the_full_record() {
        let text = json::to_string(person(5, false)).await.unwrap().unwrap();
        assert_eq!(
            text,
            concat!(
                r#"{"firstName":"John","lastName":"Doe","age":32,"eyeColor":"blue","family":{"#,
                r#""mother":{"name":"Claire","age":57,"working":true,"eyeColor":"blue"},"#,
                r#""father":{"name":"Steven","age":60,"working":false,"eyeColor":"brown"}}}"#
            )
        );
    }

    #[tokio::test]
    async fn rejected_lookup_fails_the_record() {
        let result = json::to_string(person(5, true)).await;
        assert_eq!(result, Err(json::Error::rejected("lookup of `father.eyeColor` failed")));
    }

    #[tokio::test]
    async fn zero_delay_lookups_settle() {
        let text = json::to_string(lookup("n", 1, 0)).await.unwrap();
        assert_eq!(text.as_deref(), Some("1"));
    }
}
