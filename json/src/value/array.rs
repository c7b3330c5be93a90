use super::Value;
use std::ops::Deref;
use std::sync::Arc;

/// A JSON sequence. Elements are shared between clones so holders can be
/// handed to every concurrently resolving child.
#[derive(Clone, Debug, Default)]
pub struct Array {
    elements: Arc<Vec<Value>>,
}

impl Array {
    pub fn new() -> Self {
        Array::default()
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        Arc::make_mut(&mut self.elements).push(value.into());
    }
}

impl Deref for Array {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.elements
    }
}

impl From<Vec<Value>> for Array {
    fn from(elements: Vec<Value>) -> Self {
        Array {
            elements: Arc::new(elements),
        }
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Array::from(iter.into_iter().map(Into::into).collect::<Vec<_>>())
    }
}
