use super::{Adapter, Buffered, Concurrent, Pending};
use crate::Error;

use core::fmt::{self, Display};
use core::str::FromStr;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// An adapter picked at runtime, e.g. from a command line flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdapterKind {
    Concurrent(Concurrent),
    Buffered(Buffered),
}

impl Default for AdapterKind {
    fn default() -> Self {
        AdapterKind::Concurrent(Concurrent)
    }
}

lazy_static! {
    static ref HINTS: HashMap<&'static str, AdapterKind> = {
        let mut hints = HashMap::new();
        hints.insert("concurrent", AdapterKind::Concurrent(Concurrent));
        hints.insert("all", AdapterKind::Concurrent(Concurrent));
        hints.insert("sequential", AdapterKind::Buffered(Buffered::sequential()));
        hints.insert("serial", AdapterKind::Buffered(Buffered::sequential()));
        hints
    };
}

/// Accepts `concurrent`/`all`, `sequential`/`serial` and `buffered:<limit>`,
/// case-insensitively.
impl FromStr for AdapterKind {
    type Err = Error;

    fn from_str(hint: &str) -> Result<Self, Self::Err> {
        let hint = hint.trim().to_lowercase();
        if let Some(kind) = HINTS.get(hint.as_str()) {
            return Ok(*kind);
        }
        let limit = hint.strip_prefix("buffered:").and_then(|limit| limit.parse::<usize>().ok());
        match limit {
            Some(limit) if limit > 0 => Ok(AdapterKind::Buffered(Buffered::new(limit))),
            _ => Err(Error::UnrecognizedAdapter(hint)),
        }
    }
}

impl Display for AdapterKind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AdapterKind::Concurrent(_) => formatter.write_str("concurrent"),
            AdapterKind::Buffered(b) if b.limit() == 1 => formatter.write_str("sequential"),
            AdapterKind::Buffered(b) => write!(formatter, "buffered:{}", b.limit()),
        }
    }
}

impl Adapter for AdapterKind {
    fn join_all<T: Send + 'static>(&self, pending: Vec<Pending<T>>) -> Pending<Vec<T>> {
        match self {
            AdapterKind::Concurrent(adapter) => adapter.join_all(pending),
            AdapterKind::Buffered(adapter) => adapter.join_all(pending),
        }
    }
}
