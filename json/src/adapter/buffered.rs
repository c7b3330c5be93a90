use super::{Adapter, Pending};
use futures::future::FutureExt;
use futures::stream::{self, StreamExt, TryStreamExt};

/// Keeps at most `limit` children of a join in flight, e.g. to bound the
/// number of simultaneous lookups against a database. Results still come
/// back in input order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Buffered {
    limit: usize,
}

impl Buffered {
    pub fn new(limit: usize) -> Self {
        Buffered { limit: limit.max(1) }
    }

    /// One child at a time, in order.
    pub fn sequential() -> Self {
        Buffered::new(1)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Adapter for Buffered {
    fn join_all<T: Send + 'static>(&self, pending: Vec<Pending<T>>) -> Pending<Vec<T>> {
        stream::iter(pending).buffered(self.limit).try_collect::<Vec<T>>().boxed()
    }
}
