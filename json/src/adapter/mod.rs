//! The two primitives the stringifier needs from a deferred-value
//! ecosystem, and the adapters that provide them.

mod buffered;
pub use self::buffered::Buffered;

mod concurrent;
pub use self::concurrent::Concurrent;

mod kind;
pub use self::kind::AdapterKind;

use crate::value::Value;
use crate::{Error, Result};

use futures::future::{BoxFuture, FutureExt};

/// A computation that settles to `T` or fails.
pub type Pending<T> = BoxFuture<'static, Result<T>>;

pub trait Adapter: Clone + Send + Sync + 'static {
    /// Coerce any value into a deferred settling to the innermost
    /// non-deferred value. Plain values settle immediately.
    fn to_deferred(&self, value: Value) -> Pending<Value> {
        async move {
            let mut value = value;
            while let Value::Deferred(deferred) = value {
                value = deferred.await?;
            }
            Ok::<_, Error>(value)
        }
        .boxed()
    }

    /// Settle once every input has settled, with results in input order.
    /// The first failure fails the whole join.
    fn join_all<T: Send + 'static>(&self, pending: Vec<Pending<T>>) -> Pending<Vec<T>>;
}
