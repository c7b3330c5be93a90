use super::{Adapter, Pending};
use futures::future::{try_join_all, FutureExt};

/// Polls every child of a join at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Concurrent;

impl Adapter for Concurrent {
    fn join_all<T: Send + 'static>(&self, pending: Vec<Pending<T>>) -> Pending<Vec<T>> {
        try_join_all(pending).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Deferred, Value};
    use crate::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::time::{sleep, Duration};

    fn delayed(ms: u64, n: u32, finished: Arc<AtomicUsize>) -> Pending<u32> {
        async move {
            sleep(Duration::from_millis(ms)).await;
            finished.fetch_add(1, Ordering::SeqCst);
            Ok(n)
        }
        .boxed()
    }

    #[tokio::test]
    async fn results_keep_input_order() {
        let finished = Arc::new(AtomicUsize::new(0));
        let pending = vec![
            delayed(30, 1, finished.clone()),
            delayed(10, 2, finished.clone()),
            delayed(20, 3, finished.clone()),
        ];
        assert_eq!(Concurrent.join_all(pending).await, Ok(vec![1, 2, 3]));
        assert_eq!(finished.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn empty_join_settles_immediately() {
        assert_eq!(Concurrent.join_all(Vec::<Pending<u32>>::new()).await, Ok(vec![]));
    }

    #[tokio::test]
    async fn first_failure_fails_the_join() {
        let finished = Arc::new(AtomicUsize::new(0));
        let failing: Pending<u32> = async { Err(Error::rejected("lookup failed")) }.boxed();
        let pending = vec![delayed(50, 1, finished.clone()), failing];
        assert_eq!(Concurrent.join_all(pending).await, Err(Error::rejected("lookup failed")));
    }

    #[tokio::test]
    async fn nested_deferreds_are_flattened() {
        let inner = Deferred::new(async {
            sleep(Duration::from_millis(5)).await;
            Ok(Value::from("Claire"))
        });
        let outer = Deferred::resolved(Value::from(inner));
        let settled = Concurrent.to_deferred(Value::from(outer)).await.unwrap();
        assert_eq!(settled.as_str(), Some("Claire"));
    }

    #[tokio::test]
    async fn plain_values_settle_as_themselves() {
        let settled = Concurrent.to_deferred(Value::from(true)).await.unwrap();
        assert!(matches!(settled, Value::Bool(true)));
    }
}
