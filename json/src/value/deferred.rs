use super::Value;
use crate::{Error, Result};

use core::fmt::{self, Debug, Display};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::future::{BoxFuture, FutureExt, Shared};
use std::future::Future;

/// A value that is not available yet.
///
/// A deferred settles exactly once, either to a [`Value`] (which may itself
/// be another deferred) or to an [`Error`]. Clones share the same settlement,
/// so the same deferred can sit in several places of a graph.
#[derive(Clone)]
pub struct Deferred {
    inner: Shared<BoxFuture<'static, Result<Value>>>,
}

impl Deferred {
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<Value>> + Send + 'static,
    {
        Deferred {
            inner: future.boxed().shared(),
        }
    }

    pub fn resolved(value: impl Into<Value>) -> Self {
        let value = value.into();
        Deferred::new(async move { Ok(value) })
    }

    pub fn rejected(reason: impl Display) -> Self {
        let error = Error::rejected(reason);
        Deferred::new(async move { Err(error) })
    }

    /// The settled outcome, if this deferred has already been driven to
    /// completion through one of its clones.
    pub fn peek(&self) -> Option<&Result<Value>> {
        self.inner.peek()
    }
}

impl Future for Deferred {
    type Output = Result<Value>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(cx)
    }
}

impl Debug for Deferred {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self.peek() {
            Some(outcome) => formatter.debug_tuple("Deferred").field(outcome).finish(),
            None => formatter.write_str("Deferred(<pending>)"),
        }
    }
}
