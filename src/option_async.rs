//! `OptionAsync` - an [`Option`] that becomes available later.
//!
//! `OptionAsync<A>` wraps a deferred computation producing exactly one
//! `Option<A>`. The computation runs at most once; every extraction and every
//! chained step observes the same settled option.
//!
//! # Chaining
//!
//! [`map`](OptionAsync::map) and [`flat_map`](OptionAsync::flat_map) return a
//! new `OptionAsync` whose step runs only after the previous one settled.
//! `flat_map` accepts a callback returning either a plain [`Option`] or
//! another `OptionAsync`; both collapse into one deferred computation.
//!
//! # Rejections
//!
//! If the wrapped computation panics (or a fallible constructor reports a
//! failure), the computation is *rejected*. Chained steps are skipped,
//! [`case_of`](OptionAsync::case_of) falls back to its `absent` arm, and every
//! other extraction (including `.await`) resumes the rejection as a panic
//! carrying a [`Rejection`].
//!
//! # Examples
//!
//! ```rust
//! use optres::{OptionAsync, Pipe, chain, none, option_async, some, some_async};
//!
//! # futures::executor::block_on(async {
//! let length = some_async("yolo")
//!     .map(|text: &str| text.len())
//!     .flat_map(|length| if length > 2 { some(length) } else { none() });
//! assert_eq!(length.get_or_null().await, Some(4));
//!
//! let is_long = chain!(
//!     some_async("yo"),
//!     option_async::map(|text: &str| text.len(), Pipe),
//!     option_async::map(|length: usize| length > 2, Pipe),
//! );
//! assert_eq!(is_long.await, some(false));
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt};

use crate::Nullable;
use crate::compose::{Curried, curry};
use crate::deferred::{Deferred, Rejection, resume};
use crate::option::{Option, OptionCases};

/// A deferred computation yielding an [`Option<A>`].
///
/// Awaiting an `OptionAsync` yields the settled `Option<A>`.
///
/// # Panics
///
/// Awaiting a rejected `OptionAsync` panics with the [`Rejection`] as payload.
pub struct OptionAsync<A> {
    deferred: Deferred<Option<A>>,
}

impl<A> Clone for OptionAsync<A> {
    fn clone(&self) -> Self {
        Self {
            deferred: self.deferred.clone(),
        }
    }
}

impl<A> fmt::Debug for OptionAsync<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("OptionAsync").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(OptionAsync<i32>: Send, Sync, Clone, Unpin);

/// An `OptionAsync` already settled to `Present(value)`.
pub fn some_async<A>(value: A) -> OptionAsync<A>
where
    A: Clone + Send + Sync + 'static,
{
    OptionAsync::from_option(Option::Present(value))
}

/// An `OptionAsync` already settled to `Absent`.
pub fn none_async<A>() -> OptionAsync<A>
where
    A: Clone + Send + Sync + 'static,
{
    OptionAsync::from_option(Option::Absent)
}

impl<A> OptionAsync<A>
where
    A: Clone + Send + Sync + 'static,
{
    /// Lifts an immediate option.
    pub fn from_option(option: Option<A>) -> Self {
        Self {
            deferred: Deferred::settled(option),
        }
    }

    /// Wraps a future producing an option.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Option, OptionAsync};
    ///
    /// # futures::executor::block_on(async {
    /// let lookup = OptionAsync::from_future(async { Option::from_nullable(Some(3)) });
    /// assert_eq!(lookup.get_or_else(|| 0).await, 3);
    /// # });
    /// ```
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Option<A>> + Send + 'static,
    {
        Self {
            deferred: Deferred::from_future(future),
        }
    }

    /// Wraps a future that may fail outright; an `Err(reason)` rejects the
    /// computation with `reason` as the rejection message.
    pub fn from_fallible<Fut, R>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<Option<A>, R>> + Send + 'static,
        R: fmt::Display,
    {
        Self {
            deferred: Deferred::from_fallible(
                future.map(|outcome| outcome.map_err(|reason| Rejection::new(reason.to_string()))),
            ),
        }
    }

    /// Transforms the eventual present value.
    pub fn map<B, F>(self, function: F) -> OptionAsync<B>
    where
        B: Clone + Send + Sync + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        OptionAsync {
            deferred: self
                .deferred
                .then(move |option| futures::future::ready(Ok(option.map(function)))),
        }
    }

    /// Chains a step returning either an [`Option`] or an `OptionAsync`.
    ///
    /// `function` runs only if the eventual option is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{none, some, some_async};
    ///
    /// # futures::executor::block_on(async {
    /// let synchronous = some_async(4).flat_map(|value| some(value + 1));
    /// let asynchronous = some_async(4).flat_map(|value| some_async(value + 1));
    /// assert_eq!(synchronous.await, asynchronous.await);
    ///
    /// let dropped = some_async("yolo").flat_map(|_| none::<usize>());
    /// assert_eq!(dropped.get_or_null().await, None);
    /// # });
    /// ```
    pub fn flat_map<B, F, R>(self, function: F) -> OptionAsync<B>
    where
        B: Clone + Send + Sync + 'static,
        F: FnOnce(A) -> R + Send + 'static,
        R: IntoOptionAsync<B>,
    {
        OptionAsync {
            deferred: self.deferred.then(move |option| async move {
                match option {
                    Option::Present(value) => {
                        let next = function(value).into_option_async();
                        next.deferred.settlement().await
                    }
                    Option::Absent => Ok(Option::Absent),
                }
            }),
        }
    }

    /// Resolves to the present value or the result of `fallback`.
    ///
    /// # Panics
    ///
    /// The returned future panics if the computation was rejected.
    pub fn get_or_else<F>(&self, fallback: F) -> BoxFuture<'static, A>
    where
        F: FnOnce() -> A + Send + 'static,
    {
        let settlement = self.deferred.settlement();
        async move { resume(settlement.await).get_or_else(fallback) }.boxed()
    }

    /// Resolves to the present value or `None`.
    ///
    /// # Panics
    ///
    /// The returned future panics if the computation was rejected.
    pub fn get_or_null(&self) -> BoxFuture<'static, Nullable<A>> {
        let settlement = self.deferred.settlement();
        async move { resume(settlement.await).get_or_null() }.boxed()
    }

    /// Resolves and dispatches to exactly one arm.
    ///
    /// A rejected computation is treated as absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{OptionAsync, OptionCases};
    ///
    /// # futures::executor::block_on(async {
    /// let failing = OptionAsync::<usize>::from_fallible(async { Err("timeout") });
    /// let length = failing
    ///     .case_of(OptionCases {
    ///         present: |length| length,
    ///         absent: || 0,
    ///     })
    ///     .await;
    /// assert_eq!(length, 0);
    /// # });
    /// ```
    pub fn case_of<B, P, N>(&self, cases: OptionCases<P, N>) -> BoxFuture<'static, B>
    where
        B: Send + 'static,
        P: FnOnce(A) -> B + Send + 'static,
        N: FnOnce() -> B + Send + 'static,
    {
        let settlement = self.deferred.settlement();
        async move {
            match settlement.await {
                Ok(option) => option.case_of(cases),
                Err(_) => (cases.absent)(),
            }
        }
        .boxed()
    }

    /// Resolves without panicking, surfacing a rejection as `Err`.
    pub fn settled(&self) -> BoxFuture<'static, Result<Option<A>, Rejection>> {
        self.deferred.settlement().boxed()
    }
}

impl<A> Future for OptionAsync<A>
where
    A: Clone + Send + Sync + 'static,
{
    type Output = Option<A>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.deferred.poll_settlement(context).map(resume)
    }
}

impl<A> From<Option<A>> for OptionAsync<A>
where
    A: Clone + Send + Sync + 'static,
{
    fn from(option: Option<A>) -> Self {
        Self::from_option(option)
    }
}

/// Anything a [`OptionAsync::flat_map`] callback may return.
pub trait IntoOptionAsync<A> {
    /// Normalizes `self` into a deferred option.
    fn into_option_async(self) -> OptionAsync<A>;
}

impl<A> IntoOptionAsync<A> for Option<A>
where
    A: Clone + Send + Sync + 'static,
{
    fn into_option_async(self) -> OptionAsync<A> {
        OptionAsync::from_option(self)
    }
}

impl<A> IntoOptionAsync<A> for OptionAsync<A> {
    fn into_option_async(self) -> Self {
        self
    }
}

impl<'a, A, T> Curried<'a, OptionAsync<A>, T> for OptionAsync<A> {
    type Output = T;

    #[inline]
    fn curry<F>(self, function: F) -> T
    where
        F: FnOnce(OptionAsync<A>) -> T + 'a,
    {
        function(self)
    }
}

// =============================================================================
// Namespace Functions
// =============================================================================

/// [`OptionAsync::map`] with the option last, or curried with [`Pipe`](crate::Pipe).
pub fn map<'a, A, B, F, X>(function: F, option: X) -> X::Output
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    F: FnOnce(A) -> B + Send + 'static,
    X: Curried<'a, OptionAsync<A>, OptionAsync<B>>,
{
    curry(move |option: OptionAsync<A>| option.map(function), option)
}

/// [`OptionAsync::flat_map`] with the option last, or curried with [`Pipe`](crate::Pipe).
pub fn flat_map<'a, A, B, F, R, X>(function: F, option: X) -> X::Output
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    F: FnOnce(A) -> R + Send + 'static,
    R: IntoOptionAsync<B>,
    X: Curried<'a, OptionAsync<A>, OptionAsync<B>>,
{
    curry(move |option: OptionAsync<A>| option.flat_map(function), option)
}

/// [`OptionAsync::get_or_else`] with the option last, or curried with [`Pipe`](crate::Pipe).
pub fn get_or_else<'a, A, F, X>(fallback: F, option: X) -> X::Output
where
    A: Clone + Send + Sync + 'static,
    F: FnOnce() -> A + Send + 'static,
    X: Curried<'a, OptionAsync<A>, BoxFuture<'static, A>>,
{
    curry(move |option: OptionAsync<A>| option.get_or_else(fallback), option)
}

/// [`OptionAsync::case_of`] with the option last, or curried with [`Pipe`](crate::Pipe).
pub fn case_of<'a, A, B, P, N, X>(cases: OptionCases<P, N>, option: X) -> X::Output
where
    A: Clone + Send + Sync + 'static,
    B: Send + 'static,
    P: FnOnce(A) -> B + Send + 'static,
    N: FnOnce() -> B + Send + 'static,
    X: Curried<'a, OptionAsync<A>, BoxFuture<'static, B>>,
{
    curry(move |option: OptionAsync<A>| option.case_of(cases), option)
}

/// [`OptionAsync::get_or_null`] as a unary function.
pub fn get_or_null<A>(option: OptionAsync<A>) -> BoxFuture<'static, Nullable<A>>
where
    A: Clone + Send + Sync + 'static,
{
    option.get_or_null()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::{none, some};
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    #[tokio::test]
    async fn test_from_option_settles_immediately() {
        assert_eq!(OptionAsync::from_option(some(1)).await, some(1));
        assert_eq!(OptionAsync::<i32>::from(none()).await, none());
    }

    #[rstest]
    #[tokio::test]
    async fn test_map_skipped_when_absent() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        let mapped = none_async::<i32>().map(move |value| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            value
        });
        assert_eq!(mapped.await, none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_settled_reports_rejection() {
        let failing = OptionAsync::<i32>::from_fallible(async { Err("unreachable host") });
        assert_eq!(
            failing.settled().await,
            Err(Rejection::new("unreachable host"))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_rejection_skips_chained_steps() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        let failing = OptionAsync::<i32>::from_fallible(async { Err("down") })
            .flat_map(move |value| {
                calls_clone.fetch_add(1, Ordering::SeqCst);
                some(value)
            });
        assert_eq!(failing.settled().await, Err(Rejection::new("down")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
