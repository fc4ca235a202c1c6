//! `ResultAsync` - a [`Result`] that becomes available later.
//!
//! `ResultAsync<A, E>` wraps a deferred computation producing exactly one
//! `Result<A, E>`. The computation runs at most once and every consumer
//! observes the same settled result.
//!
//! Failures flow through chained steps exactly like they do for [`Result`]:
//! [`map`](ResultAsync::map) and [`flat_map`](ResultAsync::flat_map) skip
//! their callbacks and [`flat_map`](ResultAsync::flat_map) widens the error
//! type with [`Into`].
//!
//! # Failures versus Rejections
//!
//! A `Failure` is an expected outcome carried as data. A *rejection* means the
//! computation itself broke down (a panic inside it). Rejections skip every
//! chained step, are routed to the `err` arm of
//! [`case_of`](ResultAsync::case_of) through `E: From<Rejection>`, and resume
//! as a panic when the container is awaited directly.
//!
//! `case_of` is therefore only available when the error type can be built
//! from a [`Rejection`]. `String` qualifies; `&'static str` and most error
//! enums do not. For those, [`case_of_with`](ResultAsync::case_of_with) takes
//! the conversion as an explicit function, and
//! [`settled`](ResultAsync::settled) exposes the rejection as is.
//!
//! # Examples
//!
//! ```rust
//! use optres::{Pipe, ResultAsync, chain, err, ok, ok_async, result_async};
//!
//! # futures::executor::block_on(async {
//! let checked = ok_async::<_, String>("yolo")
//!     .map(str::len)
//!     .flat_map(|length| {
//!         if length > 2 { ok(length) } else { err("too short".to_string()) }
//!     });
//! assert_eq!(checked.await, ok(4));
//!
//! let parsed: ResultAsync<i32, String> = chain!(
//!     ResultAsync::from_future(async { "42".parse::<i32>().map_err(|e| e.to_string()) }),
//!     result_async::map(|value: i32| value * 2, Pipe),
//! );
//! assert_eq!(parsed.await, ok(84));
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{self, BoxFuture, FutureExt};

use crate::compose::{Curried, curry};
use crate::deferred::{Deferred, Rejection, resume};
use crate::result::{Result, ResultCases};

/// A deferred computation yielding a [`Result<A, E>`].
///
/// Awaiting a `ResultAsync` yields the settled `Result<A, E>`.
///
/// # Panics
///
/// Awaiting a rejected `ResultAsync` panics with the [`Rejection`] as payload.
pub struct ResultAsync<A, E> {
    deferred: Deferred<Result<A, E>>,
}

impl<A, E> Clone for ResultAsync<A, E> {
    fn clone(&self) -> Self {
        Self {
            deferred: self.deferred.clone(),
        }
    }
}

impl<A, E> fmt::Debug for ResultAsync<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ResultAsync").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(ResultAsync<i32, String>: Send, Sync, Clone, Unpin);

/// A `ResultAsync` already settled to `Success(value)`.
pub fn ok_async<A, E>(value: A) -> ResultAsync<A, E>
where
    A: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    ResultAsync::from_result(Result::Success(value))
}

/// A `ResultAsync` already settled to `Failure(error)`.
pub fn err_async<A, E>(error: E) -> ResultAsync<A, E>
where
    A: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    ResultAsync::from_result(Result::Failure(error))
}

/// Lifts an immediate result.
///
/// # Examples
///
/// ```rust
/// use optres::{err, from_result};
///
/// # futures::executor::block_on(async {
/// let failed = from_result::<i32, _>(err("nope"));
/// assert_eq!(failed.await, err("nope"));
/// # });
/// ```
pub fn from_result<A, E>(result: Result<A, E>) -> ResultAsync<A, E>
where
    A: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    ResultAsync::from_result(result)
}

impl<A, E> ResultAsync<A, E>
where
    A: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Lifts an immediate result.
    pub fn from_result(result: Result<A, E>) -> Self {
        Self {
            deferred: Deferred::settled(result),
        }
    }

    /// Wraps a future producing a standard result; `Err(error)` becomes
    /// `Failure(error)`.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = std::result::Result<A, E>> + Send + 'static,
    {
        Self {
            deferred: Deferred::from_future(future.map(Result::<A, E>::from)),
        }
    }

    /// Wraps a future producing a standard result whose error is translated
    /// by `on_error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{ResultAsync, err};
    ///
    /// # futures::executor::block_on(async {
    /// let parsed = ResultAsync::from_future_with(
    ///     async { "forty-two".parse::<i32>() },
    ///     |_| "not a number",
    /// );
    /// assert_eq!(parsed.await, err("not a number"));
    /// # });
    /// ```
    pub fn from_future_with<Fut, X, G>(future: Fut, on_error: G) -> Self
    where
        Fut: Future<Output = std::result::Result<A, X>> + Send + 'static,
        G: FnOnce(X) -> E + Send + 'static,
    {
        Self::from_future(future.map(|outcome| outcome.map_err(on_error)))
    }

    /// Transforms the eventual success value.
    pub fn map<B, F>(self, function: F) -> ResultAsync<B, E>
    where
        B: Clone + Send + Sync + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        ResultAsync {
            deferred: self
                .deferred
                .then(move |result| future::ready(Ok(result.map(function)))),
        }
    }

    /// Transforms the eventual failure value.
    pub fn map_err<F, G>(self, function: G) -> ResultAsync<A, F>
    where
        F: Clone + Send + Sync + 'static,
        G: FnOnce(E) -> F + Send + 'static,
    {
        ResultAsync {
            deferred: self
                .deferred
                .then(move |result| future::ready(Ok(result.map_err(function)))),
        }
    }

    /// Chains a step returning either a [`Result`] or a `ResultAsync`.
    ///
    /// `function` runs only on success. The error seen so far is widened into
    /// the step's error type `F`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Result, err, err_async, ok, ok_async};
    ///
    /// # futures::executor::block_on(async {
    /// let synchronous = ok_async::<_, &str>(4).flat_map(|value| ok::<_, &str>(value + 1));
    /// let asynchronous = ok_async::<_, &str>(4).flat_map(|value| ok_async::<_, &str>(value + 1));
    /// assert_eq!(synchronous.await, asynchronous.await);
    ///
    /// let failed = err_async::<i32, _>("first").flat_map(|value| ok::<_, &str>(value + 1));
    /// assert_eq!(failed.await, err("first"));
    /// # });
    /// ```
    pub fn flat_map<B, F, G, R>(self, function: G) -> ResultAsync<B, F>
    where
        B: Clone + Send + Sync + 'static,
        F: Clone + Send + Sync + 'static,
        E: Into<F>,
        G: FnOnce(A) -> R + Send + 'static,
        R: IntoResultAsync<B, F>,
    {
        ResultAsync {
            deferred: self.deferred.then(move |result| async move {
                match result {
                    Result::Success(value) => {
                        let next = function(value).into_result_async();
                        next.deferred.settlement().await
                    }
                    Result::Failure(error) => Ok(Result::Failure(error.into())),
                }
            }),
        }
    }

    /// Resolves and dispatches to exactly one arm.
    ///
    /// A rejected computation is converted into `E` and handed to the `err`
    /// arm.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{ResultAsync, ResultCases};
    ///
    /// # futures::executor::block_on(async {
    /// let broken = ResultAsync::<i32, String>::from_future(async {
    ///     if true { panic!("disk on fire") }
    ///     Ok(1)
    /// });
    /// let message = broken
    ///     .case_of(ResultCases {
    ///         ok: |value: i32| value.to_string(),
    ///         err: |error: String| error,
    ///     })
    ///     .await;
    /// assert_eq!(message, "deferred computation rejected: disk on fire");
    /// # });
    /// ```
    pub fn case_of<B, O, R>(&self, cases: ResultCases<O, R>) -> BoxFuture<'static, B>
    where
        E: From<Rejection>,
        B: Send + 'static,
        O: FnOnce(A) -> B + Send + 'static,
        R: FnOnce(E) -> B + Send + 'static,
    {
        self.case_of_with(cases, <E as From<Rejection>>::from)
    }

    /// Resolves and dispatches to exactly one arm, converting a rejection
    /// into `E` with `on_rejection` before handing it to the `err` arm.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{ResultAsync, ResultCases};
    ///
    /// # futures::executor::block_on(async {
    /// let broken = ResultAsync::<i32, &'static str>::from_future(async {
    ///     if true { panic!("disk on fire") }
    ///     Ok(1)
    /// });
    /// let message = broken
    ///     .case_of_with(
    ///         ResultCases {
    ///             ok: |_: i32| "fine",
    ///             err: |error: &'static str| error,
    ///         },
    ///         |_| "crashed",
    ///     )
    ///     .await;
    /// assert_eq!(message, "crashed");
    /// # });
    /// ```
    pub fn case_of_with<B, O, R, H>(
        &self,
        cases: ResultCases<O, R>,
        on_rejection: H,
    ) -> BoxFuture<'static, B>
    where
        B: Send + 'static,
        O: FnOnce(A) -> B + Send + 'static,
        R: FnOnce(E) -> B + Send + 'static,
        H: FnOnce(Rejection) -> E + Send + 'static,
    {
        let settlement = self.deferred.settlement();
        async move {
            match settlement.await {
                Ok(result) => result.case_of(cases),
                Err(rejection) => (cases.err)(on_rejection(rejection)),
            }
        }
        .boxed()
    }

    /// Resolves without panicking, surfacing a rejection as `Err`.
    pub fn settled(&self) -> BoxFuture<'static, std::result::Result<Result<A, E>, Rejection>> {
        self.deferred.settlement().boxed()
    }
}

impl<A, E> Future for ResultAsync<A, E>
where
    A: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    type Output = Result<A, E>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.deferred.poll_settlement(context).map(resume)
    }
}

impl<A, E> From<Result<A, E>> for ResultAsync<A, E>
where
    A: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn from(result: Result<A, E>) -> Self {
        Self::from_result(result)
    }
}

/// Anything a [`ResultAsync::flat_map`] callback may return.
pub trait IntoResultAsync<A, E> {
    /// Normalizes `self` into a deferred result.
    fn into_result_async(self) -> ResultAsync<A, E>;
}

impl<A, E> IntoResultAsync<A, E> for Result<A, E>
where
    A: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn into_result_async(self) -> ResultAsync<A, E> {
        ResultAsync::from_result(self)
    }
}

impl<A, E> IntoResultAsync<A, E> for ResultAsync<A, E> {
    fn into_result_async(self) -> Self {
        self
    }
}

impl<'a, A, E, T> Curried<'a, ResultAsync<A, E>, T> for ResultAsync<A, E> {
    type Output = T;

    #[inline]
    fn curry<F>(self, function: F) -> T
    where
        F: FnOnce(ResultAsync<A, E>) -> T + 'a,
    {
        function(self)
    }
}

// =============================================================================
// Namespace Functions
// =============================================================================

/// [`ResultAsync::map`] with the result last, or curried with [`Pipe`](crate::Pipe).
pub fn map<'a, A, E, B, F, X>(function: F, result: X) -> X::Output
where
    A: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    F: FnOnce(A) -> B + Send + 'static,
    X: Curried<'a, ResultAsync<A, E>, ResultAsync<B, E>>,
{
    curry(move |result: ResultAsync<A, E>| result.map(function), result)
}

/// [`ResultAsync::flat_map`] with the result last, or curried with [`Pipe`](crate::Pipe).
pub fn flat_map<'a, A, E, B, F, G, R, X>(function: G, result: X) -> X::Output
where
    A: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + Into<F> + 'static,
    B: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + 'static,
    G: FnOnce(A) -> R + Send + 'static,
    R: IntoResultAsync<B, F>,
    X: Curried<'a, ResultAsync<A, E>, ResultAsync<B, F>>,
{
    curry(move |result: ResultAsync<A, E>| result.flat_map(function), result)
}

/// [`ResultAsync::case_of`] with the result last, or curried with [`Pipe`](crate::Pipe).
pub fn case_of<'a, A, E, B, O, R, X>(cases: ResultCases<O, R>, result: X) -> X::Output
where
    A: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + From<Rejection> + 'static,
    B: Send + 'static,
    O: FnOnce(A) -> B + Send + 'static,
    R: FnOnce(E) -> B + Send + 'static,
    X: Curried<'a, ResultAsync<A, E>, BoxFuture<'static, B>>,
{
    curry(move |result: ResultAsync<A, E>| result.case_of(cases), result)
}

/// [`ResultAsync::case_of_with`] with the result last, or curried with
/// [`Pipe`](crate::Pipe).
pub fn case_of_with<'a, A, E, B, O, R, H, X>(
    cases: ResultCases<O, R>,
    on_rejection: H,
    result: X,
) -> X::Output
where
    A: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
    B: Send + 'static,
    O: FnOnce(A) -> B + Send + 'static,
    R: FnOnce(E) -> B + Send + 'static,
    H: FnOnce(Rejection) -> E + Send + 'static,
    X: Curried<'a, ResultAsync<A, E>, BoxFuture<'static, B>>,
{
    curry(
        move |result: ResultAsync<A, E>| result.case_of_with(cases, on_rejection),
        result,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{err, ok};
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    #[tokio::test]
    async fn test_from_future_error_becomes_failure() {
        let failed = ResultAsync::<i32, &str>::from_future(async { Err("refused") });
        assert_eq!(failed.await, err("refused"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_map_err_leaves_success_alone() {
        let mapped = ok_async::<i32, &str>(3).map_err(str::len);
        assert_eq!(mapped.await, ok(3));
    }

    #[rstest]
    #[tokio::test]
    async fn test_map_skipped_on_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        let mapped = err_async::<i32, &str>("stop").map(move |value| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            value
        });
        assert_eq!(mapped.await, err("stop"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Widened {
        Narrow(&'static str),
        Other,
    }

    impl From<&'static str> for Widened {
        fn from(reason: &'static str) -> Self {
            Self::Narrow(reason)
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_flat_map_widens_error() {
        let widened: ResultAsync<i32, Widened> =
            err_async::<i32, &'static str>("narrow").flat_map(ok::<i32, Widened>);
        assert_eq!(widened.await, err(Widened::Narrow("narrow")));

        let replaced: ResultAsync<i32, Widened> =
            ok_async::<i32, &'static str>(1).flat_map(|_| err::<i32, _>(Widened::Other));
        assert_eq!(replaced.await, err(Widened::Other));
    }
}
