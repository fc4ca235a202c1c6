//! `Result` - the outcome of a fallible computation.
//!
//! [`Result<A, E>`] is either `Success(A)` or `Failure(E)`. The error payload
//! is ordinary application data; it does not need to implement
//! [`std::error::Error`].
//!
//! A failure, once produced, passes unchanged through every later
//! [`map`](Result::map) and [`flat_map`](Result::flat_map) until it is handled
//! by [`case_of`](Result::case_of) or extracted.
//!
//! # Error Widening
//!
//! [`flat_map`](Result::flat_map) lets each step introduce its own error type.
//! The error seen so far is converted with [`Into`] into the error type of the
//! step, so a chain ends with an error type able to represent every failure
//! along the way:
//!
//! ```rust
//! use optres::{Result, err, ok};
//!
//! #[derive(Debug, PartialEq)]
//! struct TooShort;
//!
//! #[derive(Debug, PartialEq)]
//! enum CheckError {
//!     Missing,
//!     TooShort,
//! }
//!
//! impl From<TooShort> for CheckError {
//!     fn from(_: TooShort) -> Self {
//!         Self::TooShort
//!     }
//! }
//!
//! let length: Result<usize, TooShort> = ok("yo").map(str::len);
//! let checked = length.flat_map(|length| {
//!     if length > 2 { ok(length) } else { err(CheckError::Missing) }
//! });
//! assert_eq!(checked, err(CheckError::Missing));
//!
//! let failed: Result<usize, TooShort> = err(TooShort);
//! let checked: Result<usize, CheckError> = failed.flat_map(ok);
//! assert_eq!(checked, err(CheckError::TooShort));
//! ```

use std::any::Any;

use crate::Nullable;
use crate::compose::{Curried, curry};
use crate::option::Option;

/// Either a success value or a failure value.
///
/// # Type Parameters
///
/// * `A` - The type of the success value
/// * `E` - The type of the failure value
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<A, E> {
    /// The computation succeeded.
    Success(A),
    /// The computation failed.
    Failure(E),
}

/// The two arms handed to [`Result::case_of`].
#[derive(Clone, Copy, Debug)]
pub struct ResultCases<O, R> {
    /// Invoked with the success value.
    pub ok: O,
    /// Invoked with the failure value.
    pub err: R,
}

/// Wraps a value as [`Result::Success`].
#[inline]
pub const fn ok<A, E>(value: A) -> Result<A, E> {
    Result::Success(value)
}

/// Wraps an error as [`Result::Failure`].
#[inline]
pub const fn err<A, E>(error: E) -> Result<A, E> {
    Result::Failure(error)
}

impl<A, E> Result<A, E> {
    /// Lifts an [`Option`], failing with `error` when it is absent.
    #[inline]
    pub fn from_option(option: Option<A>, error: E) -> Self {
        match option {
            Option::Present(value) => Self::Success(value),
            Option::Absent => Self::Failure(error),
        }
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Transforms the success value. Failures pass through and `function` is
    /// not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Result, err, ok};
    ///
    /// assert_eq!(ok::<_, String>("yolo").map(str::len), ok(4));
    ///
    /// let failed: Result<&str, &str> = err("some error");
    /// assert_eq!(failed.map(str::len), err("some error"));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Result::Success(function(value)),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Transforms the failure value. Successes pass through.
    #[inline]
    pub fn map_err<F, G>(self, function: G) -> Result<A, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => Result::Failure(function(error)),
        }
    }

    /// Chains a fallible step.
    ///
    /// The error of `self` is widened into the step's error type `F`, so
    /// failures from either side share one error channel.
    #[inline]
    pub fn flat_map<B, F, G>(self, function: G) -> Result<B, F>
    where
        G: FnOnce(A) -> Result<B, F>,
        E: Into<F>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Result::Failure(error.into()),
        }
    }

    /// Eliminates the result by invoking exactly one of the two arms.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Result, ResultCases, err};
    ///
    /// let failed: Result<&str, &str> = err("my mistake");
    /// let message = failed.case_of(ResultCases {
    ///     ok: |_| "success".to_string(),
    ///     err: |error| format!("Failed with {error}"),
    /// });
    /// assert_eq!(message, "Failed with my mistake");
    /// ```
    #[inline]
    pub fn case_of<B, O, R>(self, cases: ResultCases<O, R>) -> B
    where
        O: FnOnce(A) -> B,
        R: FnOnce(E) -> B,
    {
        match self {
            Self::Success(value) => (cases.ok)(value),
            Self::Failure(error) => (cases.err)(error),
        }
    }

    /// Returns the success value, raising the stored error otherwise.
    ///
    /// Callers that want safe extraction check [`is_ok`](Self::is_ok) first or
    /// use [`case_of`](Self::case_of).
    ///
    /// # Panics
    ///
    /// Panics on `Failure`; the panic payload is the error value itself and
    /// can be recovered with [`std::panic::catch_unwind`] and
    /// [`downcast`](Box::downcast).
    ///
    /// Inside an async step the panic becomes a
    /// [`Rejection`](crate::Rejection), which keeps only a message. An error of
    /// type `&str` or `String` becomes that message; any other error type is
    /// reduced to `"deferred computation panicked"`. Return the failure from
    /// the step instead when the error value must survive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Result, err, ok};
    ///
    /// assert_eq!(ok::<_, &str>(10).get_or_throw(), 10);
    ///
    /// let failed: Result<i32, &'static str> = err("some failure");
    /// let payload = std::panic::catch_unwind(|| failed.get_or_throw()).unwrap_err();
    /// assert_eq!(payload.downcast_ref::<&str>(), Some(&"some failure"));
    /// ```
    #[track_caller]
    pub fn get_or_throw(self) -> A
    where
        E: Any + Send,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => std::panic::panic_any(error),
        }
    }

    /// Returns the failure value, panicking on a success.
    #[track_caller]
    pub(crate) fn error_or_panic(self) -> E {
        match self {
            Self::Success(_) => panic!("cannot get error on a success value"),
            Self::Failure(error) => error,
        }
    }

    /// The success value as an [`Option`], discarding any error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Result, err, none, ok, some};
    ///
    /// assert_eq!(ok::<_, &str>(3).ok(), some(3));
    /// assert_eq!(err::<i32, _>("bad").ok(), none());
    /// ```
    #[inline]
    pub fn ok(self) -> Option<A> {
        match self {
            Self::Success(value) => Option::Present(value),
            Self::Failure(_) => Option::Absent,
        }
    }

    /// Converts into the standard library's result.
    #[inline]
    pub fn into_std(self) -> std::result::Result<A, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<A, E> From<std::result::Result<A, E>> for Result<A, E> {
    fn from(result: std::result::Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<A, E> From<Result<A, E>> for std::result::Result<A, E> {
    fn from(result: Result<A, E>) -> Self {
        result.into_std()
    }
}

/// Collects successes, stopping at the first failure.
impl<A, E, C> FromIterator<Result<A, E>> for Result<C, E>
where
    C: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Result<A, E>>>(results: I) -> Self {
        results
            .into_iter()
            .map(Result::into_std)
            .collect::<std::result::Result<C, E>>()
            .into()
    }
}

impl<'a, A, E, T> Curried<'a, Result<A, E>, T> for Result<A, E> {
    type Output = T;

    #[inline]
    fn curry<F>(self, function: F) -> T
    where
        F: FnOnce(Result<A, E>) -> T + 'a,
    {
        function(self)
    }
}

// =============================================================================
// Namespace Functions
// =============================================================================

/// Returns a lifting function that fails with `error` on `None`.
///
/// The returned closure can be reused; each failure gets a clone of `error`.
///
/// # Examples
///
/// ```rust
/// use optres::{err, ok, result};
///
/// let require = result::from_nullable("something wrong");
/// assert_eq!(require(Some("yo")), ok("yo"));
/// assert_eq!(require(None), err("something wrong"));
/// ```
pub fn from_nullable<A, E>(error: E) -> impl Fn(Nullable<A>) -> Result<A, E>
where
    E: Clone,
{
    move |value| Result::from_option(Option::from_nullable(value), error.clone())
}

/// [`Result::map`] with the result last, or curried with [`Pipe`](crate::Pipe).
pub fn map<'a, A, E, B, F, X>(function: F, result: X) -> X::Output
where
    A: 'a,
    E: 'a,
    B: 'a,
    F: FnOnce(A) -> B + 'a,
    X: Curried<'a, Result<A, E>, Result<B, E>>,
{
    curry(move |result: Result<A, E>| result.map(function), result)
}

/// [`Result::flat_map`] with the result last, or curried with [`Pipe`](crate::Pipe).
///
/// # Examples
///
/// ```rust
/// use optres::{Pipe, Result, chain, err, ok, result};
///
/// let is_long_enough = |input: Result<&'static str, &'static str>| {
///     chain!(
///         input,
///         result::map(|text: &str| text.len(), Pipe),
///         result::flat_map(
///             |length: usize| -> Result<(), &'static str> {
///                 if length < 3 { err("too short") } else { ok(()) }
///             },
///             Pipe,
///         ),
///     )
/// };
///
/// assert_eq!(is_long_enough(ok("yolo")), ok(()));
/// assert_eq!(is_long_enough(ok("yo")), err("too short"));
/// ```
pub fn flat_map<'a, A, E, B, F, G, X>(function: G, result: X) -> X::Output
where
    A: 'a,
    E: Into<F> + 'a,
    B: 'a,
    F: 'a,
    G: FnOnce(A) -> Result<B, F> + 'a,
    X: Curried<'a, Result<A, E>, Result<B, F>>,
{
    curry(move |result: Result<A, E>| result.flat_map(function), result)
}

/// [`Result::case_of`] with the result last, or curried with [`Pipe`](crate::Pipe).
pub fn case_of<'a, A, E, B, O, R, X>(cases: ResultCases<O, R>, result: X) -> X::Output
where
    A: 'a,
    E: 'a,
    B: 'a,
    O: FnOnce(A) -> B + 'a,
    R: FnOnce(E) -> B + 'a,
    X: Curried<'a, Result<A, E>, B>,
{
    curry(move |result: Result<A, E>| result.case_of(cases), result)
}

/// [`Result::get_or_throw`] as a unary function.
///
/// # Panics
///
/// Panics with the error as payload when `result` is a failure.
#[track_caller]
pub fn get_or_throw<A, E>(result: Result<A, E>) -> A
where
    E: Any + Send,
{
    result.get_or_throw()
}

/// [`Result::is_ok`] as a unary function.
#[inline]
pub fn is_ok<A, E>(result: Result<A, E>) -> bool {
    result.is_ok()
}

/// [`Result::is_err`] as a unary function.
#[inline]
pub fn is_err<A, E>(result: Result<A, E>) -> bool {
    result.is_err()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::{none, some};
    use rstest::rstest;

    #[rstest]
    fn test_from_option() {
        assert_eq!(Result::from_option(some(1), "missing"), ok(1));
        assert_eq!(Result::from_option(none::<i32>(), "missing"), err("missing"));
    }

    #[rstest]
    fn test_error_or_panic_on_failure() {
        assert_eq!(err::<i32, _>("some failure").error_or_panic(), "some failure");
    }

    #[rstest]
    #[should_panic(expected = "cannot get error on a success value")]
    fn test_error_or_panic_on_success() {
        ok::<_, &str>(10).error_or_panic();
    }

    #[rstest]
    fn test_get_or_throw_payload_is_the_error() {
        let failed: Result<i32, String> = err("boom".to_string());
        let payload = std::panic::catch_unwind(|| failed.get_or_throw()).unwrap_err();
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("boom"));
    }

    #[rstest]
    fn test_flat_map_is_not_called_on_failure() {
        let mut calls = 0;
        let failed: Result<i32, &str> = err("a failure");
        let result: Result<i32, &str> = failed.flat_map(|value| {
            calls += 1;
            ok(value)
        });
        assert_eq!(result, err("a failure"));
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_map_err() {
        let failed: Result<i32, &str> = err("bad");
        assert_eq!(failed.map_err(str::len), err(3));
    }

    #[rstest]
    fn test_std_conversions() {
        let converted: Result<i32, String> = "42".parse::<i32>().map_err(|e| e.to_string()).into();
        assert_eq!(converted, ok(42));
        let back: std::result::Result<i32, String> = converted.into();
        assert_eq!(back, Ok(42));
    }

    #[rstest]
    fn test_collect_stops_at_first_failure() {
        let collected: Result<Vec<i32>, &str> = vec![ok(1), err("first"), err("second")]
            .into_iter()
            .collect();
        assert_eq!(collected, err("first"));

        let collected: Result<Vec<i32>, &str> = vec![ok(1), ok(2)].into_iter().collect();
        assert_eq!(collected, ok(vec![1, 2]));
    }
}
