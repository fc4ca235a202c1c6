//! `Option` - a value that may be absent.
//!
//! [`Option<A>`] is either `Present(A)` or `Absent`. It replaces nullable
//! values and null checks with an explicit container whose operations
//! short-circuit on absence:
//!
//! - [`map`](Option::map) transforms a present value
//! - [`flat_map`](Option::flat_map) chains a step that may itself produce nothing
//! - [`case_of`](Option::case_of) eliminates the container with one arm per variant
//! - [`get_or_else`](Option::get_or_else) / [`get_or_null`](Option::get_or_null)
//!   extract a plain value
//!
//! Each operation is also a free function in this module taking the container
//! last, so it can be partially applied with [`Pipe`] and threaded through
//! [`chain!`](crate::chain!).
//!
//! # Examples
//!
//! ```rust
//! use optres::{Option, OptionCases, Pipe, chain, option, some};
//!
//! let name = Option::from_nullable(Some("bob"));
//! assert_eq!(name.map(str::len).get_or_null(), Some(3));
//!
//! let greeting = chain!(
//!     some("alice"),
//!     option::map(|name: &str| name.to_uppercase(), Pipe),
//!     option::case_of(
//!         OptionCases {
//!             present: |name: String| format!("hello {name}"),
//!             absent: || "nobody here".to_string(),
//!         },
//!         Pipe,
//!     ),
//! );
//! assert_eq!(greeting, "hello ALICE");
//! ```

use crate::Nullable;
use crate::compose::{Curried, curry};
use crate::result::Result;

/// A value that is either present or absent.
///
/// # Type Parameters
///
/// * `A` - The type of the present value
///
/// # Examples
///
/// ```rust
/// use optres::{Option, none, some};
///
/// let present: Option<i32> = some(12);
/// let absent: Option<i32> = none();
///
/// assert_eq!(present.get_or_else(|| 2), 12);
/// assert_eq!(absent.get_or_else(|| 2), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Option<A> {
    /// A value is present.
    Present(A),
    /// No value.
    Absent,
}

/// The two arms handed to [`Option::case_of`].
///
/// # Examples
///
/// ```rust
/// use optres::{OptionCases, some};
///
/// let length = some("yo").case_of(OptionCases {
///     present: |text: &str| text.len(),
///     absent: || 0,
/// });
/// assert_eq!(length, 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct OptionCases<P, N> {
    /// Invoked with the value when it is present.
    pub present: P,
    /// Invoked when the value is absent.
    pub absent: N,
}

/// Wraps a value as [`Option::Present`].
#[inline]
pub const fn some<A>(value: A) -> Option<A> {
    Option::Present(value)
}

/// Creates an [`Option::Absent`].
#[inline]
pub const fn none<A>() -> Option<A> {
    Option::Absent
}

impl<A> Option<A> {
    /// Lifts a nullable value: `None` becomes `Absent`, `Some(value)` becomes
    /// `Present(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Option;
    ///
    /// assert!(Option::<&str>::from_nullable(None).is_none());
    /// assert!(!Option::from_nullable(Some("x")).is_none());
    /// ```
    #[inline]
    pub fn from_nullable(value: Nullable<A>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Returns `true` only for `Absent`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` only for `Present`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Borrows the present value.
    #[inline]
    pub const fn as_ref(&self) -> Option<&A> {
        match self {
            Self::Present(value) => Option::Present(value),
            Self::Absent => Option::Absent,
        }
    }

    /// Applies `function` to a present value.
    ///
    /// `Absent` stays `Absent` and `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Option, none, some};
    ///
    /// assert_eq!(some("yolo").map(str::len), some(4));
    ///
    /// let absent: Option<&str> = none();
    /// assert_eq!(absent.map(str::len), none());
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.flat_map(|value| Option::Present(function(value)))
    }

    /// Chains a step that may itself produce no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{none, some};
    ///
    /// let half = |value: i32| if value % 2 == 0 { some(value / 2) } else { none() };
    ///
    /// assert_eq!(some(8).flat_map(half), some(4));
    /// assert_eq!(some(7).flat_map(half), none());
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Option::Absent,
        }
    }

    /// Eliminates the option by invoking exactly one of the two arms.
    #[inline]
    pub fn case_of<B, P, N>(self, cases: OptionCases<P, N>) -> B
    where
        P: FnOnce(A) -> B,
        N: FnOnce() -> B,
    {
        match self {
            Self::Present(value) => (cases.present)(value),
            Self::Absent => (cases.absent)(),
        }
    }

    /// Returns the present value, or the result of `fallback`.
    ///
    /// `fallback` runs only when the value is absent.
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    /// Converts back to the native nullable representation.
    #[inline]
    pub fn get_or_null(self) -> Nullable<A> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Lifts into a [`Result`], failing with `error` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Option, err, none, ok, some};
    ///
    /// assert_eq!(some(1).to_result("missing"), ok(1));
    /// assert_eq!(none::<i32>().to_result("missing"), err("missing"));
    /// ```
    #[inline]
    pub fn to_result<E>(self, error: E) -> Result<A, E> {
        Result::from_option(self, error)
    }
}

impl<A> Default for Option<A> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<A> From<Nullable<A>> for Option<A> {
    fn from(value: Nullable<A>) -> Self {
        Self::from_nullable(value)
    }
}

impl<A> From<Option<A>> for Nullable<A> {
    fn from(option: Option<A>) -> Self {
        option.get_or_null()
    }
}

impl<'a, A, T> Curried<'a, Option<A>, T> for Option<A> {
    type Output = T;

    #[inline]
    fn curry<F>(self, function: F) -> T
    where
        F: FnOnce(Option<A>) -> T + 'a,
    {
        function(self)
    }
}

// =============================================================================
// Namespace Functions
// =============================================================================

/// Lifts a nullable value. See [`Option::from_nullable`].
#[inline]
pub fn from_nullable<A>(value: Nullable<A>) -> Option<A> {
    Option::from_nullable(value)
}

/// [`Option::map`] with the option last, or curried with [`Pipe`](crate::Pipe).
///
/// # Examples
///
/// ```rust
/// use optres::{Pipe, chain, none, option, some};
///
/// assert_eq!(option::map(|value: i32| value + 1, some(1)), some(2));
///
/// let check_length_over_2 = |text| {
///     chain!(
///         text,
///         option::map(|text: &str| text.len(), Pipe),
///         option::map(|length: usize| length > 2, Pipe),
///     )
/// };
/// assert_eq!(check_length_over_2(some("yolo")), some(true));
/// assert_eq!(check_length_over_2(none()), none());
/// ```
pub fn map<'a, A, B, F, X>(function: F, option: X) -> X::Output
where
    A: 'a,
    B: 'a,
    F: FnOnce(A) -> B + 'a,
    X: Curried<'a, Option<A>, Option<B>>,
{
    curry(move |option: Option<A>| option.map(function), option)
}

/// [`Option::flat_map`] with the option last, or curried with [`Pipe`](crate::Pipe).
pub fn flat_map<'a, A, B, F, X>(function: F, option: X) -> X::Output
where
    A: 'a,
    B: 'a,
    F: FnOnce(A) -> Option<B> + 'a,
    X: Curried<'a, Option<A>, Option<B>>,
{
    curry(move |option: Option<A>| option.flat_map(function), option)
}

/// [`Option::case_of`] with the option last, or curried with [`Pipe`](crate::Pipe).
pub fn case_of<'a, A, B, P, N, X>(cases: OptionCases<P, N>, option: X) -> X::Output
where
    A: 'a,
    B: 'a,
    P: FnOnce(A) -> B + 'a,
    N: FnOnce() -> B + 'a,
    X: Curried<'a, Option<A>, B>,
{
    curry(move |option: Option<A>| option.case_of(cases), option)
}

/// [`Option::get_or_else`] with the option last, or curried with [`Pipe`](crate::Pipe).
pub fn get_or_else<'a, A, F, X>(fallback: F, option: X) -> X::Output
where
    A: 'a,
    F: FnOnce() -> A + 'a,
    X: Curried<'a, Option<A>, A>,
{
    curry(move |option: Option<A>| option.get_or_else(fallback), option)
}

/// [`Option::to_result`] with the option last, or curried with [`Pipe`](crate::Pipe).
pub fn to_result<'a, A, E, X>(error: E, option: X) -> X::Output
where
    A: 'a,
    E: 'a,
    X: Curried<'a, Option<A>, Result<A, E>>,
{
    curry(move |option: Option<A>| option.to_result(error), option)
}

/// [`Option::get_or_null`] as a unary function.
#[inline]
pub fn get_or_null<A>(option: Option<A>) -> Nullable<A> {
    option.get_or_null()
}

/// [`Option::is_none`] as a unary function.
#[inline]
pub fn is_none<A>(option: Option<A>) -> bool {
    option.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Pipe;
    use rstest::rstest;

    #[rstest]
    fn test_some_and_none_construction() {
        assert_eq!(some(12).get_or_null(), Some(12));
        assert_eq!(none::<i32>().get_or_null(), None);
    }

    #[rstest]
    #[case(Some(5), false)]
    #[case(None, true)]
    fn test_from_nullable(#[case] value: Nullable<i32>, #[case] expected_none: bool) {
        assert_eq!(Option::from_nullable(value).is_none(), expected_none);
    }

    #[rstest]
    fn test_map_is_not_called_on_absent() {
        let mut calls = 0;
        let result = none::<i32>().map(|value| {
            calls += 1;
            value
        });
        assert_eq!(result, none());
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_as_ref_keeps_original() {
        let option = some(String::from("kept"));
        assert_eq!(option.as_ref().map(String::len), some(4));
        assert_eq!(option, some(String::from("kept")));
    }

    #[rstest]
    fn test_nullable_conversions() {
        let option: Option<i32> = Some(3).into();
        assert_eq!(option, some(3));
        let nullable: Nullable<i32> = option.into();
        assert_eq!(nullable, Some(3));
        assert_eq!(Option::<i32>::default(), none());
    }

    #[rstest]
    fn test_namespace_get_or_else_point_and_pipe() {
        assert_eq!(get_or_else(|| 0, some(0)), 0);
        let fallback_to_seven = get_or_else(|| 7, Pipe);
        assert_eq!(fallback_to_seven(none()), 7);
    }

    #[rstest]
    fn test_namespace_to_result() {
        assert_eq!(to_result("missing", some(1)), Result::Success(1));
        let missing = to_result("missing", Pipe);
        assert_eq!(missing(none::<i32>()), Result::Failure("missing"));
    }
}
