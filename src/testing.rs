//! Assertions for tests that produce [`Result`] and
//! [`ResultAsync`](crate::ResultAsync) values.
//!
//! Each assertion panics with a message naming both the expected and the
//! actual outcome.
//!
//! # Examples
//!
//! ```rust
//! use optres::testing::{assert_err, assert_ok};
//! use optres::{err, ok};
//!
//! assert_ok(ok::<_, String>(3), 3);
//! assert_err(err::<i32, _>("bad input"), "bad input");
//! ```

use std::fmt::Debug;

use crate::result::{Result, ResultCases};

/// Asserts that `result` is a success holding `expected`.
///
/// # Panics
///
/// Panics if `result` is a failure or holds a different value.
#[track_caller]
pub fn assert_ok<A, E>(result: Result<A, E>, expected: A)
where
    A: PartialEq + Debug,
    E: Debug,
{
    assert!(
        result.is_ok(),
        "expected Success({expected:?}), got {result:?}"
    );
    let value = result.case_of(ResultCases {
        ok: Some,
        err: |_| None,
    });
    assert_eq!(value, Some(expected), "unexpected success value");
}

/// Asserts that `result` is a failure holding `expected`.
///
/// # Panics
///
/// Panics if `result` is a success or holds a different error.
#[track_caller]
pub fn assert_err<A, E>(result: Result<A, E>, expected: E)
where
    A: Debug,
    E: PartialEq + Debug,
{
    assert!(
        result.is_err(),
        "expected Failure({expected:?}), got {result:?}"
    );
    let error = result.case_of(ResultCases {
        ok: |_| None,
        err: Some,
    });
    assert_eq!(error, Some(expected), "unexpected failure value");
}

/// Awaits `result` and asserts that it settled to a success holding
/// `expected`.
///
/// # Panics
///
/// Panics if the computation was rejected or [`assert_ok`] fails.
#[cfg(feature = "async")]
pub async fn assert_ok_async<A, E>(result: crate::ResultAsync<A, E>, expected: A)
where
    A: Clone + Send + Sync + PartialEq + Debug + 'static,
    E: Clone + Send + Sync + Debug + 'static,
{
    assert_ok(result.await, expected);
}

/// Awaits `result` and asserts that it settled to a failure holding
/// `expected`.
///
/// # Panics
///
/// Panics if the computation was rejected or [`assert_err`] fails.
#[cfg(feature = "async")]
pub async fn assert_err_async<A, E>(result: crate::ResultAsync<A, E>, expected: E)
where
    A: Clone + Send + Sync + Debug + 'static,
    E: Clone + Send + Sync + PartialEq + Debug + 'static,
{
    assert_err(result.await, expected);
}
