//! Single-settlement deferred computations.
//!
//! [`OptionAsync`](crate::OptionAsync) and [`ResultAsync`](crate::ResultAsync)
//! are thin wrappers around a `Deferred<T>`: a boxed future made
//! [`Shared`] so that it settles at most once and every consumer observes the
//! same outcome, without re-running the computation.
//!
//! A deferred computation settles either with a value or with a
//! [`Rejection`]. Rejections come from panics inside the wrapped future (and
//! inside every continuation chained onto it), or from fallible constructors
//! such as [`OptionAsync::from_fallible`](crate::OptionAsync::from_fallible).

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::task::{Context, Poll};

use futures::future::{self, BoxFuture, FutureExt, Shared};

/// Represents a deferred computation that rejected instead of producing a
/// value.
///
/// # Examples
///
/// ```rust
/// use optres::Rejection;
///
/// let rejection = Rejection::new("connection reset");
/// assert_eq!(rejection.message(), "connection reset");
/// assert_eq!(
///     format!("{rejection}"),
///     "deferred computation rejected: connection reset"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    message: String,
}

impl Rejection {
    /// Creates a rejection carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The reason the computation rejected.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Builds a rejection from a caught panic payload.
    ///
    /// A payload that already is a `Rejection` (a rejection resumed further up
    /// a chain) is kept as is. `&str` and `String` payloads become the
    /// message; payloads of any other type get a generic message.
    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let rejection = match payload.downcast::<Self>() {
            Ok(rejection) => *rejection,
            Err(payload) => {
                if let Some(message) = payload.downcast_ref::<&str>() {
                    Self::new(*message)
                } else if let Some(message) = payload.downcast_ref::<String>() {
                    Self::new(message.clone())
                } else {
                    Self::new("deferred computation panicked")
                }
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(reason = %rejection.message, "deferred computation rejected");

        rejection
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "deferred computation rejected: {}", self.message)
    }
}

impl std::error::Error for Rejection {}

impl From<Rejection> for String {
    fn from(rejection: Rejection) -> Self {
        rejection.to_string()
    }
}

/// How a deferred computation settled.
pub(crate) type Settlement<T> = Result<T, Rejection>;

/// The shared handle every consumer of a deferred computation polls.
pub(crate) type SharedSettlement<T> = Shared<BoxFuture<'static, Settlement<T>>>;

/// Resumes a rejection as a panic carrying the [`Rejection`].
#[track_caller]
pub(crate) fn resume<T>(settlement: Settlement<T>) -> T {
    match settlement {
        Ok(value) => value,
        Err(rejection) => std::panic::panic_any(rejection),
    }
}

/// A computation settling exactly once to a `T` or a [`Rejection`].
///
/// `settlement` is never polled in place: a completed `Shared` handle gives
/// up its inner future, and every later clone of it would be unusable.
/// Polling through `&mut self` goes through `polled`, a handle of its own.
pub(crate) struct Deferred<T> {
    settlement: SharedSettlement<T>,
    polled: Option<SharedSettlement<T>>,
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            settlement: self.settlement.clone(),
            polled: None,
        }
    }
}

impl<T> Deferred<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// An already settled computation.
    pub(crate) fn settled(value: T) -> Self {
        Self::from_fallible(future::ready(Ok(value)))
    }

    /// Wraps a future; a panic while polling it becomes a [`Rejection`].
    pub(crate) fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::from_fallible(future.map(Ok))
    }

    /// Wraps a future that may settle with a [`Rejection`] itself.
    pub(crate) fn from_fallible<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Settlement<T>> + Send + 'static,
    {
        let guarded = AssertUnwindSafe(future)
            .catch_unwind()
            .map(|outcome| outcome.unwrap_or_else(|payload| Err(Rejection::from_panic(payload))));
        Self {
            settlement: guarded.boxed().shared(),
            polled: None,
        }
    }

    /// Chains `continuation` onto the settled value.
    ///
    /// A rejection skips `continuation` and is carried into the new
    /// computation unchanged.
    pub(crate) fn then<U, F, Fut>(self, continuation: F) -> Deferred<U>
    where
        U: Clone + Send + Sync + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Settlement<U>> + Send + 'static,
    {
        Deferred::from_fallible(async move {
            match self.settlement.await {
                Ok(value) => continuation(value).await,
                Err(rejection) => Err(rejection),
            }
        })
    }

    /// A handle on the settlement, independent of `self`.
    pub(crate) fn settlement(&self) -> SharedSettlement<T> {
        self.settlement.clone()
    }

    /// Polls the settlement through a handle owned by `self`.
    ///
    /// Once settled, the outcome is read back from the shared state, so the
    /// container stays usable after being awaited by reference.
    pub(crate) fn poll_settlement(&mut self, context: &mut Context<'_>) -> Poll<Settlement<T>> {
        if let Some(settlement) = self.settlement.peek() {
            self.polled = None;
            return Poll::Ready(settlement.clone());
        }

        let settlement = &self.settlement;
        let polled = self.polled.get_or_insert_with(|| settlement.clone());
        let outcome = polled.poll_unpin(context);
        if outcome.is_ready() {
            self.polled = None;
        }
        outcome
    }
}
