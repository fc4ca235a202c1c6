//! # optres
//!
//! `Option` and `Result` containers for code that would rather pass values
//! around than check for null or catch exceptions.
//!
//! ## Overview
//!
//! - **[`Option`]**: a value that is `Present` or `Absent`
//! - **[`Result`]**: a computation that ended in `Success` or `Failure`, with
//!   error types widened step by step through [`Result::flat_map`]
//! - **[`OptionAsync`] / [`ResultAsync`]**: the same containers around a
//!   deferred computation that settles exactly once
//! - **[`combine`]**: merges independent labelled results, first failure wins
//! - **[`chain!`]**: threads a value through a sequence of functions
//!
//! Every container operation exists both as a method and as a free function
//! in the container's module taking the container last. Passing [`Pipe`] in
//! place of the container returns the operation for later application, which
//! is how the free functions compose with [`chain!`].
//!
//! ## Feature Flags
//!
//! - `async` (default): [`OptionAsync`], [`ResultAsync`] and [`Rejection`]
//! - `serde`: `Serialize`/`Deserialize` for [`Option`] and [`Result`]
//! - `tracing`: a debug event whenever a deferred computation is rejected
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optres::prelude::*;
//! use optres::{option, result};
//!
//! let port = chain!(
//!     Option::from_nullable(Some("8080")),
//!     option::to_result("missing port", Pipe),
//!     result::flat_map(
//!         |text: &str| Result::from(text.parse::<u16>().map_err(|_| "not a port")),
//!         Pipe,
//!     ),
//! );
//! assert_eq!(port, ok(8080));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, their constructors and the composition tools.
///
/// # Usage
///
/// ```rust
/// use optres::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::{Pipe, chain, curry};
    pub use crate::option::{Option, OptionCases, none, some};
    pub use crate::result::{Result, ResultCases, err, ok};
    pub use crate::{Nullable, combine};

    #[cfg(feature = "async")]
    pub use crate::option_async::{OptionAsync, none_async, some_async};

    #[cfg(feature = "async")]
    pub use crate::result_async::{ResultAsync, err_async, ok_async};
}

/// The standard library's optional value, as accepted by
/// [`Option::from_nullable`] and returned by [`Option::get_or_null`].
pub type Nullable<A> = std::option::Option<A>;

pub mod compose;

pub mod option;

pub mod result;

pub mod combine;

pub mod list;

pub mod testing;

#[cfg(feature = "async")]
mod deferred;

#[cfg(feature = "async")]
pub mod option_async;

#[cfg(feature = "async")]
pub mod result_async;

pub use combine::combine;
pub use compose::{Curried, Pipe, Piped, curry};
pub use option::{Option, OptionCases, none, some};
pub use result::{Result, ResultCases, err, ok};

#[cfg(feature = "async")]
pub use deferred::Rejection;

#[cfg(feature = "async")]
pub use option_async::{IntoOptionAsync, OptionAsync, none_async, some_async};

#[cfg(feature = "async")]
pub use result_async::{IntoResultAsync, ResultAsync, err_async, from_result, ok_async};
