//! Function composition utilities.
//!
//! - [`curry`] / [`Pipe`]: the dual calling convention shared by every
//!   namespace function (`op(x, container)` or `op(x, Pipe)(container)`)
//! - [`chain!`]: left-to-right application of unary functions to a seed
//!
//! # Example
//!
//! ```
//! use optres::{Pipe, chain, result, ok, Result};
//!
//! let parsed: Result<&str, String> = ok("42");
//! let doubled = chain!(
//!     parsed,
//!     result::flat_map(
//!         |text: &str| Result::from(text.parse::<i32>().map_err(|error| error.to_string())),
//!         Pipe,
//!     ),
//!     result::map(|value: i32| value * 2, Pipe),
//! );
//! assert_eq!(doubled, ok(84));
//! ```

mod chain_macro;
mod curry;

pub use curry::{Curried, Pipe, Piped, curry};

pub use crate::chain;
