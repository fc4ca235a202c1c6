//! The `chain!` macro for left-to-right function application.

/// Threads a seed value through a series of unary functions, left to right.
///
/// `chain!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// The macro knows nothing about the containers of this crate; it is most
/// useful together with the pipe form of the namespace functions, which
/// return `container -> result` closures when given [`Pipe`](crate::Pipe).
///
/// # Syntax
///
/// - `chain!(x)` - Returns `x` unchanged
/// - `chain!(x, f)` - Returns `f(x)`
/// - `chain!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// Each function is called exactly once, so [`FnOnce`] is enough.
///
/// # Examples
///
/// ```
/// use optres::{Pipe, chain, option, some};
///
/// let long_enough = chain!(
///     some("yolo"),
///     option::map(|text: &str| text.len(), Pipe),
///     option::map(|length: usize| length > 3, Pipe),
///     option::get_or_null,
/// );
/// assert_eq!(long_enough, Some(true));
/// ```
///
/// Plain functions work too:
///
/// ```
/// use optres::chain;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// assert_eq!(chain!(3, square, add_one), 10);
/// ```
#[macro_export]
macro_rules! chain {
    ($seed:expr $(,)?) => {
        $seed
    };

    ($seed:expr, $function:expr $(,)?) => {
        $function($seed)
    };

    ($seed:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::chain!($function($seed), $($remaining_functions),+)
    };
}
