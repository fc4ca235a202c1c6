//! The currying helper behind every namespace-level function.
//!
//! Every operation in this crate exists twice: as a method on the container
//! and as a free function in the container's module. The free function takes
//! the container as its *last* argument, and that argument may be left out by
//! passing [`Pipe`] instead. In that case the function is returned for later
//! application, which is what makes the free functions usable inside
//! [`chain!`](crate::chain!).
//!
//! ```text
//! option::map(f, container)  ==  container.map(f)        // point form
//! option::map(f, Pipe)       ==  |container| container.map(f)  // pipe form
//! ```
//!
//! # Design Decisions
//!
//! "Argument not supplied" is a distinct type, not a sentinel value. A payload
//! that merely looks empty (`0`, `""`, `false`, or even [`Option::Absent`])
//! is a real argument and is always applied.
//!
//! [`Option::Absent`]: crate::Option::Absent

/// Marker passed in place of a container to request the curried (pipe) form
/// of a namespace function.
///
/// # Examples
///
/// ```
/// use optres::{Pipe, option, some};
///
/// let double = option::map(|value: i32| value * 2, Pipe);
/// assert_eq!(double(some(21)), some(42));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pipe;

/// A function waiting for its container argument.
pub type Piped<'a, C, T> = Box<dyn FnOnce(C) -> T + 'a>;

/// An argument slot of [`curry`]: either [`Pipe`] or a value of type `C`.
///
/// The containers of this crate implement `Curried<'a, Self, T>` with
/// `Output = T`, which applies the function immediately. [`Pipe`] implements it
/// for every `C` with `Output = Piped<'a, C, T>`.
pub trait Curried<'a, C, T> {
    /// What [`curry`] returns for this argument.
    type Output;

    /// Applies `function` to `self`, or hands it back untouched.
    fn curry<F>(self, function: F) -> Self::Output
    where
        F: FnOnce(C) -> T + 'a;
}

impl<'a, C, T> Curried<'a, C, T> for Pipe {
    type Output = Piped<'a, C, T>;

    #[inline]
    fn curry<F>(self, function: F) -> Self::Output
    where
        F: FnOnce(C) -> T + 'a,
    {
        Box::new(function)
    }
}

impl<'a, 'b, T, R> Curried<'a, &'b [T], R> for &'b [T] {
    type Output = R;

    #[inline]
    fn curry<F>(self, function: F) -> R
    where
        F: FnOnce(&'b [T]) -> R + 'a,
    {
        function(self)
    }
}

/// Applies `function` to `argument`, or returns `function` when the argument is
/// [`Pipe`].
///
/// # Examples
///
/// ```
/// use optres::{Pipe, curry, some, Option};
///
/// let length = |option: Option<&str>| option.map(str::len);
///
/// assert_eq!(curry(length, some("yolo")), some(4));
///
/// let deferred = curry(length, Pipe);
/// assert_eq!(deferred(some("yo")), some(2));
/// ```
#[inline]
pub fn curry<'a, C, T, F, X>(function: F, argument: X) -> X::Output
where
    F: FnOnce(C) -> T + 'a,
    X: Curried<'a, C, T>,
{
    argument.curry(function)
}
