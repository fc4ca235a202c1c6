//! Slice lookups that answer with an [`Option`] instead of a nullable.
//!
//! # Examples
//!
//! ```rust
//! use optres::{Pipe, list, none, some};
//!
//! let numbers = [3, 8, 5];
//! assert_eq!(list::find(|value: &i32| *value > 4, &numbers[..]), some(&8));
//! assert_eq!(list::first::<i32>(&[]), none());
//!
//! let find_even = list::find(|value: &i32| value % 2 == 0, Pipe);
//! assert_eq!(find_even(&numbers[..]), some(&8));
//! ```

use crate::compose::{Curried, curry};
use crate::option::Option;

/// The first element satisfying `predicate`, with the slice last or curried
/// with [`Pipe`](crate::Pipe).
pub fn find<'a, 'b, T, P, X>(predicate: P, items: X) -> X::Output
where
    T: 'b,
    'b: 'a,
    P: Fn(&T) -> bool + 'a,
    X: Curried<'a, &'b [T], Option<&'b T>>,
{
    curry(
        move |items: &'b [T]| Option::from_nullable(items.iter().find(|&item| predicate(item))),
        items,
    )
}

/// The first element of `items`.
#[inline]
pub fn first<T>(items: &[T]) -> Option<&T> {
    Option::from_nullable(items.first())
}

/// The last element of `items`.
#[inline]
pub fn last<T>(items: &[T]) -> Option<&T> {
    Option::from_nullable(items.last())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Pipe;
    use crate::option::{none, some};
    use rstest::rstest;

    #[rstest]
    #[case(&[], none())]
    #[case(&[1], some(&1))]
    #[case(&[1, 2, 3], some(&1))]
    fn test_first(#[case] items: &[i32], #[case] expected: Option<&i32>) {
        assert_eq!(first(items), expected);
    }

    #[rstest]
    #[case(&[], none())]
    #[case(&[1, 2, 3], some(&3))]
    fn test_last(#[case] items: &[i32], #[case] expected: Option<&i32>) {
        assert_eq!(last(items), expected);
    }

    #[rstest]
    fn test_find_nothing_matches() {
        let words = ["a", "bb"];
        assert_eq!(find(|word: &&str| word.len() > 5, &words[..]), none());
    }

    #[rstest]
    fn test_find_curried_is_reusable_per_call() {
        let words = ["yo", "yolo"];
        let long = find(|word: &&str| word.len() > 3, Pipe);
        assert_eq!(long(&words[..]), some(&"yolo"));
    }
}
