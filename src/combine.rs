//! Aggregation of independent, labelled results.
//!
//! Both forms look at the results in order and stop at the first failure:
//! only that failure's error is reported. Errors are never accumulated.
//!
//! - [`combine`] works on any sequence of `(label, result)` pairs sharing one
//!   value type, and collects the successes into any
//!   [`FromIterator<(K, A)>`](FromIterator) (a `BTreeMap`, a `HashMap`, a `Vec`).
//! - [`combine!`](crate::combine!) takes a struct literal whose fields are
//!   results, so each label can carry a different value type.

use crate::result::Result;

/// Combines labelled results into one result holding the labelled success
/// values, or the first failure in iteration order.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use optres::{Result, combine, err, ok};
///
/// let combined: Result<BTreeMap<&str, i32>, &str> =
///     combine([("a", ok(1)), ("b", ok(2))]);
/// assert_eq!(combined, ok(BTreeMap::from([("a", 1), ("b", 2)])));
///
/// let combined: Result<BTreeMap<&str, i32>, &str> =
///     combine([("a", err("E_A")), ("b", err("E_B"))]);
/// assert_eq!(combined, err("E_A"));
/// ```
pub fn combine<K, A, E, I, C>(results: I) -> Result<C, E>
where
    I: IntoIterator<Item = (K, Result<A, E>)>,
    C: FromIterator<(K, A)>,
{
    let mut labelled: Vec<(K, Result<A, E>)> = results.into_iter().collect();

    if let Some(position) = labelled.iter().position(|(_, result)| result.is_err()) {
        let (_, failure) = labelled.swap_remove(position);
        return Result::Failure(failure.error_or_panic());
    }

    labelled
        .into_iter()
        .map(|(label, result)| result.map(|value| (label, value)))
        .collect()
}

/// Combines the result-valued fields of a struct literal into a result of
/// that struct.
///
/// Every field expression is evaluated first. The fields are then inspected
/// in the order they are written and the first failure is returned. All
/// fields must share one error type. The struct may be named by a plain
/// identifier or a qualified path such as `forms::Signup`.
///
/// # Examples
///
/// ```rust
/// use optres::{Result, combine, err, ok};
///
/// #[derive(Debug, PartialEq)]
/// struct Form {
///     age: u32,
///     subscribed: bool,
/// }
///
/// let age: Result<u32, &str> = ok(10);
/// let subscribed: Result<bool, &str> = ok(true);
/// assert_eq!(
///     combine!(Form { age: age, subscribed: subscribed }),
///     ok(Form { age: 10, subscribed: true }),
/// );
///
/// let combined = combine!(Form {
///     age: err::<u32, _>("error A"),
///     subscribed: err::<bool, _>("error B"),
/// });
/// assert_eq!(combined, err("error A"));
/// ```
#[macro_export]
macro_rules! combine {
    ($($record:ident)::+ { $($label:ident : $result:expr),+ $(,)? }) => {{
        let ($($label,)+) = ($($result,)+);
        'combine: {
            $(
                let $label = match $label {
                    $crate::Result::Success(value) => value,
                    $crate::Result::Failure(error) => break 'combine $crate::Result::Failure(error),
                };
            )+
            $crate::Result::Success($($record)::+ { $($label),+ })
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{err, ok};
    use rstest::rstest;
    use std::collections::BTreeMap;

    #[rstest]
    fn test_combine_all_successes_keeps_labels() {
        let combined: Result<Vec<(&str, i32)>, &str> =
            combine(vec![("b", ok(2)), ("a", ok(1))]);
        assert_eq!(combined, ok(vec![("b", 2), ("a", 1)]));
    }

    #[rstest]
    fn test_combine_reports_first_failure_in_order() {
        let combined: Result<BTreeMap<&str, i32>, &str> =
            combine(vec![("a", ok(1)), ("b", err("E_B")), ("c", err("E_C"))]);
        assert_eq!(combined, err("E_B"));
    }

    #[rstest]
    fn test_combine_empty_input_is_success() {
        let combined: Result<BTreeMap<&str, i32>, &str> = combine(Vec::new());
        assert_eq!(combined, ok(BTreeMap::new()));
    }

    #[derive(Debug, PartialEq)]
    struct Pair {
        left: i32,
        right: String,
    }

    #[rstest]
    fn test_combine_macro_builds_struct_from_successes() {
        let left: Result<i32, &str> = ok(1);
        let right: Result<String, &str> = ok("r".to_string());
        let combined = combine!(Pair {
            left: left,
            right: right,
        });
        assert_eq!(
            combined,
            ok(Pair {
                left: 1,
                right: "r".to_string()
            })
        );
    }

    #[rstest]
    fn test_combine_macro_second_failure() {
        let combined = combine!(Pair {
            left: ok::<i32, &str>(1),
            right: err::<String, &str>("E_RIGHT"),
        });
        assert_eq!(combined, err("E_RIGHT"));
    }

    mod forms {
        #[derive(Debug, PartialEq)]
        pub struct Signup {
            pub name: String,
            pub age: u32,
        }
    }

    #[rstest]
    fn test_combine_macro_accepts_qualified_struct_path() {
        let combined = combine!(forms::Signup {
            name: ok::<String, &str>("ada".to_string()),
            age: ok::<u32, &str>(36),
        });
        assert_eq!(
            combined,
            ok(forms::Signup {
                name: "ada".to_string(),
                age: 36
            })
        );
    }

    #[rstest]
    fn test_combine_macro_first_of_two_failures() {
        let combined = combine!(Pair {
            left: err::<i32, &str>("E_LEFT"),
            right: err::<String, &str>("E_RIGHT"),
        });
        assert_eq!(combined, err("E_LEFT"));
    }
}
