//! Property-based tests for the laws `Option<A>` obeys.
//!
//! - **Identity**: `option.map(|x| x) == option`
//! - **Composition**: `option.map(f).map(g) == option.map(|x| g(f(x)))`
//! - **Left identity**: `some(a).flat_map(f) == f(a)`
//! - **Right identity**: `option.flat_map(some) == option`
//! - **Associativity**: `option.flat_map(f).flat_map(g) == option.flat_map(|x| f(x).flat_map(g))`
//! - **Pipe equivalence**: `option::map(f, Pipe)(option) == option.map(f)`

use optres::{Option, Pipe, none, option, some};
use proptest::prelude::*;

fn any_option() -> impl Strategy<Value = Option<i32>> {
    any::<std::option::Option<i32>>().prop_map(Option::from_nullable)
}

fn halve_even(value: i32) -> Option<i32> {
    if value % 2 == 0 { some(value / 2) } else { none() }
}

fn positive(value: i32) -> Option<i32> {
    if value > 0 { some(value) } else { none() }
}

proptest! {
    #[test]
    fn prop_option_identity_law(value in any_option()) {
        prop_assert_eq!(value.map(|x| x), value);
    }

    #[test]
    fn prop_option_composition_law(value in any_option()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_option_left_identity_law(value in any::<i32>()) {
        prop_assert_eq!(some(value).flat_map(halve_even), halve_even(value));
    }

    #[test]
    fn prop_option_right_identity_law(value in any_option()) {
        prop_assert_eq!(value.flat_map(some), value);
    }

    #[test]
    fn prop_option_associativity_law(value in any_option()) {
        let left = value.flat_map(halve_even).flat_map(positive);
        let right = value.flat_map(|x| halve_even(x).flat_map(positive));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_option_pipe_matches_method(value in any_option()) {
        let piped = option::map(|n: i32| n.wrapping_sub(3), Pipe)(value);
        prop_assert_eq!(piped, value.map(|n| n.wrapping_sub(3)));
    }

    #[test]
    fn prop_option_nullable_round_trip(value in any::<std::option::Option<i32>>()) {
        prop_assert_eq!(Option::from_nullable(value).get_or_null(), value);
    }
}
