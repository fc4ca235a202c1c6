//! Tests for the `chain!` macro.

use optres::{OptionCases, Pipe, chain, none, option, some};
use rstest::rstest;

#[rstest]
fn chain_seed_only() {
    assert_eq!(chain!(String::from("hello")), "hello");
}

#[rstest]
fn chain_nine_steps() {
    let add_one = |value: i32| value + 1;
    assert_eq!(
        chain!(0, add_one, add_one, add_one, add_one, add_one, add_one, add_one, add_one, add_one),
        9
    );
}

#[rstest]
fn chain_each_step_runs_once_in_order() {
    let log = std::cell::RefCell::new(Vec::new());
    let log_ref = &log;
    let step = move |name: &'static str| {
        move |value: i32| {
            log_ref.borrow_mut().push(name);
            value * 10
        }
    };
    let outcome = chain!(1, step("first"), step("second"), step("third"));
    assert_eq!(outcome, 1000);
    assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
}

#[rstest]
#[case(some("hello"), "HELLO!")]
#[case(none(), "?")]
fn chain_with_piped_option_functions(
    #[case] greeting: optres::Option<&'static str>,
    #[case] expected: &str,
) {
    let shouted = chain!(
        greeting,
        option::map(|text: &str| text.to_uppercase(), Pipe),
        option::case_of(
            OptionCases {
                present: |text: String| format!("{text}!"),
                absent: || "?".to_string(),
            },
            Pipe,
        ),
    );
    assert_eq!(shouted, expected);
}
