//! Tests for the slice lookups in `list`.

use optres::{Option, Pipe, chain, list, none, option, some};
use rstest::rstest;

#[derive(Debug, PartialEq)]
struct User {
    name: &'static str,
    age: u32,
}

static USERS: [User; 3] = [
    User { name: "ana", age: 17 },
    User { name: "bob", age: 34 },
    User { name: "cid", age: 52 },
];

#[rstest]
fn list_find_first_match() {
    let adult = list::find(|user: &User| user.age >= 18, &USERS[..]);
    assert_eq!(adult.map(|user| user.name), some("bob"));
}

#[rstest]
fn list_find_without_match_is_absent() {
    let retired: Option<&User> = list::find(|user: &User| user.age > 70, &USERS[..]);
    assert!(retired.is_none());
}

#[rstest]
fn list_find_piped_into_chain() {
    let name_of_oldest_over_50 = chain!(
        &USERS[..],
        list::find(|user: &User| user.age > 50, Pipe),
        option::map(|user: &User| user.name, Pipe),
        option::get_or_null,
    );
    assert_eq!(name_of_oldest_over_50, Some("cid"));
}

#[rstest]
fn list_first_and_last() {
    assert_eq!(list::first(&USERS).map(|user| user.name), some("ana"));
    assert_eq!(list::last(&USERS).map(|user| user.name), some("cid"));
    assert_eq!(list::first::<User>(&[]), none());
    assert_eq!(list::last::<User>(&[]), none());
}
