#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate showdown;

use std::cmp::Ordering;

use libfuzzer_sys::fuzz_target;
use showdown::core::{compare, compare_hands, Card, Category, Classifiable, Hand};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub first: Vec<Card>,
    pub second: Vec<Card>,
}

fuzz_target!(|input: Input| {
    let (a, b) = match (
        Hand::from_cards(input.first.iter().copied()),
        Hand::from_cards(input.second.iter().copied()),
    ) {
        (Ok(a), Ok(b)) => (a, b),
        _ => {
            // Anything short of five distinct cards can't be compared.
            if input.first.card_set().count() != 5 {
                assert!(compare(&input.first, &input.second).is_err());
            }
            return;
        }
    };

    let classes = a.classify().unwrap();
    assert!(classes.contains(Category::HighCard));
    assert_eq!(a.strength(), *classes.best());

    assert_eq!(Ordering::Equal, compare_hands(&a, &a));
    assert_eq!(compare_hands(&a, &b), compare_hands(&b, &a).reverse());
    assert_eq!(Ok(compare_hands(&a, &b)), compare(&a, &b));
});
