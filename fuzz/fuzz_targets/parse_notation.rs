#![no_main]

extern crate libfuzzer_sys;
extern crate showdown;

use std::cmp::Ordering;

use libfuzzer_sys::fuzz_target;
use showdown::core::{compare_hands, parse_two_hands, Hand};

fuzz_target!(|text: &str| {
    if let Ok(hand) = Hand::parse(text) {
        // Display must give back notation that parses to the same hand.
        let reparsed = Hand::parse(&hand.to_string()).unwrap();
        assert_eq!(hand, reparsed);
    }

    if let Ok((a, b)) = parse_two_hands(text) {
        assert_eq!(Ordering::Equal, compare_hands(&a, &a));
        assert_eq!(compare_hands(&a, &b), compare_hands(&b, &a).reverse());
    }
});
