use crate::{PAGE_SIZE, Page};

use googletest::prelude::*;
use proptest::prelude::*;

#[test]
fn given_no_page_when_parsed_then_first_page() {
    let page = Page::parse(None);

    assert_that!(page.number(), eq(1));
    assert_that!(page.skip(), eq(0));
    assert_that!(page.take(), eq(PAGE_SIZE));
}

#[test]
fn given_third_page_when_parsed_then_skips_twenty() {
    let page = Page::parse(Some("3"));

    assert_that!(page.number(), eq(3));
    assert_that!(page.skip(), eq(20));
}

#[test]
fn given_invalid_pages_when_parsed_then_first_page() {
    for raw in ["abc", "0", "-4", "", "1.5"] {
        assert_that!(Page::parse(Some(raw)), eq(Page::FIRST));
    }
}

#[test]
fn given_huge_page_when_skip_computed_then_saturates() {
    let page = Page::parse(Some(&i64::MAX.to_string()));

    assert_that!(page.skip(), eq(i64::MAX));
}

proptest! {
    #[test]
    fn skip_is_page_minus_one_times_page_size(number in 1i64..1_000_000) {
        let page = Page::parse(Some(&number.to_string()));
        prop_assert_eq!(page.skip(), (number - 1) * PAGE_SIZE);
        prop_assert_eq!(page.take(), PAGE_SIZE);
    }

    #[test]
    fn any_input_yields_a_positive_page(raw in ".*") {
        prop_assert!(Page::parse(Some(&raw)).number() >= 1);
    }
}
