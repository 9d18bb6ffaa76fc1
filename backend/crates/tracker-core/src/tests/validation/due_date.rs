use crate::parse_due_date;

use chrono::{TimeZone, Utc};
use googletest::prelude::*;

#[test]
fn given_date_only_when_parsed_then_midnight_utc() {
    let parsed = parse_due_date("2030-05-17").unwrap();

    assert_that!(parsed, eq(Utc.with_ymd_and_hms(2030, 5, 17, 0, 0, 0).unwrap()));
}

#[test]
fn given_rfc3339_with_offset_when_parsed_then_converted_to_utc() {
    let parsed = parse_due_date("2030-05-17T10:30:00+02:00").unwrap();

    assert_that!(parsed, eq(Utc.with_ymd_and_hms(2030, 5, 17, 8, 30, 0).unwrap()));
}

#[test]
fn given_fractional_seconds_when_parsed_then_truncated() {
    let parsed = parse_due_date("2030-05-17T10:30:00.987Z").unwrap();

    assert_that!(parsed, eq(Utc.with_ymd_and_hms(2030, 5, 17, 10, 30, 0).unwrap()));
}

#[test]
fn given_naive_datetime_when_parsed_then_read_as_utc() {
    let parsed = parse_due_date("2030-05-17T10:30:00").unwrap();

    assert_that!(parsed, eq(Utc.with_ymd_and_hms(2030, 5, 17, 10, 30, 0).unwrap()));
}

#[test]
fn given_garbage_when_parsed_then_error() {
    for raw in ["not-a-date", "2030-13-01", "17/05/2030", ""] {
        assert_that!(parse_due_date(raw), err(anything()));
    }
}
