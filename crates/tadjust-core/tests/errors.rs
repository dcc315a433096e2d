use chrono::{NaiveDate, Weekday};
use tadjust_core::prelude::*;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_fifth_saturday_of_july_2024_does_not_exist() {
    let err = resolver::nth_of_month(Weekday::Sat, d(2024, 7, 1), 5).unwrap_err();
    assert!(matches!(err, AdjustError::NoSuchOccurrence(_)));
    assert!(err.to_string().contains("5th occurrence of saturday"), "{}", err);
}

#[test]
fn test_nth_of_month_rejects_out_of_range_ordinals() {
    for n in [0_i64, -1, 6] {
        let err = resolver::nth_of_month(Weekday::Sat, d(2024, 6, 13), n).unwrap_err();
        assert_eq!(
            err,
            AdjustError::InvalidArgument(format!("n must be between 1 and 5, but is {}", n))
        );
    }
}

#[test]
fn test_unknown_weekday_name() {
    let err = resolver::next("funday", d(2024, 6, 13)).unwrap_err();
    assert!(matches!(err, AdjustError::InvalidArgument(_)));
}

#[test]
fn test_raw_weekday_index_is_range_checked() {
    let err = resolver::next(7_i64, d(2024, 6, 13)).unwrap_err();
    assert!(err.to_string().contains("between 0 and 6"));
}

#[test]
fn test_batch_failure_discards_partial_results() {
    // July 2024 has four Saturdays, June 2024 has five.
    let err = adjuster::nth_of_month(Weekday::Sat, vec![d(2024, 6, 1), d(2024, 7, 1)], 5)
        .unwrap_err();
    assert!(matches!(err, AdjustError::NoSuchOccurrence(_)));
}

#[test]
fn test_binding_errors_from_named_operations() {
    let args = OperationArgs::default();
    let err = Operation::NthOfYear.invoke(&args, d(2024, 6, 13)).unwrap_err();
    assert_eq!(err.kind(), "binding");

    let err = "fortnight".parse::<Operation>().unwrap_err();
    assert_eq!(err.kind(), "binding");
}

#[test]
fn test_arithmetic_past_the_calendar_is_out_of_range() {
    let err = resolver::next(Weekday::Sat, NaiveDate::MAX).unwrap_err();
    assert_eq!(err.kind(), "out_of_range");
}
