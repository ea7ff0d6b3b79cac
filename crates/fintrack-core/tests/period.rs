use jiff::civil::date;

use fintrack_core::error::CoreError;
use fintrack_core::models::report::{CustomPeriod, PeriodRange, ReportPeriod};
use fintrack_core::period::{months_in_range, resolve_period};

#[test]
fn current_month_spans_first_to_last_day() {
    let range = resolve_period(ReportPeriod::CurrentMonth, None, date(2025, 2, 14)).unwrap();
    assert_eq!(range.start_date, date(2025, 2, 1));
    assert_eq!(range.end_date, date(2025, 2, 28));
}

#[test]
fn last_month_wraps_january_to_previous_december() {
    let range = resolve_period(ReportPeriod::LastMonth, None, date(2025, 1, 15)).unwrap();
    assert_eq!(range.start_date, date(2024, 12, 1));
    assert_eq!(range.end_date, date(2024, 12, 31));
}

#[test]
fn last_month_within_same_year() {
    let range = resolve_period(ReportPeriod::LastMonth, None, date(2025, 7, 3)).unwrap();
    assert_eq!(range.start_date, date(2025, 6, 1));
    assert_eq!(range.end_date, date(2025, 6, 30));
}

#[test]
fn current_quarter_spans_three_months() {
    let range = resolve_period(ReportPeriod::CurrentQuarter, None, date(2025, 5, 10)).unwrap();
    assert_eq!(range.start_date, date(2025, 4, 1));
    assert_eq!(range.end_date, date(2025, 6, 30));
}

#[test]
fn last_quarter_wraps_q1_to_previous_year_q4() {
    let range = resolve_period(ReportPeriod::LastQuarter, None, date(2025, 2, 10)).unwrap();
    assert_eq!(range.start_date, date(2024, 10, 1));
    assert_eq!(range.end_date, date(2024, 12, 31));
}

#[test]
fn last_quarter_within_same_year() {
    let range = resolve_period(ReportPeriod::LastQuarter, None, date(2025, 11, 20)).unwrap();
    assert_eq!(range.start_date, date(2025, 7, 1));
    assert_eq!(range.end_date, date(2025, 9, 30));
}

#[test]
fn current_and_last_year() {
    let current = resolve_period(ReportPeriod::CurrentYear, None, date(2025, 6, 1)).unwrap();
    assert_eq!(current.start_date, date(2025, 1, 1));
    assert_eq!(current.end_date, date(2025, 12, 31));

    let last = resolve_period(ReportPeriod::LastYear, None, date(2025, 6, 1)).unwrap();
    assert_eq!(last.start_date, date(2024, 1, 1));
    assert_eq!(last.end_date, date(2024, 12, 31));
}

#[test]
fn custom_period_uses_supplied_dates() {
    let custom = CustomPeriod {
        start_date: date(2025, 3, 5),
        end_date: date(2025, 4, 20),
    };
    let range = resolve_period(ReportPeriod::Custom, Some(&custom), date(2025, 6, 1)).unwrap();
    assert_eq!(range.start_date, date(2025, 3, 5));
    assert_eq!(range.end_date, date(2025, 4, 20));
}

#[test]
fn custom_period_missing_is_rejected() {
    let err = resolve_period(ReportPeriod::Custom, None, date(2025, 6, 1)).unwrap_err();
    assert_eq!(err, CoreError::MissingCustomPeriod);
}

#[test]
fn custom_period_start_not_before_end_is_rejected() {
    let equal = CustomPeriod {
        start_date: date(2025, 3, 5),
        end_date: date(2025, 3, 5),
    };
    let err = resolve_period(ReportPeriod::Custom, Some(&equal), date(2025, 6, 1)).unwrap_err();
    assert_eq!(err, CoreError::InvalidCustomPeriod);

    let inverted = CustomPeriod {
        start_date: date(2025, 4, 1),
        end_date: date(2025, 3, 1),
    };
    let err = resolve_period(ReportPeriod::Custom, Some(&inverted), date(2025, 6, 1)).unwrap_err();
    assert_eq!(err, CoreError::InvalidCustomPeriod);
}

#[test]
fn months_in_range_includes_partial_months() {
    let range = PeriodRange {
        start_date: date(2025, 1, 15),
        end_date: date(2025, 3, 10),
    };
    assert_eq!(months_in_range(range), vec!["2025-01", "2025-02", "2025-03"]);
}

#[test]
fn months_in_range_single_month() {
    let range = PeriodRange {
        start_date: date(2025, 6, 1),
        end_date: date(2025, 6, 30),
    };
    assert_eq!(months_in_range(range), vec!["2025-06"]);
}

#[test]
fn months_in_range_crosses_year_boundary() {
    let range = PeriodRange {
        start_date: date(2024, 11, 20),
        end_date: date(2025, 2, 1),
    };
    assert_eq!(
        months_in_range(range),
        vec!["2024-11", "2024-12", "2025-01", "2025-02"]
    );
}
