//! Reporting-period resolution.
//!
//! Turns a named [`ReportPeriod`] into a concrete inclusive date range. The
//! reference date is passed in by the caller, so resolution stays pure and
//! testable against any point in time.

use jiff::civil::{Date, date};

use crate::error::CoreError;
use crate::models::report::{CustomPeriod, PeriodRange, ReportPeriod};

pub fn resolve_period(
    period: ReportPeriod,
    custom: Option<&CustomPeriod>,
    today: Date,
) -> Result<PeriodRange, CoreError> {
    let range = match period {
        ReportPeriod::CurrentMonth => PeriodRange {
            start_date: today.first_of_month(),
            end_date: today.last_of_month(),
        },
        ReportPeriod::LastMonth => {
            let (year, month) = if today.month() == 1 {
                (today.year() - 1, 12)
            } else {
                (today.year(), today.month() - 1)
            };
            let first = date(year, month, 1);
            PeriodRange {
                start_date: first,
                end_date: first.last_of_month(),
            }
        }
        ReportPeriod::CurrentQuarter => quarter_range(today.year(), (today.month() - 1) / 3),
        ReportPeriod::LastQuarter => match (today.month() - 1) / 3 {
            // Q1 wraps to the last quarter of the previous year.
            0 => quarter_range(today.year() - 1, 3),
            q => quarter_range(today.year(), q - 1),
        },
        ReportPeriod::CurrentYear => year_range(today.year()),
        ReportPeriod::LastYear => year_range(today.year() - 1),
        ReportPeriod::Custom => {
            let custom = custom.ok_or(CoreError::MissingCustomPeriod)?;
            if custom.start_date >= custom.end_date {
                return Err(CoreError::InvalidCustomPeriod);
            }
            PeriodRange {
                start_date: custom.start_date,
                end_date: custom.end_date,
            }
        }
    };

    Ok(range)
}

/// `quarter` is zero-based (0 = Jan–Mar).
fn quarter_range(year: i16, quarter: i8) -> PeriodRange {
    let start_month = quarter * 3 + 1;
    PeriodRange {
        start_date: date(year, start_month, 1),
        end_date: date(year, start_month + 2, 1).last_of_month(),
    }
}

fn year_range(year: i16) -> PeriodRange {
    PeriodRange {
        start_date: date(year, 1, 1),
        end_date: date(year, 12, 31),
    }
}

/// Distinct "YYYY-MM" keys for every calendar month the range touches,
/// partial months included. Budgets are matched against these keys rather
/// than against dates.
pub fn months_in_range(range: PeriodRange) -> Vec<String> {
    let mut months = Vec::new();
    let (mut year, mut month) = (range.start_date.year(), range.start_date.month());
    let last = (range.end_date.year(), range.end_date.month());

    while (year, month) <= last {
        months.push(format!("{year:04}-{month:02}"));
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }

    months
}
