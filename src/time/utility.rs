use std::ops::RangeInclusive;

use chrono::{Datelike, Local, NaiveDate};

use crate::holidayerror::HolidayError;

/// Years for which the equinox approximation is published.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1980..=2150;

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}

/// Number of days in `month`; 0 for a month outside `1..=12`.
pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month > 12 {
        return 0;
    }

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

#[inline]
pub fn check_month(month: u32) -> Result<u32, HolidayError> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(HolidayError::InvalidMonth(month))
    }
}

/// Builds a date, surfacing an impossible triple instead of clamping it.
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, HolidayError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(HolidayError::DateOutOfRange { year, month, day })
}

/// Wall-clock year, for callers that want "this year" as the default.
pub fn current_year() -> i32 {
    Local::now().year()
}
