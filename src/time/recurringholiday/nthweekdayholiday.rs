use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use crate::holidayerror::HolidayError;
use crate::time::utility::ymd;
use super::recurringholiday::RecurringHoliday;

/// The `n`-th occurrence of `weekday` in `month`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Result<NthWeekdayHoliday, HolidayError> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            Err(HolidayError::InvalidRule(
                format!("occurrence {} of {} in month {}", n, weekday, month)
            ))
        } else {
            Ok(NthWeekdayHoliday { month, n, weekday })
        }
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

/// `day = 7 * (n - 1) + ((target - w) mod 7) + 1` where `w` is the weekday
/// of the first of the month, both counted from Monday.
///
/// A fifth occurrence that runs past the month end is `DateOutOfRange`.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u8) -> Result<NaiveDate, HolidayError> {
    let first = ymd(year, month, 1)?;
    let w = first.weekday().num_days_from_monday() as i32;
    let target = weekday.num_days_from_monday() as i32;
    let day = 7 * (n as i32 - 1) + (target - w).rem_euclid(7) + 1;
    ymd(year, month, day as u32)
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn month(&self) -> u32 {
        self.month
    }

    fn get_holiday(&self, year: i32) -> Result<NaiveDate, HolidayError> {
        nth_weekday_of_month(year, self.month, self.weekday, self.n)
    }
}
