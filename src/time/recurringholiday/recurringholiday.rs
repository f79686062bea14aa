use chrono::{Datelike, NaiveDate};

use crate::holidayerror::HolidayError;
use super::equinoxholiday::EquinoxHoliday;
use super::fixeddateholiday::FixedDateHoliday;
use super::nthweekdayholiday::NthWeekdayHoliday;


/// A rule that yields one anchor date per year.
pub trait RecurringHoliday {

    fn month(&self) -> u32;

    fn get_holiday(&self, year: i32) -> Result<NaiveDate, HolidayError>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday(d.year()).is_ok_and(|h| h == *d)
    }
}

/// The date strategies a holiday definition can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecurringHolidayRule {
    FixedDate(FixedDateHoliday),
    NthWeekday(NthWeekdayHoliday),
    Equinox(EquinoxHoliday)
}

impl RecurringHoliday for RecurringHolidayRule {
    fn month(&self) -> u32 {
        match self {
            RecurringHolidayRule::FixedDate(r)  => r.month(),
            RecurringHolidayRule::NthWeekday(r) => r.month(),
            RecurringHolidayRule::Equinox(r)    => r.month()
        }
    }

    fn get_holiday(&self, year: i32) -> Result<NaiveDate, HolidayError> {
        match self {
            RecurringHolidayRule::FixedDate(r)  => r.get_holiday(year),
            RecurringHolidayRule::NthWeekday(r) => r.get_holiday(year),
            RecurringHolidayRule::Equinox(r)    => r.get_holiday(year)
        }
    }
}

impl From<FixedDateHoliday> for RecurringHolidayRule {
    fn from(rule: FixedDateHoliday) -> Self {
        RecurringHolidayRule::FixedDate(rule)
    }
}

impl From<NthWeekdayHoliday> for RecurringHolidayRule {
    fn from(rule: NthWeekdayHoliday) -> Self {
        RecurringHolidayRule::NthWeekday(rule)
    }
}

impl From<EquinoxHoliday> for RecurringHolidayRule {
    fn from(rule: EquinoxHoliday) -> Self {
        RecurringHolidayRule::Equinox(rule)
    }
}
