use chrono::NaiveDate;

use crate::holidayerror::HolidayError;
use crate::time::utility::{days_of_month, ymd};
use super::recurringholiday::RecurringHoliday;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    /// February 29 is accepted; it only resolves in leap years.
    pub fn new(month: u32, day: u32) -> Result<FixedDateHoliday, HolidayError> {
        // 2000 is a leap year, so this is the widest month length
        if day == 0 || day > days_of_month(2000, month) {
            return Err(HolidayError::InvalidRule(
                format!("no day {} in month {}", day, month)
            ));
        }
        Ok(FixedDateHoliday { month, day })
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn month(&self) -> u32 {
        self.month
    }

    fn get_holiday(&self, year: i32) -> Result<NaiveDate, HolidayError> {
        ymd(year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_day_every_year() {
        let culture_day = FixedDateHoliday::new(11, 3).unwrap();
        for year in [1980, 2024, 2150] {
            assert_eq!(
                culture_day.get_holiday(year).unwrap(),
                NaiveDate::from_ymd_opt(year, 11, 3).unwrap()
            );
        }
    }

    #[test]
    fn rejects_days_no_month_has() {
        assert!(matches!(FixedDateHoliday::new(4, 31), Err(HolidayError::InvalidRule(_))));
        assert!(matches!(FixedDateHoliday::new(13, 1), Err(HolidayError::InvalidRule(_))));
        assert!(matches!(FixedDateHoliday::new(1, 0), Err(HolidayError::InvalidRule(_))));
    }

    #[test]
    fn leap_day_is_out_of_range_in_common_years() {
        let leap_day = FixedDateHoliday::new(2, 29).unwrap();
        assert!(leap_day.get_holiday(2024).is_ok());
        assert!(matches!(
            leap_day.get_holiday(2023),
            Err(HolidayError::DateOutOfRange { year: 2023, month: 2, day: 29 })
        ));
    }
}
