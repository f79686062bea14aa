use chrono::{Datelike, NaiveDate};

use crate::holidayerror::HolidayError;
use crate::time::calendar::monthholidays::MonthHolidays;
use crate::time::nationalholiday::citizensholiday::CitizensHoliday;
use crate::time::nationalholiday::holidaybundle::HolidayBundle;
use crate::time::nationalholiday::holidaynames::HolidayNames;
use crate::time::nationalholiday::nationalholiday::HolidayEntry;
use crate::time::utility::{check_month, SUPPORTED_YEARS};

const CITIZENS_HOLIDAY_MONTH: u32 = 9;

/// All national holidays of one year, held as twelve month tables.
///
/// Every query walks the month tables again; nothing is cached. Changing
/// the year rebuilds all twelve months, so a failed `set_year` leaves the
/// calendar as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearCalendar {
    year: i32,
    names: HolidayNames,
    months: Vec<MonthHolidays>
}

fn build_months(year: i32, names: &HolidayNames) -> Result<Vec<MonthHolidays>, HolidayError> {
    if !SUPPORTED_YEARS.contains(&year) {
        log::warn!(
            "year {} is outside {}..={}; equinox dates are extrapolated",
            year,
            SUPPORTED_YEARS.start(),
            SUPPORTED_YEARS.end()
        );
    }
    log::debug!("building holiday calendar for {}", year);
    (1..=12)
        .map(|month| MonthHolidays::new(year, month, names))
        .collect()
}

impl YearCalendar {
    pub fn new(year: i32) -> Result<YearCalendar, HolidayError> {
        YearCalendar::with_names(year, HolidayNames::default())
    }

    pub fn with_names(year: i32, names: HolidayNames) -> Result<YearCalendar, HolidayError> {
        let months = build_months(year, &names)?;
        Ok(YearCalendar { year, names, months })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn names(&self) -> &HolidayNames {
        &self.names
    }

    pub fn set_year(&mut self, year: i32) -> Result<(), HolidayError> {
        self.months = build_months(year, &self.names)?;
        self.year = year;
        Ok(())
    }

    pub fn month(&self, month: u32) -> Result<&MonthHolidays, HolidayError> {
        let month = check_month(month)?;
        Ok(&self.months[(month - 1) as usize])
    }

    pub fn dates_for_month(&self, month: u32) -> Result<Vec<NaiveDate>, HolidayError> {
        Ok(self.month(month)?.list_dates())
    }

    pub fn entries_for_month(&self, month: u32) -> Result<Vec<HolidayEntry>, HolidayError> {
        Ok(self.month(month)?.list_entries())
    }

    pub fn list_all_dates(&self) -> Vec<NaiveDate> {
        self.months
            .iter()
            .flat_map(|m| m.list_dates())
            .collect()
    }

    pub fn list_all_entries(&self) -> Vec<HolidayEntry> {
        self.months
            .iter()
            .flat_map(|m| m.list_entries())
            .collect()
    }

    /// The statutory holidays themselves, without substitute or citizens' holidays.
    pub fn holidays(&self) -> impl Iterator<Item = &HolidayBundle> {
        self.months
            .iter()
            .flat_map(|m| m.holidays().iter())
    }

    pub fn holidays_for_month(&self, month: u32) -> Result<&[HolidayBundle], HolidayError> {
        Ok(self.month(month)?.holidays())
    }

    pub fn citizens_holiday(&self) -> Option<&CitizensHoliday> {
        self.months[(CITIZENS_HOLIDAY_MONTH - 1) as usize].citizens_holiday()
    }

    pub fn is_holiday(&self, d: NaiveDate) -> bool {
        self.holiday_name(d).is_some()
    }

    /// Name of the holiday, substitute holiday or citizens' holiday on `d`.
    pub fn holiday_name(&self, d: NaiveDate) -> Option<String> {
        if d.year() != self.year {
            return None;
        }
        self.months[d.month0() as usize]
            .find(d)
            .map(|e| e.into_parts().1)
    }
}

/// Holiday check for `d` in its own year, evaluating only its month.
pub fn is_holiday(d: NaiveDate) -> Result<bool, HolidayError> {
    Ok(holiday_name(d)?.is_some())
}

pub fn holiday_name(d: NaiveDate) -> Result<Option<String>, HolidayError> {
    let month = MonthHolidays::new(d.year(), d.month(), &HolidayNames::default())?;
    Ok(month.find(d).map(|e| e.into_parts().1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::nationalholiday::nationalholiday::NationalHoliday;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn set_year_rebuilds_every_month() {
        let mut calendar = YearCalendar::new(2021).unwrap();
        assert!(calendar.citizens_holiday().unwrap().list_dates().is_empty());

        calendar.set_year(2026).unwrap();
        assert_eq!(calendar.year(), 2026);
        assert_eq!(calendar.citizens_holiday().unwrap().list_dates(), vec![ymd(2026, 9, 22)]);
        assert!(calendar.list_all_dates().iter().all(|d| d.year() == 2026));
    }

    #[test]
    fn month_argument_is_checked() {
        let calendar = YearCalendar::new(2026).unwrap();
        assert!(matches!(calendar.dates_for_month(0), Err(HolidayError::InvalidMonth(0))));
        assert!(matches!(calendar.entries_for_month(13), Err(HolidayError::InvalidMonth(13))));
        assert!(matches!(calendar.holidays_for_month(13), Err(HolidayError::InvalidMonth(13))));
    }

    #[test]
    fn holiday_lookup() {
        let calendar = YearCalendar::new(2026).unwrap();
        assert_eq!(calendar.holiday_name(ymd(2026, 1, 1)).as_deref(), Some("New Year's Day"));
        assert_eq!(calendar.holiday_name(ymd(2026, 9, 22)).as_deref(), Some("Citizens' Holiday"));
        assert_eq!(
            calendar.holiday_name(ymd(2026, 5, 6)).as_deref(),
            Some("Substitute holiday (Constitution Memorial Day)")
        );
        assert!(!calendar.is_holiday(ymd(2026, 5, 7)));
        assert!(!calendar.is_holiday(ymd(2025, 1, 1)));
    }

    #[test]
    fn free_functions_use_the_dates_own_year() {
        assert!(is_holiday(ymd(2015, 9, 22)).unwrap());
        assert!(!is_holiday(ymd(2021, 9, 22)).unwrap());
        assert_eq!(holiday_name(ymd(2024, 2, 12)).unwrap().as_deref(), Some("Substitute holiday (National Foundation Day)"));
    }

    #[test]
    fn holidays_lists_sixteen_statutory_days() {
        let calendar = YearCalendar::new(2026).unwrap();
        assert_eq!(calendar.holidays().count(), 16);
        assert_eq!(calendar.holidays_for_month(5).unwrap().len(), 3);
    }
}
