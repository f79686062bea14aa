use chrono::NaiveDate;

use crate::holidayerror::HolidayError;
use crate::time::nationalholiday::citizensholiday::{CitizensHoliday, LOWER_BRACKET, UPPER_BRACKET};
use crate::time::nationalholiday::holidaybundle::HolidayBundle;
use crate::time::nationalholiday::holidaynames::HolidayNames;
use crate::time::nationalholiday::holidaytype::HolidayType;
use crate::time::nationalholiday::nationalholiday::{HolidayEntry, NationalHoliday};
use crate::time::utility::check_month;

const MONTH_TABLE: [&[HolidayType]; 12] = [
    &[HolidayType::NewYearDay, HolidayType::ComingOfAgeDay],
    &[HolidayType::NationalFoundationDay, HolidayType::EmperorsBirthday],
    &[HolidayType::VernalEquinoxDay],
    &[HolidayType::ShowaDay],
    &[HolidayType::ConstitutionMemorialDay, HolidayType::GreeneryDay, HolidayType::ChildrensDay],
    &[],
    &[HolidayType::MarineDay],
    &[HolidayType::MountainDay],
    &[HolidayType::RespectForTheAgedDay, HolidayType::AutumnalEquinoxDay],
    &[HolidayType::SportsDay],
    &[HolidayType::CultureDay, HolidayType::LaborThanksgivingDay],
    &[]
];

/// Holiday types whose anchor date falls in `month`.
pub fn holiday_types_of_month(month: u32) -> Result<&'static [HolidayType], HolidayError> {
    let month = check_month(month)?;
    Ok(MONTH_TABLE[(month - 1) as usize])
}

/// The holidays of one month of one year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthHolidays {
    year: i32,
    month: u32,
    holidays: Vec<HolidayBundle>,
    citizens_holiday: Option<CitizensHoliday>
}

impl MonthHolidays {
    pub fn new(year: i32, month: u32, names: &HolidayNames) -> Result<MonthHolidays, HolidayError> {
        let holidays = holiday_types_of_month(month)?
            .iter()
            .map(|t| HolidayBundle::new(*t, year, names))
            .collect::<Result<Vec<_>, _>>()?;

        let bracket = |t: HolidayType| holidays.iter().find(|h| h.holiday_type() == t);
        let citizens_holiday = match (bracket(LOWER_BRACKET), bracket(UPPER_BRACKET)) {
            (Some(lower), Some(upper)) => Some(CitizensHoliday::new(lower, upper, names)?),
            _ => None
        };

        log::trace!("{}-{:02}: {} holiday rules", year, month, holidays.len());
        Ok(MonthHolidays { year, month, holidays, citizens_holiday })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn holidays(&self) -> &[HolidayBundle] {
        &self.holidays
    }

    pub fn citizens_holiday(&self) -> Option<&CitizensHoliday> {
        self.citizens_holiday.as_ref()
    }

    fn members(&self) -> impl Iterator<Item = &dyn NationalHoliday> {
        self.holidays
            .iter()
            .map(|h| h as &dyn NationalHoliday)
            .chain(self.citizens_holiday.iter().map(|c| c as &dyn NationalHoliday))
    }

    /// Entries in ascending date order; a date claimed twice keeps the
    /// first member's name.
    pub fn list_entries(&self) -> Vec<HolidayEntry> {
        let mut entries: Vec<HolidayEntry> = self.members()
            .flat_map(|h| h.list_entries())
            .collect();
        entries.sort_by_key(|e| e.date());
        entries.dedup_by_key(|e| e.date());
        entries
    }

    pub fn list_dates(&self) -> Vec<NaiveDate> {
        self.list_entries()
            .into_iter()
            .map(|e| e.date())
            .collect()
    }

    pub fn find(&self, d: NaiveDate) -> Option<HolidayEntry> {
        self.list_entries()
            .into_iter()
            .find(|e| e.date() == d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn rejects_months_outside_calendar() {
        let names = HolidayNames::default();
        assert!(matches!(MonthHolidays::new(2026, 0, &names), Err(HolidayError::InvalidMonth(0))));
        assert!(matches!(MonthHolidays::new(2026, 13, &names), Err(HolidayError::InvalidMonth(13))));
    }

    #[test]
    fn table_covers_every_holiday_once() {
        let mut listed: Vec<HolidayType> = (1..=12)
            .flat_map(|m| holiday_types_of_month(m).unwrap().iter().copied())
            .collect();
        listed.sort();
        assert_eq!(listed, HolidayType::all().to_vec());
        for m in 1..=12 {
            for t in holiday_types_of_month(m).unwrap() {
                assert_eq!(t.month(), m);
            }
        }
    }

    #[test]
    fn may_2026_substitute_is_sorted_after_the_cluster() {
        let may = MonthHolidays::new(2026, 5, &HolidayNames::default()).unwrap();
        assert_eq!(
            may.list_dates(),
            vec![ymd(2026, 5, 3), ymd(2026, 5, 4), ymd(2026, 5, 5), ymd(2026, 5, 6)]
        );
        assert_eq!(
            may.find(ymd(2026, 5, 6)).unwrap().name(),
            "Substitute holiday (Constitution Memorial Day)"
        );
    }

    #[test]
    fn only_september_carries_the_citizens_holiday() {
        let names = HolidayNames::default();
        for m in 1..=12 {
            let month = MonthHolidays::new(2026, m, &names).unwrap();
            assert_eq!(month.citizens_holiday().is_some(), m == 9);
        }
    }

    #[test]
    fn september_2026_silver_week() {
        let sep = MonthHolidays::new(2026, 9, &HolidayNames::default()).unwrap();
        let entries = sep.list_entries();
        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(
            sep.list_dates(),
            vec![ymd(2026, 9, 21), ymd(2026, 9, 22), ymd(2026, 9, 23)]
        );
        assert_eq!(names, vec!["Respect for the Aged Day", "Citizens' Holiday", "Autumnal Equinox Day"]);
    }

    #[test]
    fn empty_months() {
        let names = HolidayNames::default();
        assert!(MonthHolidays::new(2026, 6, &names).unwrap().list_dates().is_empty());
        assert!(MonthHolidays::new(2026, 12, &names).unwrap().list_entries().is_empty());
    }
}
