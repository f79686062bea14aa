use chrono::{Datelike, NaiveDate};

use crate::holidayerror::HolidayError;
use crate::time::utility::ymd;
use super::holidaybundle::HolidayBundle;
use super::holidaynames::HolidayNames;
use super::holidaytype::HolidayType;
use super::nationalholiday::NationalHoliday;

/// The holiday below the citizens' holiday gap.
pub const LOWER_BRACKET: HolidayType = HolidayType::RespectForTheAgedDay;
/// The holiday above the citizens' holiday gap.
pub const UPPER_BRACKET: HolidayType = HolidayType::AutumnalEquinoxDay;

/// A single ordinary day sandwiched between two holidays.
///
/// Only Respect for the Aged Day and Autumnal Equinox Day can leave such a
/// gap, so the holiday is only ever evaluated for September.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CitizensHoliday {
    year: i32,
    date: Option<NaiveDate>,
    name: String,
    substitute_label: String
}

impl CitizensHoliday {
    pub fn new(lower: &HolidayBundle, upper: &HolidayBundle, names: &HolidayNames) -> Result<CitizensHoliday, HolidayError> {
        Ok(CitizensHoliday {
            year: lower.year(),
            date: sandwiched_day(lower, upper)?,
            name: names.citizens_holiday().to_owned(),
            substitute_label: names.substitute_label().to_owned()
        })
    }

    pub fn for_year(year: i32, names: &HolidayNames) -> Result<CitizensHoliday, HolidayError> {
        let lower = HolidayBundle::new(LOWER_BRACKET, year, names)?;
        let upper = HolidayBundle::new(UPPER_BRACKET, year, names)?;
        CitizensHoliday::new(&lower, &upper, names)
    }
}

/// The day strictly between `lower` and `upper` when exactly one day
/// separates them, also measuring from `lower`'s substitute holiday.
fn sandwiched_day(lower: &HolidayBundle, upper: &HolidayBundle) -> Result<Option<NaiveDate>, HolidayError> {
    let low = lower.anchor_date();
    let up = upper.anchor_date();
    if low.year() != up.year() || low.month() != up.month() {
        return Ok(None);
    }

    if up.day() == low.day() + 2 {
        return ymd(low.year(), low.month(), low.day() + 1).map(Some);
    }
    if let Some(substitute) = lower.substitute_date() {
        if up.day() == substitute.day() + 2 {
            return ymd(low.year(), low.month(), substitute.day() + 1).map(Some);
        }
    }
    Ok(None)
}

/// Citizens' holiday of `year`, if there is one.
pub fn citizens_holiday(year: i32) -> Result<Option<NaiveDate>, HolidayError> {
    Ok(CitizensHoliday::for_year(year, &HolidayNames::default())?.date)
}

impl NationalHoliday for CitizensHoliday {
    fn year(&self) -> i32 {
        self.year
    }

    fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn substitute_label(&self) -> &str {
        &self.substitute_label
    }

    fn has_substitute(&self) -> bool {
        false
    }
}
