use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::holidayerror::HolidayError;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use super::holidaynames::HolidayNames;
use super::holidaytype::HolidayType;
use super::nationalholiday::NationalHoliday;
use super::substituterule::SubstituteRule;

/// One statutory holiday evaluated for one year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HolidayBundle {
    holiday_type: HolidayType,
    year: i32,
    anchor_date: NaiveDate,
    name: String,
    substitute_label: String,
    substitute_rule: SubstituteRule
}

impl HolidayBundle {
    pub fn new(holiday_type: HolidayType, year: i32, names: &HolidayNames) -> Result<HolidayBundle, HolidayError> {
        let anchor_date = holiday_type.rule()?.get_holiday(year)?;
        Ok(HolidayBundle {
            holiday_type,
            year,
            anchor_date,
            name: names.name(holiday_type).to_owned(),
            substitute_label: names.substitute_label().to_owned(),
            substitute_rule: holiday_type.substitute_rule()
        })
    }

    pub fn holiday_type(&self) -> HolidayType {
        self.holiday_type
    }

    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor_date
    }

    pub fn weekday(&self) -> Weekday {
        self.anchor_date.weekday()
    }
}

impl NationalHoliday for HolidayBundle {
    fn year(&self) -> i32 {
        self.year
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.anchor_date)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn substitute_label(&self) -> &str {
        &self.substitute_label
    }

    fn substitute_rule(&self) -> SubstituteRule {
        self.substitute_rule
    }
}

impl fmt::Display for HolidayBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.anchor_date, self.name)
    }
}
