use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::holidayerror::HolidayError;
use crate::time::calendar::yearcalendar::YearCalendar;
use crate::time::nationalholiday::holidaynames::HolidayNames;
use crate::time::nationalholiday::holidaytype::HolidayType;
use crate::time::utility::current_year;


#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigurationJsonProp {
    #[serde(default)]
    year: Option<i32>,
    #[serde(default)]
    substitute_label: Option<String>,
    #[serde(default)]
    citizens_holiday_name: Option<String>,
    #[serde(default)]
    holiday_names: BTreeMap<String, String>
}

/// Target year and display names for building a [`YearCalendar`].
///
/// ```json
/// {
///     "year": 2026,
///     "substitute_label": "振替休日",
///     "citizens_holiday_name": "国民の休日",
///     "holiday_names": { "NewYearDay": "元日" }
/// }
/// ```
///
/// Every field is optional; a missing year means the current year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    year: i32,
    names: HolidayNames
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::with_year(current_year())
    }

    pub fn with_year(year: i32) -> Configuration {
        Configuration { year, names: HolidayNames::default() }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn names(&self) -> &HolidayNames {
        &self.names
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, HolidayError> {
        let file = File::open(file_path.as_ref())?;
        log::debug!("loading holiday configuration from {}", file_path.as_ref().display());
        Configuration::from_json_reader(BufReader::new(file))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Configuration, HolidayError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Configuration::from_json_prop(json_prop)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, HolidayError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Configuration::from_json_prop(json_prop)
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<Configuration, HolidayError> {
        let mut names = HolidayNames::new();
        if let Some(label) = json_prop.substitute_label {
            names = names.with_substitute_label(label);
        }
        if let Some(name) = json_prop.citizens_holiday_name {
            names = names.with_citizens_holiday(name);
        }
        for (key, name) in json_prop.holiday_names {
            let holiday_type: HolidayType = key.parse()?;
            names = names.with_name(holiday_type, name);
        }

        Ok(Configuration {
            year: json_prop.year.unwrap_or_else(current_year),
            names
        })
    }

    pub fn build_calendar(&self) -> Result<YearCalendar, HolidayError> {
        YearCalendar::with_names(self.year, self.names.clone())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
