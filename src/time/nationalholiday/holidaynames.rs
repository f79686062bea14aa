use std::collections::HashMap;

use super::holidaytype::HolidayType;

pub const DEFAULT_SUBSTITUTE_LABEL: &str = "Substitute holiday";
pub const DEFAULT_CITIZENS_HOLIDAY_NAME: &str = "Citizens' Holiday";

/// Display names in the configured locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HolidayNames {
    substitute_label: String,
    citizens_holiday: String,
    overrides: HashMap<HolidayType, String>
}

impl HolidayNames {
    pub fn new() -> HolidayNames {
        HolidayNames {
            substitute_label: DEFAULT_SUBSTITUTE_LABEL.to_owned(),
            citizens_holiday: DEFAULT_CITIZENS_HOLIDAY_NAME.to_owned(),
            overrides: HashMap::new()
        }
    }

    pub fn with_substitute_label(mut self, label: impl Into<String>) -> HolidayNames {
        self.substitute_label = label.into();
        self
    }

    pub fn with_citizens_holiday(mut self, name: impl Into<String>) -> HolidayNames {
        self.citizens_holiday = name.into();
        self
    }

    pub fn with_name(mut self, holiday_type: HolidayType, name: impl Into<String>) -> HolidayNames {
        self.overrides.insert(holiday_type, name.into());
        self
    }

    pub fn name(&self, holiday_type: HolidayType) -> &str {
        self.overrides
            .get(&holiday_type)
            .map_or(holiday_type.default_name(), String::as_str)
    }

    pub fn substitute_label(&self) -> &str {
        &self.substitute_label
    }

    pub fn citizens_holiday(&self) -> &str {
        &self.citizens_holiday
    }
}

impl Default for HolidayNames {
    fn default() -> Self {
        HolidayNames::new()
    }
}
