use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::holidayerror::HolidayError;
use crate::time::recurringholiday::equinoxholiday::{Equinox, EquinoxHoliday};
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHolidayRule;
use super::holidaybundle::HolidayBundle;
use super::holidaynames::HolidayNames;
use super::substituterule::SubstituteRule;

/// The statutory national holidays, in calendar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HolidayType {
    NewYearDay,
    ComingOfAgeDay,
    NationalFoundationDay,
    EmperorsBirthday,
    VernalEquinoxDay,
    ShowaDay,
    ConstitutionMemorialDay,
    GreeneryDay,
    ChildrensDay,
    MarineDay,
    MountainDay,
    RespectForTheAgedDay,
    AutumnalEquinoxDay,
    SportsDay,
    CultureDay,
    LaborThanksgivingDay
}

const ALL_HOLIDAY_TYPES: [HolidayType; 16] = [
    HolidayType::NewYearDay,
    HolidayType::ComingOfAgeDay,
    HolidayType::NationalFoundationDay,
    HolidayType::EmperorsBirthday,
    HolidayType::VernalEquinoxDay,
    HolidayType::ShowaDay,
    HolidayType::ConstitutionMemorialDay,
    HolidayType::GreeneryDay,
    HolidayType::ChildrensDay,
    HolidayType::MarineDay,
    HolidayType::MountainDay,
    HolidayType::RespectForTheAgedDay,
    HolidayType::AutumnalEquinoxDay,
    HolidayType::SportsDay,
    HolidayType::CultureDay,
    HolidayType::LaborThanksgivingDay
];

enum RuleSpec {
    Fixed(u32, u32),
    Nth(u32, u8, Weekday),
    Equinox(Equinox)
}

impl HolidayType {
    pub fn all() -> &'static [HolidayType] {
        &ALL_HOLIDAY_TYPES
    }

    pub fn default_name(&self) -> &'static str {
        match self {
            HolidayType::NewYearDay              => "New Year's Day",
            HolidayType::ComingOfAgeDay          => "Coming of Age Day",
            HolidayType::NationalFoundationDay   => "National Foundation Day",
            HolidayType::EmperorsBirthday        => "The Emperor's Birthday",
            HolidayType::VernalEquinoxDay        => "Vernal Equinox Day",
            HolidayType::ShowaDay                => "Showa Day",
            HolidayType::ConstitutionMemorialDay => "Constitution Memorial Day",
            HolidayType::GreeneryDay             => "Greenery Day",
            HolidayType::ChildrensDay            => "Children's Day",
            HolidayType::MarineDay               => "Marine Day",
            HolidayType::MountainDay             => "Mountain Day",
            HolidayType::RespectForTheAgedDay    => "Respect for the Aged Day",
            HolidayType::AutumnalEquinoxDay      => "Autumnal Equinox Day",
            HolidayType::SportsDay               => "Sports Day",
            HolidayType::CultureDay              => "Culture Day",
            HolidayType::LaborThanksgivingDay    => "Labor Thanksgiving Day"
        }
    }

    fn rule_spec(&self) -> RuleSpec {
        match self {
            HolidayType::NewYearDay              => RuleSpec::Fixed(1, 1),
            HolidayType::ComingOfAgeDay          => RuleSpec::Nth(1, 2, Weekday::Mon),
            HolidayType::NationalFoundationDay   => RuleSpec::Fixed(2, 11),
            HolidayType::EmperorsBirthday        => RuleSpec::Fixed(2, 23),
            HolidayType::VernalEquinoxDay        => RuleSpec::Equinox(Equinox::Spring),
            HolidayType::ShowaDay                => RuleSpec::Fixed(4, 29),
            HolidayType::ConstitutionMemorialDay => RuleSpec::Fixed(5, 3),
            HolidayType::GreeneryDay             => RuleSpec::Fixed(5, 4),
            HolidayType::ChildrensDay            => RuleSpec::Fixed(5, 5),
            HolidayType::MarineDay               => RuleSpec::Nth(7, 3, Weekday::Mon),
            HolidayType::MountainDay             => RuleSpec::Fixed(8, 11),
            HolidayType::RespectForTheAgedDay    => RuleSpec::Nth(9, 3, Weekday::Mon),
            HolidayType::AutumnalEquinoxDay      => RuleSpec::Equinox(Equinox::Autumn),
            HolidayType::SportsDay               => RuleSpec::Nth(10, 2, Weekday::Mon),
            HolidayType::CultureDay              => RuleSpec::Fixed(11, 3),
            HolidayType::LaborThanksgivingDay    => RuleSpec::Fixed(11, 23)
        }
    }

    /// Month in which the anchor date falls.
    pub fn month(&self) -> u32 {
        match self.rule_spec() {
            RuleSpec::Fixed(month, _)     => month,
            RuleSpec::Nth(month, _, _)    => month,
            RuleSpec::Equinox(equinox)    => equinox.month()
        }
    }

    pub fn rule(&self) -> Result<RecurringHolidayRule, HolidayError> {
        let rule: RecurringHolidayRule = match self.rule_spec() {
            RuleSpec::Fixed(month, day)         => FixedDateHoliday::new(month, day)?.into(),
            RuleSpec::Nth(month, n, weekday)    => NthWeekdayHoliday::new(month, n, weekday)?.into(),
            RuleSpec::Equinox(equinox)          => EquinoxHoliday::new(equinox).into()
        };
        Ok(rule)
    }

    /// May 3 to May 5 are consecutive holidays, so a Sunday May 3 is
    /// substituted on May 6, as is a Sunday May 4.
    pub fn substitute_rule(&self) -> SubstituteRule {
        match self {
            HolidayType::ConstitutionMemorialDay => SubstituteRule::on_sunday(3),
            HolidayType::GreeneryDay             => SubstituteRule::on_sunday(2),
            _                                    => SubstituteRule::on_sunday(1)
        }
    }

    /// Evaluates this holiday for `year` with the default names.
    pub fn bundle(&self, year: i32) -> Result<HolidayBundle, HolidayError> {
        HolidayBundle::new(*self, year, &HolidayNames::default())
    }

    fn key(&self) -> &'static str {
        match self {
            HolidayType::NewYearDay              => "NewYearDay",
            HolidayType::ComingOfAgeDay          => "ComingOfAgeDay",
            HolidayType::NationalFoundationDay   => "NationalFoundationDay",
            HolidayType::EmperorsBirthday        => "EmperorsBirthday",
            HolidayType::VernalEquinoxDay        => "VernalEquinoxDay",
            HolidayType::ShowaDay                => "ShowaDay",
            HolidayType::ConstitutionMemorialDay => "ConstitutionMemorialDay",
            HolidayType::GreeneryDay             => "GreeneryDay",
            HolidayType::ChildrensDay            => "ChildrensDay",
            HolidayType::MarineDay               => "MarineDay",
            HolidayType::MountainDay             => "MountainDay",
            HolidayType::RespectForTheAgedDay    => "RespectForTheAgedDay",
            HolidayType::AutumnalEquinoxDay      => "AutumnalEquinoxDay",
            HolidayType::SportsDay               => "SportsDay",
            HolidayType::CultureDay              => "CultureDay",
            HolidayType::LaborThanksgivingDay    => "LaborThanksgivingDay"
        }
    }
}

impl fmt::Display for HolidayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for HolidayType {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_HOLIDAY_TYPES
            .iter()
            .find(|t| t.key() == s)
            .copied()
            .ok_or_else(|| HolidayError::UnknownHoliday(s.to_owned()))
    }
}
