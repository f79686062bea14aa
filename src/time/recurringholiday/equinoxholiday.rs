use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::holidayerror::HolidayError;
use crate::time::utility::ymd;
use super::recurringholiday::RecurringHoliday;

const BASE_YEAR: i32 = 1980;
const TROPICAL_DRIFT: f64 = 0.242194;
const LAST_YEAR_OF_FIRST_TERM: i32 = 2099;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equinox {
    Spring,
    Autumn
}

impl Equinox {
    pub fn month(&self) -> u32 {
        match self {
            Equinox::Spring => 3,
            Equinox::Autumn => 9
        }
    }

    fn constant(&self, year: i32) -> f64 {
        let first_term = year <= LAST_YEAR_OF_FIRST_TERM;
        match (self, first_term) {
            (Equinox::Spring, true)  => 20.8431,
            (Equinox::Spring, false) => 21.851,
            (Equinox::Autumn, true)  => 23.2488,
            (Equinox::Autumn, false) => 24.2488
        }
    }
}

/// Equinox day approximated by the linear formula published for 1980..=2150.
///
/// Outside that range the formula still evaluates but is not meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquinoxHoliday {
    equinox: Equinox
}

impl EquinoxHoliday {
    pub fn new(equinox: Equinox) -> EquinoxHoliday {
        EquinoxHoliday { equinox }
    }

    pub fn equinox(&self) -> Equinox {
        self.equinox
    }

    /// Day of month, truncated the same way the gazetted dates are.
    pub fn day_of_month(&self, year: i32) -> u32 {
        let elapsed = year - BASE_YEAR;
        let day = self.equinox.constant(year)
            + TROPICAL_DRIFT * elapsed as f64
            - elapsed.div_euclid(4) as f64;
        // negative values saturate to 0 and are rejected by `ymd`
        day.floor() as u32
    }
}

impl RecurringHoliday for EquinoxHoliday {
    fn month(&self) -> u32 {
        self.equinox.month()
    }

    fn get_holiday(&self, year: i32) -> Result<NaiveDate, HolidayError> {
        ymd(year, self.equinox.month(), self.day_of_month(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1980, 20)]
    #[case(2012, 20)]
    #[case(2020, 20)]
    #[case(2023, 21)]
    #[case(2026, 20)]
    #[case(2044, 20)]
    fn test_vernal_equinox(#[case] year: i32, #[case] day: u32) {
        let rule = EquinoxHoliday::new(Equinox::Spring);
        assert_eq!(rule.get_holiday(year).unwrap(), NaiveDate::from_ymd_opt(year, 3, day).unwrap());
    }

    #[rstest]
    #[case(1980, 23)]
    #[case(2012, 22)]
    #[case(2015, 23)]
    #[case(2021, 23)]
    #[case(2023, 23)]
    #[case(2024, 22)]
    #[case(2026, 23)]
    fn test_autumnal_equinox(#[case] year: i32, #[case] day: u32) {
        let rule = EquinoxHoliday::new(Equinox::Autumn);
        assert_eq!(rule.get_holiday(year).unwrap(), NaiveDate::from_ymd_opt(year, 9, day).unwrap());
    }

    #[test]
    fn second_term_starts_in_2100() {
        let spring = EquinoxHoliday::new(Equinox::Spring);
        let autumn = EquinoxHoliday::new(Equinox::Autumn);
        // 21.851 + 0.242194 * 120 - 30
        assert_eq!(spring.day_of_month(2100), 20);
        // 24.2488 + 0.242194 * 120 - 30
        assert_eq!(autumn.day_of_month(2100), 23);
    }

    #[test]
    fn stays_on_plausible_days_over_supported_range() {
        let spring = EquinoxHoliday::new(Equinox::Spring);
        let autumn = EquinoxHoliday::new(Equinox::Autumn);
        for year in 1980..=2150 {
            assert!((19..=21).contains(&spring.day_of_month(year)), "spring {}", year);
            assert!((22..=24).contains(&autumn.day_of_month(year)), "autumn {}", year);
        }
    }
}
