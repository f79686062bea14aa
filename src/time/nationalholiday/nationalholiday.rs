use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::substituterule::SubstituteRule;

/// A holiday date paired with its display name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HolidayEntry {
    date: NaiveDate,
    name: String
}

impl HolidayEntry {
    pub fn new(date: NaiveDate, name: String) -> HolidayEntry {
        HolidayEntry { date, name }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_parts(self) -> (NaiveDate, String) {
        (self.date, self.name)
    }
}

impl fmt::Display for HolidayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.date, self.name)
    }
}

/// A holiday evaluated for one year.
///
/// Implementors supply the anchor date and the names; the substitute
/// holiday and the flattened listings are derived here once for all of them.
pub trait NationalHoliday {

    fn year(&self) -> i32;

    /// Anchor date, before any substitute. `None` when the holiday does not
    /// occur in this year.
    fn date(&self) -> Option<NaiveDate>;

    fn name(&self) -> &str;

    /// Prefix used for the substitute holiday's name.
    fn substitute_label(&self) -> &str;

    fn substitute_rule(&self) -> SubstituteRule {
        SubstituteRule::default()
    }

    fn has_substitute(&self) -> bool {
        self.date().is_some_and(|d| self.substitute_rule().applies(d))
    }

    fn substitute_date(&self) -> Option<NaiveDate> {
        if !self.has_substitute() {
            return None;
        }
        self.date().and_then(|d| self.substitute_rule().substitute_for(d))
    }

    fn substitute_name(&self) -> Option<String> {
        self.substitute_date()
            .map(|_| format!("{} ({})", self.substitute_label(), self.name()))
    }

    fn list_dates(&self) -> Vec<NaiveDate> {
        self.date()
            .into_iter()
            .chain(self.substitute_date())
            .collect()
    }

    fn list_entries(&self) -> Vec<HolidayEntry> {
        let Some(date) = self.date() else {
            return Vec::new();
        };
        let mut entries = vec![HolidayEntry::new(date, self.name().to_owned())];
        if let (Some(d), Some(name)) = (self.substitute_date(), self.substitute_name()) {
            entries.push(HolidayEntry::new(d, name));
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        date: Option<NaiveDate>,
        rule: SubstituteRule
    }

    impl NationalHoliday for Fixed {
        fn year(&self) -> i32 {
            2026
        }

        fn date(&self) -> Option<NaiveDate> {
            self.date
        }

        fn name(&self) -> &str {
            "Test Day"
        }

        fn substitute_label(&self) -> &str {
            "Substitute holiday"
        }

        fn substitute_rule(&self) -> SubstituteRule {
            self.rule
        }
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn sunday_holiday_lists_its_substitute() {
        let h = Fixed { date: Some(ymd(2026, 5, 3)), rule: SubstituteRule::on_sunday(3) };
        assert!(h.has_substitute());
        assert_eq!(h.substitute_date(), Some(ymd(2026, 5, 6)));
        assert_eq!(h.substitute_name().as_deref(), Some("Substitute holiday (Test Day)"));
        assert_eq!(h.list_dates(), vec![ymd(2026, 5, 3), ymd(2026, 5, 6)]);
        assert_eq!(
            h.list_entries(),
            vec![
                HolidayEntry::new(ymd(2026, 5, 3), "Test Day".to_owned()),
                HolidayEntry::new(ymd(2026, 5, 6), "Substitute holiday (Test Day)".to_owned()),
            ]
        );
    }

    #[test]
    fn weekday_holiday_has_no_substitute() {
        let h = Fixed { date: Some(ymd(2026, 5, 4)), rule: SubstituteRule::default() };
        assert!(!h.has_substitute());
        assert_eq!(h.substitute_date(), None);
        assert_eq!(h.substitute_name(), None);
        assert_eq!(h.list_dates(), vec![ymd(2026, 5, 4)]);
    }

    #[test]
    fn absent_holiday_lists_nothing() {
        let h = Fixed { date: None, rule: SubstituteRule::default() };
        assert!(!h.has_substitute());
        assert!(h.list_dates().is_empty());
        assert!(h.list_entries().is_empty());
    }

    #[test]
    fn entry_display_and_serialization() {
        let entry = HolidayEntry::new(ymd(2026, 1, 1), "New Year's Day".to_owned());
        assert_eq!(entry.to_string(), "2026-01-01:New Year's Day");

        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"date":"2026-01-01","name":"New Year's Day"}"#);
        let back: HolidayEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
