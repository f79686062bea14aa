use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

/// Moves a holiday that falls on `trigger` forward by `offset` days.
///
/// The offset is larger than one for holidays followed by other holidays
/// on consecutive days, so that the substitute skips the whole cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubstituteRule {
    trigger: Weekday,
    offset: u64
}

impl SubstituteRule {
    pub const fn on_sunday(offset: u64) -> SubstituteRule {
        SubstituteRule { trigger: Weekday::Sun, offset }
    }

    pub fn trigger(&self) -> Weekday {
        self.trigger
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    #[inline]
    pub fn applies(&self, d: NaiveDate) -> bool {
        d.weekday() == self.trigger
    }

    pub fn substitute_for(&self, d: NaiveDate) -> Option<NaiveDate> {
        if self.applies(d) {
            d.checked_add_days(Days::new(self.offset))
        } else {
            None
        }
    }
}

impl Default for SubstituteRule {
    fn default() -> Self {
        SubstituteRule::on_sunday(1)
    }
}
