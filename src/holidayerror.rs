/// Error type for every fallible operation of the holiday engine.
#[derive(Debug, thiserror::Error)]
pub enum HolidayError {
    /// Month argument outside `1..=12`.
    #[error("month must be in 1..=12, got {0}")]
    InvalidMonth(u32),

    /// A computed (year, month, day) triple is not a calendar date.
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    DateOutOfRange {
        year: i32,
        month: u32,
        day: u32,
    },

    /// A holiday rule was defined with parameters it cannot evaluate.
    #[error("invalid holiday rule: {0}")]
    InvalidRule(String),

    /// A configuration key does not name any known holiday.
    #[error("unknown holiday '{0}'")]
    UnknownHoliday(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    JsonParse(#[from] serde_json::Error),
}
