// Error types
// CalendarError for library operations; anyhow wraps these at file and process boundaries

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// A weekday position outside `1..=len` was requested from a week row.
    #[error("weekday {weekday} is out of range for a row of {len} days")]
    WeekdayOutOfRange { weekday: usize, len: usize },

    /// `WeekRow::update` was given a different number of dates than the row holds.
    #[error("expected {expected} dates for the row, got {actual}")]
    RowLengthMismatch { expected: usize, actual: usize },

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("unknown time zone '{0}'")]
    InvalidTimeZone(String),

    #[error("invalid display mode '{0}', expected 'week' or 'month'")]
    InvalidDisplayMode(String),

    /// The date is in the past and past dates are disabled.
    #[error("{0} is disabled")]
    DateDisabled(NaiveDate),

    /// Month arithmetic left chrono's representable range.
    #[error("date out of range")]
    DateOutOfRange,
}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;
