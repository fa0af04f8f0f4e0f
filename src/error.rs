//! Error types for the age_calendar crate.

/// Error type for all fallible operations on a [`crate::Calendar`].
///
/// Every failure here is terminal to the call that produced it: none of
/// these kinds is transient, and inputs are never clamped or silently
/// corrected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A query went through the shared slot before a calendar was installed.
    #[error("no calendar has been initialized")]
    NotInitialized,

    /// A second calendar was installed into the shared slot.
    #[error("a calendar is already initialized")]
    AlreadyInitialized,

    /// An input integer fell outside its documented legal interval.
    #[error("{field} out of range: {value} (must be {min}..={max})")]
    OutOfRange {
        /// Name of the offending input field.
        field: &'static str,
        /// The value that was provided.
        value: i64,
        /// Smallest legal value (inclusive).
        min: i64,
        /// Largest legal value (inclusive).
        max: i64,
    },

    /// The supplied definition is structurally inconsistent, or failed the
    /// construction-time consistency check.
    #[error(transparent)]
    Malformed(#[from] DefinitionError),
}

impl CalendarError {
    pub(crate) const fn out_of_range(
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    ) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }
}

/// Checks that `value` lies in `min..=max`, naming `field` on failure.
pub(crate) fn ensure_range(
    field: &'static str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<(), CalendarError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CalendarError::out_of_range(
            field,
            i64::from(value),
            i64::from(min),
            i64::from(max),
        ))
    }
}

/// Describes exactly which part of a [`crate::CalendarDefinition`] is broken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    /// The month list is empty.
    #[error("calendar has no months")]
    NoMonths,

    /// A month declares zero days.
    #[error("month {month} has zero days")]
    EmptyMonth {
        /// 1-based month number.
        month: u32,
    },

    /// An intercalary period declares zero days.
    #[error("intercalary period {period} has zero days")]
    EmptyPeriod {
        /// 1-based period number.
        period: u32,
    },

    /// An intercalary period is anchored after a month that does not exist.
    #[error("intercalary period {period} is anchored after month {after_month}, but the calendar has {months} months")]
    BadAnchor {
        /// 1-based period number.
        period: u32,
        /// The anchor month it declared.
        after_month: u32,
        /// Number of months in the calendar.
        months: u32,
    },

    /// Intercalary anchors are not strictly increasing.
    #[error("intercalary period {period} must be anchored after a later month than its predecessor")]
    UnorderedAnchor {
        /// 1-based period number.
        period: u32,
    },

    /// `years_per_age` is zero.
    #[error("years per age must be at least 1")]
    NoYears,

    /// One of the two year-name cycles has no entries.
    #[error("the {cycle} year-name cycle is empty")]
    EmptyNameCycle {
        /// Which cycle: `"first"` or `"second"`.
        cycle: &'static str,
    },

    /// A season boundary falls outside the year.
    #[error("season {season} bounds {start_day}..{end_day} fall outside the year (1..={days_per_year})")]
    SeasonBounds {
        /// 1-based season number.
        season: u32,
        /// Declared start day.
        start_day: u32,
        /// Declared end day.
        end_day: u32,
        /// Total days in one year.
        days_per_year: u32,
    },

    /// The day-of-year bijection broke at a specific day.
    #[error("day-of-year round-trip failed at day {day_of_year}")]
    DayRoundTrip {
        /// The day that did not survive the round trip.
        day_of_year: u32,
    },

    /// The absolute-day conversion broke at a specific date.
    #[error("absolute-day round-trip failed at age {age}, year {year_in_age}, day {day_of_year}")]
    AbsoluteRoundTrip {
        /// Age of the failing date.
        age: u32,
        /// Year-in-age of the failing date.
        year_in_age: u32,
        /// Day-of-year of the failing date.
        day_of_year: u32,
    },

    /// A year produced an empty or malformed display name.
    #[error("year {year_in_age} produced a malformed year name: {name:?}")]
    BadYearName {
        /// The year whose name is broken.
        year_in_age: u32,
        /// The name it produced.
        name: String,
    },
}
