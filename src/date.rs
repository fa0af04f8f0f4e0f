//! Public value types: the canonical calendar date and its derived views.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// The canonical calendar date: Age, year within the Age, and day of year.
///
/// All fields are 1-based. Month/day and intercalary breakdowns are always
/// derived from `day_of_year` via [`crate::Calendar::resolve_day_of_year`],
/// never stored, so the two representations cannot disagree.
///
/// Ordering is lexicographic on `(age, year_in_age, day_of_year)`, which
/// matches the ordering of the absolute-day timeline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display(fmt = "age {}, year {}, day {}", age, year_in_age, day_of_year)]
pub struct CalendarDate {
    /// Age number (1+).
    pub age: u32,
    /// Year within the Age (1..=years_per_age).
    pub year_in_age: u32,
    /// Day within the year (1..=total_days_per_year).
    pub day_of_year: u32,
}

impl CalendarDate {
    /// Creates a date without validating it against any calendar.
    ///
    /// Use [`crate::Calendar::date`] at the boundary when the components
    /// come from an untrusted source.
    pub const fn new(age: u32, year_in_age: u32, day_of_year: u32) -> Self {
        Self {
            age,
            year_in_age,
            day_of_year,
        }
    }
}

/// Where a day-of-year falls: inside a month, or inside an intercalary
/// period. Exactly one applies to any valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum DayPosition {
    /// An ordinary month day.
    #[display(fmt = "month {}, day {}", month, day)]
    Month {
        /// 1-based month number.
        month: u32,
        /// 1-based day within the month.
        day: u32,
    },
    /// A day inside an intercalary period.
    #[display(fmt = "intercalary period {}, day {}", period, day)]
    Intercalary {
        /// 1-based intercalary period number.
        period: u32,
        /// 1-based day within the period.
        day: u32,
    },
}

/// A `(age, year_in_age)` pair, the result of splitting an absolute year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display(fmt = "age {}, year {}", age, year_in_age)]
pub struct AgeYear {
    /// Age number (1+).
    pub age: u32,
    /// Year within the Age.
    pub year_in_age: u32,
}

/// Season lookup result, relative to the queried day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonInfo {
    /// Display name of the season.
    pub name: String,
    /// Flavor text from the definition.
    pub description: String,
    /// First day-of-year of the season (inclusive).
    pub start_day: u32,
    /// Last day-of-year of the season (inclusive).
    pub end_day: u32,
    /// Total length of the season in days.
    pub days_in_season: u32,
    /// How far into the season the queried day is (1-based).
    pub days_into_season: u32,
    /// Days left after the queried day.
    pub days_remaining: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_display() {
        let date = CalendarDate::new(190, 26, 121);
        assert_eq!(date.to_string(), "age 190, year 26, day 121");
    }

    #[test]
    fn date_ordering_is_lexicographic() {
        let a = CalendarDate::new(1, 77, 375);
        let b = CalendarDate::new(2, 1, 1);
        let c = CalendarDate::new(2, 1, 2);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn position_display() {
        let month = DayPosition::Month { month: 4, day: 30 };
        assert_eq!(month.to_string(), "month 4, day 30");

        let period = DayPosition::Intercalary { period: 1, day: 1 };
        assert_eq!(period.to_string(), "intercalary period 1, day 1");
    }

    #[test]
    fn date_serde_roundtrip() {
        let date = CalendarDate::new(190, 26, 121);
        let json = serde_json::to_string(&date).unwrap();
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn age_year_display() {
        let pair = AgeYear {
            age: 190,
            year_in_age: 26,
        };
        assert_eq!(pair.to_string(), "age 190, year 26");
    }
}
