//! Conversion core for fantasy calendars built from fixed-length months,
//! intercalary periods, and Age-based year cycles.
//!
//! A [`CalendarDefinition`] describes one calendar; [`Calendar::new`]
//! validates it, runs an exhaustive round-trip self-test, and returns an
//! immutable handle whose query methods are all pure functions. The
//! bundled [`athas`] module carries the 375-day Athasian reference
//! calendar.

mod absolute;
pub mod athas;
mod check;
mod date;
mod definition;
mod doy;
mod error;
mod prelude;
mod season;
pub mod shared;
mod year;

pub use date::{AgeYear, CalendarDate, DayPosition, SeasonInfo};
pub use definition::{CalendarDefinition, IntercalaryDef, MonthDef, NameCycles, SeasonDef};
pub use error::{CalendarError, DefinitionError};

use crate::error::ensure_range;

/// A validated, immutable calendar.
///
/// Construction is the only write: every query method takes `&self`,
/// performs no I/O, and completes in at most O(month count) time, so a
/// `Calendar` can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Calendar {
    definition: CalendarDefinition,
    days_per_year: u32,
}

impl Calendar {
    /// Validates `definition` and builds a calendar from it.
    ///
    /// Structural checks run first; then the consistency check proves the
    /// day-of-year and absolute-day bijections over the whole year. A
    /// calendar that fails either never becomes observable.
    ///
    /// # Errors
    /// Returns [`CalendarError::Malformed`] naming the defect or the
    /// failing day/year.
    pub fn new(definition: CalendarDefinition) -> Result<Self, CalendarError> {
        definition.validate()?;
        let days_per_year = definition.total_days_per_year();
        let calendar = Self {
            definition,
            days_per_year,
        };
        check::run(&calendar)?;
        Ok(calendar)
    }

    /// The definition this calendar was built from.
    pub const fn definition(&self) -> &CalendarDefinition {
        &self.definition
    }

    /// Total days in one year, precomputed at construction.
    pub const fn total_days_per_year(&self) -> u32 {
        self.days_per_year
    }

    /// Number of years in one Age.
    pub const fn years_per_age(&self) -> u32 {
        self.definition.years_per_age
    }

    /// The ordered month list.
    pub fn months(&self) -> &[MonthDef] {
        &self.definition.months
    }

    /// The ordered intercalary period list.
    pub fn intercalary(&self) -> &[IntercalaryDef] {
        &self.definition.intercalary
    }

    /// The ordered season list.
    pub fn seasons(&self) -> &[SeasonDef] {
        &self.definition.seasons
    }

    /// Validated boundary adapter: builds a [`CalendarDate`] from loose
    /// components, rejecting anything outside this calendar's intervals.
    ///
    /// # Errors
    /// Returns [`CalendarError::OutOfRange`] naming the offending field.
    pub fn date(
        &self,
        age: u32,
        year_in_age: u32,
        day_of_year: u32,
    ) -> Result<CalendarDate, CalendarError> {
        ensure_range("age", age, 1, u32::MAX)?;
        ensure_range("year_in_age", year_in_age, 1, self.years_per_age())?;
        ensure_range("day_of_year", day_of_year, 1, self.days_per_year)?;
        Ok(CalendarDate {
            age,
            year_in_age,
            day_of_year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_the_reference_definition() {
        let cal = Calendar::new(athas::definition()).unwrap();
        assert_eq!(cal.total_days_per_year(), 375);
        assert_eq!(cal.years_per_age(), 77);
        assert_eq!(cal.months().len(), 12);
        assert_eq!(cal.intercalary().len(), 3);
        assert_eq!(cal.seasons().len(), 3);
    }

    #[test]
    fn new_rejects_a_broken_definition() {
        let mut def = athas::definition();
        def.months.clear();
        assert_eq!(
            Calendar::new(def).unwrap_err(),
            CalendarError::Malformed(DefinitionError::NoMonths)
        );
    }

    #[test]
    fn date_adapter_validates_components() {
        let cal = Calendar::new(athas::definition()).unwrap();
        assert_eq!(
            cal.date(190, 26, 121).unwrap(),
            CalendarDate::new(190, 26, 121)
        );
        assert!(matches!(
            cal.date(0, 1, 1).unwrap_err(),
            CalendarError::OutOfRange { field: "age", .. }
        ));
        assert!(matches!(
            cal.date(1, 0, 1).unwrap_err(),
            CalendarError::OutOfRange {
                field: "year_in_age",
                ..
            }
        ));
        assert!(matches!(
            cal.date(1, 1, 0).unwrap_err(),
            CalendarError::OutOfRange {
                field: "day_of_year",
                ..
            }
        ));
    }

    #[test]
    fn definition_accessor_round_trips_through_serde() {
        let cal = Calendar::new(athas::definition()).unwrap();
        let json = serde_json::to_string(cal.definition()).unwrap();
        let parsed: CalendarDefinition = serde_json::from_str(&json).unwrap();
        let rebuilt = Calendar::new(parsed).unwrap();
        assert_eq!(rebuilt.definition(), cal.definition());
    }
}
