//! Year-level conversions: flat absolute years, the two-cycle year name,
//! and the Free Year numbering.

use crate::Calendar;
use crate::date::AgeYear;
use crate::error::{CalendarError, ensure_range};

impl Calendar {
    /// Flattens an (age, year-in-age) pair into a 1-based absolute year.
    ///
    /// # Errors
    /// Returns [`CalendarError::OutOfRange`] if `age` is zero or
    /// `year_in_age` is outside `1..=years_per_age`.
    pub fn to_absolute_year(&self, age: u32, year_in_age: u32) -> Result<i64, CalendarError> {
        ensure_range("age", age, 1, u32::MAX)?;
        ensure_range("year_in_age", year_in_age, 1, self.years_per_age())?;
        Ok(i64::from(age - 1) * i64::from(self.years_per_age()) + i64::from(year_in_age))
    }

    /// Splits a 1-based absolute year into its (age, year-in-age) pair.
    ///
    /// # Errors
    /// Returns [`CalendarError::OutOfRange`] if `absolute_year` is less
    /// than 1 or so large that the derived age does not fit.
    pub fn from_absolute_year(&self, absolute_year: i64) -> Result<AgeYear, CalendarError> {
        if absolute_year < 1 {
            return Err(CalendarError::out_of_range(
                "absolute_year",
                absolute_year,
                1,
                i64::MAX,
            ));
        }
        let years_per_age = i64::from(self.years_per_age());
        let age = u32::try_from((absolute_year - 1) / years_per_age + 1).map_err(|_| {
            CalendarError::out_of_range("absolute_year", absolute_year, 1, i64::MAX)
        })?;
        let year_in_age = u32::try_from((absolute_year - 1) % years_per_age + 1).map_err(|_| {
            CalendarError::out_of_range("absolute_year", absolute_year, 1, i64::MAX)
        })?;
        Ok(AgeYear { age, year_in_age })
    }

    /// Derives the display name of a year within an Age.
    ///
    /// The two name cycles are indexed independently by
    /// `(year_in_age - 1) % len` and joined as `"<first>'s <second>"`.
    /// Because the cycle lengths differ, the combined pair repeats only
    /// after `lcm` of the two lengths; within one Age the names are unique
    /// as long as `years_per_age` does not exceed that bound.
    ///
    /// # Errors
    /// Returns [`CalendarError::OutOfRange`] if `year_in_age` is outside
    /// `1..=years_per_age`.
    pub fn year_name(&self, year_in_age: u32) -> Result<String, CalendarError> {
        ensure_range("year_in_age", year_in_age, 1, self.years_per_age())?;
        let cycles = &self.definition().name_cycles;
        let index = (year_in_age - 1) as usize;
        let first = &cycles.first[index % cycles.first.len()];
        let second = &cycles.second[index % cycles.second.len()];
        Ok(format!("{first}'s {second}"))
    }

    /// Re-bases an absolute year onto the Free Year numbering.
    ///
    /// Free Year 1 is absolute year `free_year_offset + 1`; there is no
    /// Free Year 0, so a shifted result below 1 loses one more.
    ///
    /// # Errors
    /// Returns [`CalendarError::OutOfRange`] if `absolute_year` is less
    /// than 1.
    pub fn to_free_year(&self, absolute_year: i64) -> Result<i64, CalendarError> {
        if absolute_year < 1 {
            return Err(CalendarError::out_of_range(
                "absolute_year",
                absolute_year,
                1,
                i64::MAX,
            ));
        }
        let shifted = absolute_year - self.definition().free_year_offset;
        Ok(if shifted < 1 { shifted - 1 } else { shifted })
    }

    /// Converts a Free Year back to the 1-based absolute year.
    ///
    /// # Errors
    /// Returns [`CalendarError::OutOfRange`] if `free_year` is 0 (no such
    /// year exists) or maps below absolute year 1.
    pub fn from_free_year(&self, free_year: i64) -> Result<i64, CalendarError> {
        if free_year == 0 {
            return Err(CalendarError::out_of_range("free_year", 0, 1, i64::MAX));
        }
        let offset = self.definition().free_year_offset;
        let shifted = if free_year < 1 {
            free_year + 1
        } else {
            free_year
        };
        let absolute_year = shifted + offset;
        if absolute_year < 1 {
            return Err(CalendarError::out_of_range(
                "free_year",
                free_year,
                -offset,
                i64::MAX,
            ));
        }
        Ok(absolute_year)
    }
}
