//! Absolute-day conversion: the monotonic integer timeline.
//!
//! Absolute day 0 is Age 1, Year 1, Day 1. The mapping is strictly
//! order-preserving: lexicographically larger dates map to larger
//! integers and no two distinct legal dates collide.

use crate::Calendar;
use crate::date::CalendarDate;
use crate::error::{CalendarError, ensure_range};

impl Calendar {
    /// Converts an (age, year-in-age, day-of-year) triple to its absolute
    /// day number.
    ///
    /// # Errors
    /// Returns [`CalendarError::OutOfRange`] if any component is outside
    /// its legal interval.
    pub fn to_absolute_days(
        &self,
        age: u32,
        year_in_age: u32,
        day_of_year: u32,
    ) -> Result<i64, CalendarError> {
        ensure_range("age", age, 1, u32::MAX)?;
        ensure_range("year_in_age", year_in_age, 1, self.years_per_age())?;
        ensure_range("day_of_year", day_of_year, 1, self.total_days_per_year())?;

        let years_from_epoch = i64::from(age - 1) * i64::from(self.years_per_age())
            + i64::from(year_in_age - 1);
        Ok(years_from_epoch * i64::from(self.total_days_per_year()) + i64::from(day_of_year - 1))
    }

    /// Converts an absolute day number back to a calendar date.
    ///
    /// # Errors
    /// Returns [`CalendarError::OutOfRange`] if `days` is negative or so
    /// large that the derived age does not fit the date type.
    pub fn from_absolute_days(&self, days: i64) -> Result<CalendarDate, CalendarError> {
        if days < 0 {
            return Err(CalendarError::out_of_range("absolute_days", days, 0, i64::MAX));
        }

        let days_per_year = i64::from(self.total_days_per_year());
        let years_per_age = i64::from(self.years_per_age());

        let year_index = days / days_per_year;
        let day_of_year = u32::try_from(days % days_per_year + 1)
            .map_err(|_| CalendarError::out_of_range("absolute_days", days, 0, i64::MAX))?;
        let year_in_age = u32::try_from(year_index % years_per_age + 1)
            .map_err(|_| CalendarError::out_of_range("absolute_days", days, 0, i64::MAX))?;
        let age = u32::try_from(year_index / years_per_age + 1)
            .map_err(|_| CalendarError::out_of_range("absolute_days", days, 0, i64::MAX))?;

        Ok(CalendarDate {
            age,
            year_in_age,
            day_of_year,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::date::CalendarDate;
    use crate::error::CalendarError;
    use crate::{Calendar, athas};

    fn calendar() -> Calendar {
        Calendar::new(athas::definition()).unwrap()
    }

    #[test]
    fn epoch_is_age_one_year_one_day_one() {
        let cal = calendar();
        assert_eq!(cal.to_absolute_days(1, 1, 1).unwrap(), 0);
    }

    #[test]
    fn last_day_of_first_year() {
        let cal = calendar();
        assert_eq!(cal.to_absolute_days(1, 1, 375).unwrap(), 374);
    }

    #[test]
    fn first_day_of_second_age() {
        let cal = calendar();
        assert_eq!(cal.to_absolute_days(2, 1, 1).unwrap(), 375 * 77);
    }

    #[test]
    fn roundtrip_reference_date() {
        let cal = calendar();
        let days = cal.to_absolute_days(190, 10, 200).unwrap();
        assert_eq!(
            cal.from_absolute_days(days).unwrap(),
            CalendarDate::new(190, 10, 200)
        );
    }

    #[test]
    fn from_absolute_rejects_negative() {
        let cal = calendar();
        assert_eq!(
            cal.from_absolute_days(-1).unwrap_err(),
            CalendarError::OutOfRange {
                field: "absolute_days",
                value: -1,
                min: 0,
                max: i64::MAX
            }
        );
    }

    #[test]
    fn to_absolute_validates_components() {
        let cal = calendar();
        assert!(matches!(
            cal.to_absolute_days(0, 1, 1).unwrap_err(),
            CalendarError::OutOfRange { field: "age", .. }
        ));
        assert!(matches!(
            cal.to_absolute_days(1, 78, 1).unwrap_err(),
            CalendarError::OutOfRange {
                field: "year_in_age",
                ..
            }
        ));
        assert!(matches!(
            cal.to_absolute_days(1, 1, 376).unwrap_err(),
            CalendarError::OutOfRange {
                field: "day_of_year",
                ..
            }
        ));
    }

    #[test]
    fn ordering_is_preserved_across_boundaries() {
        let cal = calendar();
        let year_end = cal.to_absolute_days(1, 77, 375).unwrap();
        let next_age = cal.to_absolute_days(2, 1, 1).unwrap();
        assert_eq!(next_age, year_end + 1);
    }
}
