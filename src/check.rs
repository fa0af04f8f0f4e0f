//! Construction-time consistency check.
//!
//! Every dependent query trusts the conversion invariants unconditionally,
//! so a definition that cannot round-trip must never leave
//! [`crate::Calendar::new`].

use crate::Calendar;
use crate::date::{CalendarDate, DayPosition};
use crate::error::DefinitionError;

/// Runs the full self-test against an otherwise-constructed calendar.
///
/// Fails on the first inconsistency, naming the failing day or year.
pub(crate) fn run(calendar: &Calendar) -> Result<(), DefinitionError> {
    let days_per_year = calendar.total_days_per_year();
    let years_per_age = calendar.years_per_age();

    // Absolute-day round-trip over a handful of representative dates,
    // including the epoch and both cycle boundaries.
    let probes = [
        CalendarDate::new(1, 1, 1),
        CalendarDate::new(1, years_per_age, days_per_year),
        CalendarDate::new(2, 1, 1),
        CalendarDate::new(190, years_per_age.min(10), days_per_year.min(200)),
    ];
    for probe in probes {
        let failure = DefinitionError::AbsoluteRoundTrip {
            age: probe.age,
            year_in_age: probe.year_in_age,
            day_of_year: probe.day_of_year,
        };
        let days = calendar
            .to_absolute_days(probe.age, probe.year_in_age, probe.day_of_year)
            .map_err(|_| failure.clone())?;
        let back = calendar
            .from_absolute_days(days)
            .map_err(|_| failure.clone())?;
        if back != probe {
            return Err(failure);
        }
    }

    // Exhaustive day-of-year bijection over the whole year.
    for day_of_year in 1..=days_per_year {
        let failure = DefinitionError::DayRoundTrip { day_of_year };
        let position = calendar
            .resolve_day_of_year(day_of_year)
            .map_err(|_| failure.clone())?;
        let back = match position {
            DayPosition::Month { month, day } => calendar.month_day_to_day_of_year(month, day),
            DayPosition::Intercalary { period, day } => {
                calendar.intercalary_to_day_of_year(period, day)
            }
        }
        .map_err(|_| failure.clone())?;
        if back != day_of_year {
            return Err(failure);
        }
    }

    // Every year in the Age must produce a usable display name.
    for year_in_age in 1..=years_per_age {
        let name = calendar
            .year_name(year_in_age)
            .map_err(|_| DefinitionError::BadYearName {
                year_in_age,
                name: String::new(),
            })?;
        if name.trim().is_empty() || !name.contains("'s") {
            return Err(DefinitionError::BadYearName { year_in_age, name });
        }
    }

    Ok(())
}
