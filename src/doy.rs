//! Day-of-year resolution: the bijection between a day number and its
//! month/day or intercalary-period/day breakdown.

use crate::Calendar;
use crate::date::DayPosition;
use crate::definition::IntercalaryDef;
use crate::error::{CalendarError, ensure_range};

impl Calendar {
    /// Returns the intercalary period anchored directly after `month`,
    /// with its 1-based period number.
    pub(crate) fn period_after(&self, month: u32) -> Option<(u32, &IntercalaryDef)> {
        self.definition()
            .intercalary
            .iter()
            .enumerate()
            .find(|(_, period)| period.after_month == month)
            .map(|(idx, period)| (u32::try_from(idx).unwrap_or(u32::MAX - 1) + 1, period))
    }

    /// Resolves a day-of-year to its position within the year.
    ///
    /// Walks the months in order, accumulating a day cursor and checking
    /// any intercalary period anchored after each month. Linear in the
    /// month count.
    ///
    /// # Errors
    /// Returns [`CalendarError::OutOfRange`] if `day_of_year` is not in
    /// `1..=total_days_per_year`.
    pub fn resolve_day_of_year(&self, day_of_year: u32) -> Result<DayPosition, CalendarError> {
        ensure_range("day_of_year", day_of_year, 1, self.total_days_per_year())?;

        let mut cursor = 0u32;
        for (idx, month) in self.definition().months.iter().enumerate() {
            let month_number = u32::try_from(idx).unwrap_or(u32::MAX - 1) + 1;
            cursor += month.days;
            if day_of_year <= cursor {
                return Ok(DayPosition::Month {
                    month: month_number,
                    day: day_of_year - (cursor - month.days),
                });
            }
            if let Some((period_number, period)) = self.period_after(month_number) {
                if day_of_year <= cursor + period.days {
                    return Ok(DayPosition::Intercalary {
                        period: period_number,
                        day: day_of_year - cursor,
                    });
                }
                cursor += period.days;
            }
        }

        // Unreachable: the range check guarantees day_of_year <= final cursor.
        Err(CalendarError::out_of_range(
            "day_of_year",
            i64::from(day_of_year),
            1,
            i64::from(self.total_days_per_year()),
        ))
    }

    /// Converts a month and day-in-month back to a day-of-year.
    ///
    /// # Errors
    /// Returns [`CalendarError::OutOfRange`] if `month` is not a valid
    /// month number or `day` exceeds that month's length.
    pub fn month_day_to_day_of_year(&self, month: u32, day: u32) -> Result<u32, CalendarError> {
        let months = &self.definition().months;
        let month_count = u32::try_from(months.len()).unwrap_or(u32::MAX);
        ensure_range("month", month, 1, month_count)?;
        ensure_range("day_in_month", day, 1, months[(month - 1) as usize].days)?;

        let mut day_of_year = 0u32;
        for earlier in 1..month {
            day_of_year += months[(earlier - 1) as usize].days;
            if let Some((_, period)) = self.period_after(earlier) {
                day_of_year += period.days;
            }
        }
        Ok(day_of_year + day)
    }

    /// Converts an intercalary period and day-in-period back to a
    /// day-of-year. Every intercalary day has its own distinct value.
    ///
    /// # Errors
    /// Returns [`CalendarError::OutOfRange`] if `period` is not a valid
    /// period number or `day` exceeds that period's length.
    pub fn intercalary_to_day_of_year(&self, period: u32, day: u32) -> Result<u32, CalendarError> {
        let periods = &self.definition().intercalary;
        let period_count = u32::try_from(periods.len()).unwrap_or(u32::MAX);
        ensure_range("period", period, 1, period_count)?;
        let target = &periods[(period - 1) as usize];
        ensure_range("day_in_period", day, 1, target.days)?;

        // Anchors are strictly increasing, so every earlier period sits
        // before the target's anchor month.
        let months = &self.definition().months;
        let month_days: u32 = months
            .iter()
            .take(target.after_month as usize)
            .map(|m| m.days)
            .sum();
        let earlier_period_days: u32 = periods
            .iter()
            .take((period - 1) as usize)
            .map(|p| p.days)
            .sum();
        Ok(month_days + earlier_period_days + day)
    }
}
