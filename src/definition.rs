//! Static calendar definition and its structural validation.
//!
//! A [`CalendarDefinition`] is the document an external loader supplies once
//! at startup. It is plain data: validation happens when it is handed to
//! [`crate::Calendar::new`], and the definition is immutable afterwards.

use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;

/// One month of the year, with a fixed day count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDef {
    /// Display name of the month.
    pub name: String,
    /// Number of days in the month (must be > 0).
    pub days: u32,
}

/// A short run of days inserted between two months, not part of any month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntercalaryDef {
    /// Display name of the period.
    pub name: String,
    /// 1-based month the period follows. Anchors must be strictly
    /// increasing across the period list.
    pub after_month: u32,
    /// Number of days in the period (must be > 0).
    pub days: u32,
    /// Optional flavor text.
    #[serde(default)]
    pub description: String,
}

/// A named span of days within the year.
///
/// `start_day > end_day` denotes a season that wraps the year boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonDef {
    /// Display name of the season.
    pub name: String,
    /// First day-of-year of the season (inclusive).
    pub start_day: u32,
    /// Last day-of-year of the season (inclusive).
    pub end_day: u32,
    /// Optional flavor text.
    #[serde(default)]
    pub description: String,
}

/// Two independently cycling name lists of (usually) different lengths.
///
/// Year `y` combines `first[(y - 1) % first.len()]` with
/// `second[(y - 1) % second.len()]`; the pair repeats only after
/// `lcm(first.len(), second.len())` years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCycles {
    /// The first (longer, in the reference calendar) cycle.
    pub first: Vec<String>,
    /// The second cycle.
    pub second: Vec<String>,
}

/// Immutable description of one calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDefinition {
    /// Ordered month list.
    pub months: Vec<MonthDef>,
    /// Ordered intercalary periods, anchored to strictly increasing months.
    #[serde(default)]
    pub intercalary: Vec<IntercalaryDef>,
    /// Ordered season list; first match wins on lookup.
    #[serde(default)]
    pub seasons: Vec<SeasonDef>,
    /// Number of years in one Age (must be > 0).
    pub years_per_age: u32,
    /// The two year-name cycles.
    pub name_cycles: NameCycles,
    /// Offset between the 1-based absolute year and the Free Year
    /// numbering (absolute year `offset + 1` is Free Year 1).
    #[serde(default)]
    pub free_year_offset: i64,
}

impl CalendarDefinition {
    /// Total days in one year: all month days plus all intercalary days.
    pub fn total_days_per_year(&self) -> u32 {
        let month_days: u32 = self.months.iter().map(|m| m.days).sum();
        let intercalary_days: u32 = self.intercalary.iter().map(|p| p.days).sum();
        month_days + intercalary_days
    }

    /// Checks arithmetic self-consistency of the definition.
    ///
    /// This is structural only: overlapping seasons or duplicate names are
    /// an authoring responsibility and are not rejected here.
    pub(crate) fn validate(&self) -> Result<(), DefinitionError> {
        if self.months.is_empty() {
            return Err(DefinitionError::NoMonths);
        }
        for (idx, month) in self.months.iter().enumerate() {
            if month.days == 0 {
                return Err(DefinitionError::EmptyMonth {
                    month: index_to_number(idx),
                });
            }
        }

        let month_count = u32::try_from(self.months.len()).unwrap_or(u32::MAX);
        let mut previous_anchor = 0u32;
        for (idx, period) in self.intercalary.iter().enumerate() {
            let number = index_to_number(idx);
            if period.days == 0 {
                return Err(DefinitionError::EmptyPeriod { period: number });
            }
            if period.after_month < 1 || period.after_month > month_count {
                return Err(DefinitionError::BadAnchor {
                    period: number,
                    after_month: period.after_month,
                    months: month_count,
                });
            }
            if period.after_month <= previous_anchor {
                return Err(DefinitionError::UnorderedAnchor { period: number });
            }
            previous_anchor = period.after_month;
        }

        if self.years_per_age == 0 {
            return Err(DefinitionError::NoYears);
        }
        if self.name_cycles.first.is_empty() {
            return Err(DefinitionError::EmptyNameCycle { cycle: "first" });
        }
        if self.name_cycles.second.is_empty() {
            return Err(DefinitionError::EmptyNameCycle { cycle: "second" });
        }

        let days_per_year = self.total_days_per_year();
        for (idx, season) in self.seasons.iter().enumerate() {
            let in_year = |day: u32| (1..=days_per_year).contains(&day);
            if !in_year(season.start_day) || !in_year(season.end_day) {
                return Err(DefinitionError::SeasonBounds {
                    season: index_to_number(idx),
                    start_day: season.start_day,
                    end_day: season.end_day,
                    days_per_year,
                });
            }
        }

        Ok(())
    }
}

/// 0-based list index to 1-based display number.
fn index_to_number(idx: usize) -> u32 {
    u32::try_from(idx).unwrap_or(u32::MAX - 1) + 1
}
