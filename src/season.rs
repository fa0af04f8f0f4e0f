//! Season lookup by day-of-year, including ranges that wrap the year
//! boundary.

use crate::Calendar;
use crate::date::SeasonInfo;
use crate::error::{CalendarError, ensure_range};

impl Calendar {
    /// Finds the season containing `day_of_year`, if any.
    ///
    /// Seasons are checked in definition order; the first match wins.
    /// A season with `start_day > end_day` wraps the year boundary and
    /// contains a day when `day_of_year >= start_day` or
    /// `day_of_year <= end_day`. Returning `Ok(None)` is a valid outcome:
    /// a calendar may leave days unassigned.
    ///
    /// # Errors
    /// Returns [`CalendarError::OutOfRange`] if `day_of_year` is not in
    /// `1..=total_days_per_year`.
    pub fn season_for(&self, day_of_year: u32) -> Result<Option<SeasonInfo>, CalendarError> {
        let days_per_year = self.total_days_per_year();
        ensure_range("day_of_year", day_of_year, 1, days_per_year)?;

        for season in &self.definition().seasons {
            let wraps = season.start_day > season.end_day;
            let contains = if wraps {
                day_of_year >= season.start_day || day_of_year <= season.end_day
            } else {
                day_of_year >= season.start_day && day_of_year <= season.end_day
            };
            if !contains {
                continue;
            }

            let days_in_season = if wraps {
                (days_per_year - season.start_day + 1) + season.end_day
            } else {
                season.end_day - season.start_day + 1
            };
            let days_into_season = if day_of_year >= season.start_day {
                day_of_year - season.start_day + 1
            } else {
                // Past the wrap: the whole tail of the year plus the days
                // already spent at the start of it.
                (days_per_year - season.start_day + 1) + day_of_year
            };

            return Ok(Some(SeasonInfo {
                name: season.name.clone(),
                description: season.description.clone(),
                start_day: season.start_day,
                end_day: season.end_day,
                days_in_season,
                days_into_season,
                days_remaining: days_in_season - days_into_season,
            }));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use crate::definition::{CalendarDefinition, MonthDef, NameCycles, SeasonDef};
    use crate::error::CalendarError;
    use crate::{Calendar, athas};

    fn calendar() -> Calendar {
        Calendar::new(athas::definition()).unwrap()
    }

    #[test]
    fn plain_season_bounds() {
        let cal = calendar();
        let info = cal.season_for(61).unwrap().unwrap();
        assert_eq!(info.name, "Sun Descending");
        assert_eq!(info.days_in_season, 125);
        assert_eq!(info.days_into_season, 1);
        assert_eq!(info.days_remaining, 124);

        let info = cal.season_for(185).unwrap().unwrap();
        assert_eq!(info.name, "Sun Descending");
        assert_eq!(info.days_into_season, 125);
        assert_eq!(info.days_remaining, 0);
    }

    #[test]
    fn wrapping_season_start_side() {
        let cal = calendar();
        // High Sun runs 311..=375 and wraps into 1..=60.
        let info = cal.season_for(311).unwrap().unwrap();
        assert_eq!(info.name, "High Sun");
        assert_eq!(info.days_in_season, 125);
        assert_eq!(info.days_into_season, 1);
        assert_eq!(info.days_remaining, 124);
    }

    #[test]
    fn wrapping_season_end_side() {
        let cal = calendar();
        let info = cal.season_for(1).unwrap().unwrap();
        assert_eq!(info.name, "High Sun");
        assert_eq!(info.days_into_season, 66);
        assert_eq!(info.days_remaining, 59);

        let info = cal.season_for(60).unwrap().unwrap();
        assert_eq!(info.name, "High Sun");
        assert_eq!(info.days_into_season, 125);
        assert_eq!(info.days_remaining, 0);
    }

    #[test]
    fn every_reference_day_has_a_season() {
        let cal = calendar();
        for day in 1..=375 {
            assert!(
                cal.season_for(day).unwrap().is_some(),
                "day {day} has no season"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_day() {
        let cal = calendar();
        assert!(matches!(
            cal.season_for(0).unwrap_err(),
            CalendarError::OutOfRange {
                field: "day_of_year",
                ..
            }
        ));
        assert!(cal.season_for(376).is_err());
    }

    #[test]
    fn unassigned_days_yield_none() {
        let def = CalendarDefinition {
            months: vec![MonthDef {
                name: "Lone".to_owned(),
                days: 20,
            }],
            intercalary: vec![],
            seasons: vec![SeasonDef {
                name: "Early".to_owned(),
                start_day: 1,
                end_day: 10,
                description: String::new(),
            }],
            years_per_age: 3,
            name_cycles: NameCycles {
                first: vec!["A".to_owned(), "B".to_owned()],
                second: vec!["X".to_owned()],
            },
            free_year_offset: 0,
        };
        let cal = Calendar::new(def).unwrap();
        assert!(cal.season_for(5).unwrap().is_some());
        assert_eq!(cal.season_for(11).unwrap(), None);
    }

    #[test]
    fn first_matching_season_wins() {
        let def = CalendarDefinition {
            months: vec![MonthDef {
                name: "Lone".to_owned(),
                days: 20,
            }],
            intercalary: vec![],
            seasons: vec![
                SeasonDef {
                    name: "Outer".to_owned(),
                    start_day: 1,
                    end_day: 20,
                    description: String::new(),
                },
                SeasonDef {
                    name: "Inner".to_owned(),
                    start_day: 5,
                    end_day: 10,
                    description: String::new(),
                },
            ],
            years_per_age: 3,
            name_cycles: NameCycles {
                first: vec!["A".to_owned(), "B".to_owned()],
                second: vec!["X".to_owned()],
            },
            free_year_offset: 0,
        };
        let cal = Calendar::new(def).unwrap();
        assert_eq!(cal.season_for(7).unwrap().unwrap().name, "Outer");
    }
}
