//! The Athasian reference calendar: 375 days across 12 thirty-day months
//! and three five-day intercalary periods, grouped into 77-year Ages.

use crate::definition::{
    CalendarDefinition, IntercalaryDef, MonthDef, NameCycles, SeasonDef,
};

/// Offset between the absolute year count and the Free Year numbering:
/// absolute year 14579 is Free Year 1.
pub const FREE_YEAR_OFFSET: i64 = 14578;

fn month(name: &str) -> MonthDef {
    MonthDef {
        name: name.to_owned(),
        days: 30,
    }
}

fn period(name: &str, after_month: u32, description: &str) -> IntercalaryDef {
    IntercalaryDef {
        name: name.to_owned(),
        after_month,
        days: 5,
        description: description.to_owned(),
    }
}

fn season(name: &str, start_day: u32, end_day: u32, description: &str) -> SeasonDef {
    SeasonDef {
        name: name.to_owned(),
        start_day,
        end_day,
        description: description.to_owned(),
    }
}

/// Builds the Athasian calendar definition.
///
/// Month and cycle names follow the Wanderer's reckoning: the Endlean
/// cycle of eleven names crossed with the Seofean cycle of seven gives
/// each of the 77 years in an Age a unique name.
pub fn definition() -> CalendarDefinition {
    CalendarDefinition {
        months: vec![
            month("Scorch"),
            month("Morrow"),
            month("Rest"),
            month("Gather"),
            month("Breeze"),
            month("Mist"),
            month("Bloom"),
            month("Haze"),
            month("Hoard"),
            month("Wind"),
            month("Sorrow"),
            month("Smolder"),
        ],
        intercalary: vec![
            period("Cooling Sun", 4, "Five days of respite as the sun wanes"),
            period("Soaring Sun", 8, "Five days under a climbing, pitiless sun"),
            period("Highest Sun", 12, "The five days of the sun's peak, closing the year"),
        ],
        seasons: vec![
            season(
                "High Sun",
                311,
                60,
                "The hottest stretch of the year, wrapping the year boundary",
            ),
            season("Sun Descending", 61, 185, "The sun retreats and the heat slowly breaks"),
            season("Sun Ascending", 186, 310, "The sun climbs back toward its peak"),
        ],
        years_per_age: 77,
        name_cycles: NameCycles {
            first: [
                "Ral", "Friend", "Desert", "Priest", "Wind", "Dragon", "Mountain", "King",
                "Silt", "Enemy", "Guthay",
            ]
            .iter()
            .map(|name| (*name).to_owned())
            .collect(),
            second: [
                "Fury",
                "Contemplation",
                "Vengeance",
                "Slumber",
                "Defiance",
                "Reverence",
                "Agitation",
            ]
            .iter()
            .map(|name| (*name).to_owned())
            .collect(),
        },
        free_year_offset: FREE_YEAR_OFFSET,
    }
}
