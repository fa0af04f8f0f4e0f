//! Optional process-wide calendar slot.
//!
//! The core API takes an explicit [`Calendar`] reference; this module is a
//! convenience for hosts that want a single calendar for the whole
//! process. The slot is written exactly once: [`init`] publishes the
//! calendar with a happens-before edge, so concurrent readers need no
//! further synchronization.

use std::sync::OnceLock;

use crate::{Calendar, CalendarError};

static CALENDAR: OnceLock<Calendar> = OnceLock::new();

/// Installs the process-wide calendar.
///
/// # Errors
/// Returns [`CalendarError::AlreadyInitialized`] if a calendar has already
/// been installed; re-initialization is a caller error, not a supported
/// operation.
pub fn init(calendar: Calendar) -> Result<(), CalendarError> {
    CALENDAR
        .set(calendar)
        .map_err(|_| CalendarError::AlreadyInitialized)
}

/// Returns the process-wide calendar.
///
/// # Errors
/// Returns [`CalendarError::NotInitialized`] if [`init`] has not run yet.
pub fn calendar() -> Result<&'static Calendar, CalendarError> {
    CALENDAR.get().ok_or(CalendarError::NotInitialized)
}
