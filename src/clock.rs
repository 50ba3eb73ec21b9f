use std::error::Error;
use std::fmt::Display;

use chrono::{Datelike, Local, NaiveDate};
use datetime::{LocalDate, Month};

/// Source of "today" for the folder name.
pub trait Clock {
    fn today(&self) -> Result<LocalDate, ClockError>;
}

/// Reads the system clock in the process's local time zone.
///
/// `datetime`'s own `Today` is UTC based, so the calendar date comes from
/// chrono's `Local` and is carried over field by field.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Result<LocalDate, ClockError> {
        from_naive(Local::now().date_naive())
    }
}

/// Always reports the same date.
#[cfg(test)]
pub struct FixedClock(pub LocalDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> Result<LocalDate, ClockError> {
        Ok(self.0)
    }
}

#[derive(Debug)]
pub struct ClockError {
    reason: String,
}

impl Error for ClockError {}
impl Display for ClockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason)
    }
}

fn from_naive(date: NaiveDate) -> Result<LocalDate, ClockError> {
    let out_of_range = |_| ClockError {
        reason: format!("local date {} is out of range", date),
    };
    let month = Month::from_one(date.month() as i8).map_err(out_of_range)?;
    LocalDate::ymd(date.year() as i64, month, date.day() as i8).map_err(out_of_range)
}
