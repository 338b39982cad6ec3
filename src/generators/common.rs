//! Common utilities for document generation.
//!
//! Shared helpers for the render date, the clock it comes from, and
//! filename sanitizing.

use chrono::{Local, NaiveDate};
use sanitize_filename::Options;

/// Source of "today" for execution clauses.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The date stamped into a certificate's execution clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionDate {
    /// Zero-padded day of month, e.g. "05".
    pub day: String,
    /// e.g. "March, 2024".
    pub month_year: String,
}

impl ExecutionDate {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            day: date.format("%d").to_string(),
            month_year: date.format("%B, %Y").to_string(),
        }
    }

    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::from_date(clock.today())
    }
}

/// Sanitize a string for use as a file name stem.
///
/// Path separators and control characters are dropped, whitespace other than
/// a plain space becomes a space. Names are not truncated.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let spaced: String = name
        .chars()
        .map(|ch| if ch.is_whitespace() { ' ' } else { ch })
        .collect();

    let options = Options {
        windows: false,
        truncate: false,
        replacement: "",
    };
    let sanitized = sanitize_filename::sanitize_with_options(spaced, options);

    if sanitized.trim().is_empty() {
        return fallback.to_string();
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_date_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let stamp = ExecutionDate::from_date(date);
        assert_eq!(stamp.day, "05");
        assert_eq!(stamp.month_year, "March, 2024");
    }

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let stamp = ExecutionDate::from_clock(&FixedClock(date));
        assert_eq!(stamp.day, "31");
        assert_eq!(stamp.month_year, "December, 2025");
    }

    #[test]
    fn test_sanitize_keeps_permitted_punctuation() {
        assert_eq!(
            sanitize_filename("Smith & Sons, L.L.C.", "company"),
            "Smith & Sons, L.L.C."
        );
        assert_eq!(sanitize_filename("O'Brien Co", "company"), "O'Brien Co");
    }

    #[test]
    fn test_sanitize_strips_separators_and_controls() {
        assert_eq!(sanitize_filename("../etc/passwd", "company"), "..etcpasswd");
        assert_eq!(sanitize_filename("Acme\tCorp\n", "company"), "Acme Corp ");
        assert_eq!(sanitize_filename("\u{7}", "company"), "company");
    }
}
