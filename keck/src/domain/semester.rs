use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

/// An observatory scheduling period: `<year>A` runs February through July,
/// `<year>B` August through January. January belongs to the PREVIOUS year's
/// B semester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Semester {
    pub year: i32,
    pub half: SemesterHalf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemesterHalf {
    A,
    B,
}

impl Semester {
    pub fn from_date(date: NaiveDate) -> Self {
        let (year, half) = match date.month() {
            1 => (date.year() - 1, SemesterHalf::B),
            2..=7 => (date.year(), SemesterHalf::A),
            _ => (date.year(), SemesterHalf::B),
        };
        Self { year, half }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let half = match self.half {
            SemesterHalf::A => 'A',
            SemesterHalf::B => 'B',
        };
        write!(f, "{}{}", self.year, half)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSemesterError(String);

impl fmt::Display for ParseSemesterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid semester: {:?}", self.0)
    }
}

impl std::error::Error for ParseSemesterError {}

impl FromStr for Semester {
    type Err = ParseSemesterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, half) = s.split_at(s.len().saturating_sub(1));
        let year = year
            .parse::<i32>()
            .map_err(|_| ParseSemesterError(s.to_string()))?;
        let half = match half {
            "A" => SemesterHalf::A,
            "B" => SemesterHalf::B,
            _ => return Err(ParseSemesterError(s.to_string())),
        };
        Ok(Self { year, half })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn february_through_july_is_a() {
        assert_eq!(Semester::from_date(date(2025, 2, 1)).to_string(), "2025A");
        assert_eq!(Semester::from_date(date(2025, 7, 31)).to_string(), "2025A");
    }

    #[test]
    fn august_through_december_is_b() {
        assert_eq!(Semester::from_date(date(2025, 8, 1)).to_string(), "2025B");
        assert_eq!(Semester::from_date(date(2025, 12, 31)).to_string(), "2025B");
    }

    #[test]
    fn january_belongs_to_previous_years_b() {
        assert_eq!(Semester::from_date(date(2026, 1, 15)).to_string(), "2025B");
    }

    #[test]
    fn parse_round_trips() {
        let semester: Semester = "2025A".parse().unwrap();
        assert_eq!(semester.year, 2025);
        assert_eq!(semester.half, SemesterHalf::A);
        assert_eq!(semester.to_string(), "2025A");
        assert!("2025".parse::<Semester>().is_err());
        assert!("X".parse::<Semester>().is_err());
    }
}
