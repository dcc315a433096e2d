use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tadjust_core::{ContainerKind, DurationConfig, WeekdaySpec};

use crate::error::{CliError, CliResult};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

/// A parsed command-line date: either a plain date or a date with a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DateInput {
    pub fn kind(&self) -> &'static str {
        match self {
            DateInput::Date(_) => "date",
            DateInput::DateTime(_) => "datetime",
        }
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::Date(date) => write!(f, "{}", date),
            DateInput::DateTime(datetime) => write!(f, "{}", datetime.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

/// A parsed command-line clock value, with or without a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockInput {
    Time(NaiveTime),
    DateTime(NaiveDateTime),
}

pub fn parse_date_input(s: &str) -> CliResult<DateInput> {
    let trimmed = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(DateInput::Date(date));
    }
    parse_datetime(trimmed).map(DateInput::DateTime).ok_or_else(|| {
        CliError::input(format!(
            "Invalid date '{}'. Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS",
            s
        ))
    })
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
}

pub fn parse_time(s: &str) -> CliResult<NaiveTime> {
    let trimmed = s.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            CliError::input(format!("Invalid time '{}'. Expected HH:MM or HH:MM:SS", s))
        })
}

pub fn parse_clock_input(s: &str) -> CliResult<ClockInput> {
    if let Some(datetime) = parse_datetime(s.trim()) {
        return Ok(ClockInput::DateTime(datetime));
    }
    parse_time(s).map(ClockInput::Time)
}

/// A weekday argument: all digits (with optional sign) is a zero-based
/// number, anything else a name.
pub fn parse_weekday(s: &str) -> WeekdaySpec {
    match s.trim().parse::<i64>() {
        Ok(index) => WeekdaySpec::Index(index),
        Err(_) => WeekdaySpec::Name(s.to_string()),
    }
}

pub fn parse_container(s: &str) -> CliResult<ContainerKind> {
    s.parse::<ContainerKind>().map_err(CliError::from)
}

pub fn parse_duration_config(days_in_month: f64, days_in_year: f64) -> CliResult<DurationConfig> {
    DurationConfig::new(days_in_month, days_in_year).map_err(CliError::from)
}

/// Non-blank, trimmed lines from `path`, or from stdin when `path` is `-`.
pub fn read_lines(path: &str) -> CliResult<Vec<String>> {
    let reader: Box<dyn BufRead> = if path == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(path).with_context(|| format!("Failed to open file '{}'", path))?;
        Box::new(BufReader::new(file))
    };

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read line")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_and_datetimes() {
        assert_eq!(
            parse_date_input("2024-06-13").unwrap(),
            DateInput::Date(NaiveDate::from_ymd_opt(2024, 6, 13).unwrap())
        );
        let parsed = parse_date_input("2024-06-13T08:30:00").unwrap();
        assert_eq!(parsed.kind(), "datetime");
        assert_eq!(parsed.to_string(), "2024-06-13T08:30:00");
        assert!(parse_date_input("13/06/2024").is_err());
    }

    #[test]
    fn times() {
        assert_eq!(parse_time("22:00").unwrap(), NaiveTime::from_hms_opt(22, 0, 0).unwrap());
        assert_eq!(
            parse_time("06:45:10").unwrap(),
            NaiveTime::from_hms_opt(6, 45, 10).unwrap()
        );
        assert!(parse_time("25:00").is_err());
        assert!(matches!(
            parse_clock_input("2024-06-13T23:59:45").unwrap(),
            ClockInput::DateTime(_)
        ));
    }

    #[test]
    fn weekdays() {
        assert_eq!(parse_weekday("5"), WeekdaySpec::Index(5));
        assert_eq!(parse_weekday("-1"), WeekdaySpec::Index(-1));
        assert_eq!(parse_weekday("Saturday"), WeekdaySpec::Name("Saturday".into()));
    }

    #[test]
    fn containers() {
        assert_eq!(parse_container("set").unwrap(), ContainerKind::Set);
        assert_eq!(parse_container("tuple").unwrap_err().exit_code(), 2);
    }
}
