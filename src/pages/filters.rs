// Copyright 2022 the campusmap authors.
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

//! Custom askama filters.

use std::fmt::Display;

/// Formats a 24-hour `HH:MM` time as `H:MM AM/PM`.
pub fn time12<T: Display>(time: T) -> askama::Result<String> {
    Ok(format_12_hour(&time.to_string()))
}

/// Values without a `:` or without a leading hour number are returned unchanged. The minutes are
/// kept exactly as written.
fn format_12_hour(time: &str) -> String {
    let mut parts = time.split(':');
    let (hour, minute) = match (parts.next(), parts.next()) {
        (Some(hour), Some(minute)) => (hour, minute),
        _ => return time.to_string(),
    };
    let hour = hour.trim_start();
    let digits = hour.len() - hour.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    let hour: u32 = match hour[..digits].parse() {
        Ok(hour) => hour,
        Err(_) => return time.to_string(),
    };
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let hour = match hour % 12 {
        0 => 12,
        hour => hour,
    };
    format!("{}:{} {}", hour, minute, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn afternoon() {
        assert_eq!(format_12_hour("13:30"), "1:30 PM");
        assert_eq!(format_12_hour("23:05"), "11:05 PM");
    }

    #[test]
    fn morning() {
        assert_eq!(format_12_hour("08:00"), "8:00 AM");
        assert_eq!(format_12_hour("11:59"), "11:59 AM");
    }

    #[test]
    fn noon_and_midnight() {
        assert_eq!(format_12_hour("12:00"), "12:00 PM");
        assert_eq!(format_12_hour("00:15"), "12:15 AM");
    }

    #[test]
    fn seconds_are_dropped() {
        assert_eq!(format_12_hour("14:45:00"), "2:45 PM");
    }

    #[test]
    fn out_of_range_hours_wrap() {
        assert_eq!(format_12_hour("24:00"), "12:00 PM");
        assert_eq!(format_12_hour("4294967290:00"), "10:00 PM");
        assert_eq!(format_12_hour("4294967295:00"), "3:00 PM");
    }

    #[test]
    fn unparseable_is_unchanged() {
        assert_eq!(format_12_hour(""), "");
        assert_eq!(format_12_hour("TBA"), "TBA");
        assert_eq!(format_12_hour("noon:30"), "noon:30");
    }

    #[test]
    fn filter() {
        assert_eq!(time12(&"16:10".to_string()).unwrap(), "4:10 PM");
    }
}
