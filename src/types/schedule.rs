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

use super::display_value;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// Schedule data keyed by room tag. Forwarded as-is.
pub type Schedules = Map<String, Value>;

/// One class meeting, as shown in a room's schedule table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleRow {
    #[serde(deserialize_with = "de_text")]
    pub day: String,
    /// Start time, `HH:MM` in 24-hour format.
    #[serde(deserialize_with = "de_text")]
    pub start: String,
    /// End time, `HH:MM` in 24-hour format.
    #[serde(deserialize_with = "de_text")]
    pub end: String,
    #[serde(deserialize_with = "de_text")]
    pub subject: String,
    #[serde(deserialize_with = "de_text")]
    pub section: String,
    #[serde(deserialize_with = "de_text")]
    pub teacher: String,
}

fn de_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(display_value(&Value::deserialize(d)?))
}

/// The rows scheduled under `tag`. Entries that are not objects are skipped.
pub fn rows_for(schedules: &Schedules, tag: &str) -> Vec<ScheduleRow> {
    match schedules.get(tag) {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter(|entry| entry.is_object())
            .filter_map(|entry| ScheduleRow::deserialize(entry).ok())
            .collect(),
        _ => Vec::new(),
    }
}
