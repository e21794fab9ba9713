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

use super::de_optional_string;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use strum::EnumString;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// ID of the building this room belongs to.
    #[serde(
        default,
        deserialize_with = "de_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "de_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    /// Display attributes such as `name` and the schedule `tag`.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum RoomKind {
    #[strum(serialize = "room")]
    Room,
    #[strum(serialize = "cr")]
    Classroom,
}

impl Room {
    /// The trimmed parent building ID, empty if the room has none.
    pub fn parent_key(&self) -> &str {
        self.parent.as_deref().unwrap_or_default().trim()
    }

    /// The parsed `type`, or `None` for missing and unrecognised values.
    pub fn kind(&self) -> Option<RoomKind> {
        self.kind.as_deref()?.parse().ok()
    }

    /// Key of this room's entries in the campus schedules.
    pub fn tag(&self) -> Option<&str> {
        self.attributes.get("tag").and_then(Value::as_str)
    }

    pub fn name(&self) -> &str {
        self.attributes
            .get("name")
            .and_then(Value::as_str)
            .or_else(|| self.tag())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn room(value: Value) -> Room {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn kinds() {
        assert_eq!(room(json!({"type": "room"})).kind(), Some(RoomKind::Room));
        assert_eq!(room(json!({"type": "cr"})).kind(), Some(RoomKind::Classroom));
        assert_eq!(room(json!({"type": "hallway"})).kind(), None);
        assert_eq!(room(json!({"type": "Room"})).kind(), None);
        assert_eq!(room(json!({"type": null})).kind(), None);
        assert_eq!(room(json!({"type": 3})).kind(), None);
        assert_eq!(room(json!({})).kind(), None);
    }

    #[test]
    fn parent_key_is_trimmed() {
        assert_eq!(room(json!({"parent": " A1 "})).parent_key(), "A1");
        assert_eq!(room(json!({"parent": null})).parent_key(), "");
        assert_eq!(room(json!({})).parent_key(), "");
    }

    #[test]
    fn name_and_tag() {
        let named = room(json!({"name": "Room 101", "tag": "A1-101"}));
        assert_eq!(named.name(), "Room 101");
        assert_eq!(named.tag(), Some("A1-101"));

        let tagged = room(json!({"tag": "A1-102"}));
        assert_eq!(tagged.name(), "A1-102");

        assert_eq!(room(json!({})).name(), "");
    }

    #[test]
    fn type_round_trips_under_its_json_name() {
        let value = json!({"parent": "A1", "type": "hallway", "name": "East wing"});
        assert_eq!(serde_json::to_value(room(value.clone())).unwrap(), value);
    }
}
