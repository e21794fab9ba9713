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
use super::display_value;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Identifier rooms refer to through their `parent`.
    #[serde(
        default,
        deserialize_with = "de_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Display attributes such as `name`, map position and image.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Building {
    /// The trimmed identifier, empty if the building has none.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or_default().trim()
    }

    pub fn name(&self) -> &str {
        match self.attributes.get("name") {
            Some(Value::String(name)) if !name.trim().is_empty() => name.as_str(),
            _ => self.key(),
        }
    }

    /// Attributes other than the name, in document order, as display text.
    pub fn details(&self) -> Vec<(&str, String)> {
        self.attributes
            .iter()
            .filter(|(key, _)| key.as_str() != "name")
            .map(|(key, value)| (key.as_str(), display_value(value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_is_trimmed() {
        let building: Building = serde_json::from_value(json!({"id": "  A1 \t"})).unwrap();
        assert_eq!(building.id.as_deref(), Some("  A1 \t"));
        assert_eq!(building.key(), "A1");
    }

    #[test]
    fn non_string_id_is_treated_as_missing() {
        let building: Building = serde_json::from_value(json!({"id": 7, "name": "Gym"})).unwrap();
        assert_eq!(building.id, None);
        assert_eq!(building.key(), "");
        assert_eq!(building.name(), "Gym");
    }

    #[test]
    fn name_falls_back_to_key() {
        let building: Building = serde_json::from_value(json!({"id": "B2"})).unwrap();
        assert_eq!(building.name(), "B2");
    }

    #[test]
    fn details_skip_name() {
        let building: Building = serde_json::from_value(json!({
            "id": "A1",
            "name": "Main Hall",
            "x": 120,
            "img": "/static/img/a1.png",
        }))
        .unwrap();
        let mut details = building.details();
        details.sort();
        assert_eq!(
            details,
            vec![
                ("img", "/static/img/a1.png".to_string()),
                ("x", "120".to_string())
            ]
        );
    }

    #[test]
    fn attributes_survive_serialization() {
        let value = json!({"id": "A1", "name": "Main Hall", "w": 200});
        let building: Building = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&building).unwrap(), value);
    }
}
