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

use super::building::Building;
use super::room::Room;
use super::schedule::Schedules;
use serde::de;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// The contents of `campus.json`. Other top-level keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Campus {
    pub buildings: Vec<Building>,
    pub rooms: Vec<Room>,
    pub schedules: Schedules,
}

/// Only a JSON object is a campus document; missing and `null` keys are empty.
impl<'de> Deserialize<'de> for Campus {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let mut document = Map::<String, Value>::deserialize(d)?;
        Ok(Self {
            buildings: take_field(&mut document, "buildings")?,
            rooms: take_field(&mut document, "rooms")?,
            schedules: take_field(&mut document, "schedules")?,
        })
    }
}

fn take_field<T, E>(document: &mut Map<String, Value>, key: &str) -> Result<T, E>
where
    T: DeserializeOwned + Default,
    E: de::Error,
{
    match document.remove(key) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => T::deserialize(value).map_err(|err| E::custom(format!("{}: {}", key, err))),
    }
}
