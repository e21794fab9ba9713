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

use crate::types::building::Building;
use crate::types::campus::Campus;
use crate::types::room::Room;
use crate::types::room::RoomKind;
use crate::types::schedule::Schedules;
use serde::Serialize;

/// Everything the building page shows for one building ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Resolution {
    /// First building whose trimmed ID matches, if any.
    pub building: Option<Building>,
    /// Rooms of type `room` whose parent matches, in dataset order.
    pub rooms: Vec<Room>,
    /// Rooms of type `cr` whose parent matches, in dataset order.
    pub crs: Vec<Room>,
    /// All schedules, unfiltered.
    pub schedules: Schedules,
}

/// Looks up the building `bid` in `campus` and collects its rooms.
///
/// `bid` is trimmed but otherwise compared exactly against building IDs and room parents. Rooms
/// are matched by parent even if no building has that ID. Rooms of any other type are dropped.
pub fn resolve(campus: Campus, bid: &str) -> Resolution {
    let key = bid.trim();
    let Campus {
        buildings,
        rooms: all_rooms,
        schedules,
    } = campus;

    let building = buildings.into_iter().find(|building| building.key() == key);

    let mut rooms = Vec::new();
    let mut crs = Vec::new();
    for room in all_rooms {
        if room.parent_key() != key {
            continue;
        }
        match room.kind() {
            Some(RoomKind::Room) => rooms.push(room),
            Some(RoomKind::Classroom) => crs.push(room),
            None => {}
        }
    }

    Resolution {
        building,
        rooms,
        crs,
        schedules,
    }
}

/// Logs the IDs of all buildings in `campus` at debug level.
pub fn log_building_ids(campus: &Campus) {
    let ids: Vec<&str> = campus
        .buildings
        .iter()
        .map(|building| building.id.as_deref().unwrap_or_default())
        .collect();
    tracing::debug!("Available buildings: {:?}", ids);
}
