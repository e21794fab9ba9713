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

use super::filters;
use crate::campus::Resolution;
use crate::types::building::Building;
use crate::types::errors::ServerError;
use crate::types::room::Room;
use crate::types::schedule::rows_for;
use crate::types::schedule::ScheduleRow;
use crate::State;
use askama::Template;
use axum::extract::Extension;
use axum::extract::Path;
use axum::response::Html;

#[derive(Template)]
#[template(path = "building.html")]
struct BuildingTemplate {
    title: String,
    key: String,
    building: Option<Building>,
    rooms: Vec<RoomEntry>,
    crs: Vec<Room>,
}

struct RoomEntry {
    room: Room,
    schedule: Vec<ScheduleRow>,
}

impl BuildingTemplate {
    fn new(key: &str, resolution: Resolution) -> Self {
        let Resolution {
            building,
            rooms,
            crs,
            schedules,
        } = resolution;
        let rooms = rooms
            .into_iter()
            .map(|room| {
                let schedule = room
                    .tag()
                    .map(|tag| rows_for(&schedules, tag))
                    .unwrap_or_default();
                RoomEntry { room, schedule }
            })
            .collect();
        let title = match &building {
            Some(building) => building.name().to_string(),
            None => "Building not found".to_string(),
        };

        Self {
            title,
            key: key.to_string(),
            building,
            rooms,
            crs,
        }
    }
}

#[tracing::instrument(name = "Building", skip(state), err)]
pub async fn handle(
    Extension(state): Extension<State>,
    Path(bid): Path<String>,
) -> Result<Html<String>, ServerError> {
    let resolution = state.resolve(&bid).await?;
    let template = BuildingTemplate::new(bid.trim(), resolution);
    Ok(Html(template.render()?))
}
