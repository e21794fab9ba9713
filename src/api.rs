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

//! JSON views of the campus dataset for the map frontend.

use crate::campus::CampusSource;
use crate::campus::Resolution;
use crate::types::errors::ServerError;
use crate::types::room::Room;
use crate::State;
use axum::extract::Extension;
use axum::extract::Path;
use axum::Json;
use serde_json::Value;

#[tracing::instrument(name = "Rooms", skip(state), err)]
pub async fn rooms(Extension(state): Extension<State>) -> Result<Json<Vec<Room>>, ServerError> {
    Ok(Json(state.campus.load().await?.rooms))
}

/// The schedule stored under `tag`, or an empty list if there is none.
#[tracing::instrument(name = "Schedules", skip(state), err)]
pub async fn schedules(
    Extension(state): Extension<State>,
    Path(tag): Path<String>,
) -> Result<Json<Value>, ServerError> {
    let mut campus = state.campus.load().await?;
    Ok(Json(
        campus
            .schedules
            .remove(&tag)
            .unwrap_or_else(|| Value::Array(Vec::new())),
    ))
}

#[tracing::instrument(name = "BuildingJson", skip(state), err)]
pub async fn building(
    Extension(state): Extension<State>,
    Path(bid): Path<String>,
) -> Result<Json<Resolution>, ServerError> {
    Ok(Json(state.resolve(&bid).await?))
}
