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

mod internal;

pub use internal::Error as InternalError;

use crate::campus::LoadError;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, thiserror::Error)]
#[serde(
    tag = "error",
    content = "error_description",
    rename_all = "snake_case"
)]
pub enum ServerError {
    #[error("internal error: {0}")]
    Internal(#[from] InternalError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        use http::StatusCode;
        let status = match self {
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let mut response = axum::Json(self).into_response();
        *response.status_mut() = status;

        response
    }
}

impl From<askama::Error> for InternalError {
    fn from(e: askama::Error) -> Self {
        Self::Template(e.to_string())
    }
}

impl From<askama::Error> for ServerError {
    fn from(e: askama::Error) -> Self {
        Self::Internal(e.into())
    }
}

impl From<LoadError> for InternalError {
    fn from(e: LoadError) -> Self {
        Self::Load(e.to_string())
    }
}

impl From<LoadError> for ServerError {
    fn from(e: LoadError) -> Self {
        Self::Internal(e.into())
    }
}
