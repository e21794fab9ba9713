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

mod api;
pub mod campus;
pub mod config;
mod pages;
pub mod types;

use axum::extract::Request;
use axum::response::Response;
use axum::routing::get;
use axum::{Extension, Router};
use campus::{CampusFile, CampusSource, LoadError, Resolution};
use config::server::Config;
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, debug_span, Span};

async fn health_check() -> &'static str {
    "I'm alive!"
}

#[derive(Clone)]
pub struct State {
    pub config: Arc<Config>,
    pub campus: Arc<dyn CampusSource>,
}

impl State {
    /// State serving the campus dataset file named by `config`.
    pub fn new(config: Config) -> Self {
        let campus = Arc::new(CampusFile::from_config(&config));
        Self {
            config: Arc::new(config),
            campus,
        }
    }

    /// Loads a fresh copy of the dataset and resolves `bid` in it.
    pub async fn resolve(&self, bid: &str) -> Result<Resolution, LoadError> {
        let data = self.campus.load().await?;
        if self.config.campus.log_building_ids {
            campus::resolve::log_building_ids(&data);
        }
        Ok(campus::resolve(data, bid))
    }
}

pub fn app(state: State) -> Router {
    let static_files = ServeDir::new(&state.config.static_root);

    Router::new()
        .route("/", get(pages::index::handle))
        .route("/building/:bid", get(pages::building::handle))
        .route("/health_check", get(health_check))
        .nest(
            "/api/v1",
            Router::new()
                .route("/rooms/", get(api::rooms))
                .route("/schedules/:tag", get(api::schedules))
                .route("/buildings/:bid", get(api::building)),
        )
        .nest_service("/static", static_files)
        .layer(Extension(state))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request| {
                    debug_span!(
                        "Request",
                        status_code = tracing::field::Empty,
                        ms = tracing::field::Empty,
                        path = tracing::field::display(request.uri().path()),
                    )
                })
                .on_response(|response: &Response, latency: Duration, span: &Span| {
                    span.record("status_code", &tracing::field::display(response.status()));
                    span.record("ms", &tracing::field::display(latency.as_millis()));

                    debug!("response processed")
                }),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::campus::Campus;
    use std::io;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    async fn resolve_logged(log_building_ids: bool) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);

        let mut config = Config::default();
        config.campus.log_building_ids = log_building_ids;
        let campus: Campus =
            serde_json::from_str(r#"{"buildings": [{"id": "A1"}, {"id": "B2"}]}"#).unwrap();
        let state = State {
            config: Arc::new(config),
            campus: Arc::new(campus),
        };
        let resolution = state.resolve("A1").await.unwrap();
        assert!(resolution.building.is_some());

        drop(guard);
        let output = captured.0.lock().unwrap().clone();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn building_ids_logged_when_enabled() {
        let output = resolve_logged(true).await;
        assert!(output.contains(r#"Available buildings: ["A1", "B2"]"#), "{}", output);
    }

    #[tokio::test]
    async fn building_ids_not_logged_when_disabled() {
        let output = resolve_logged(false).await;
        assert!(!output.contains("Available buildings"), "{}", output);
    }
}
