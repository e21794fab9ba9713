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

//! Loading the campus dataset and looking buildings up in it.

pub mod resolve;

pub use resolve::resolve;
pub use resolve::Resolution;

use crate::config::server::Config;
use crate::types::campus::Campus;
use async_trait::async_trait;
use std::io;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("campus data not found at {0:?}")]
    NotFound(PathBuf),
    #[error("reading campus data at {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("parsing campus data at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Somewhere a fresh copy of the campus dataset can be loaded from.
#[async_trait]
pub trait CampusSource: Send + Sync {
    async fn load(&self) -> Result<Campus, LoadError>;
}

/// The campus dataset on disk. Read again on every `load`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampusFile {
    path: PathBuf,
}

impl CampusFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.data_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CampusSource for CampusFile {
    #[tracing::instrument(name = "LoadCampus", skip(self), fields(path = ?self.path), err)]
    async fn load(&self) -> Result<Campus, LoadError> {
        let content = tokio::fs::read(&self.path)
            .await
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => LoadError::NotFound(self.path.clone()),
                _ => LoadError::Io {
                    path: self.path.clone(),
                    source: err,
                },
            })?;
        serde_json::from_slice(&content).map_err(|source| LoadError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// A dataset held in memory, handed out as a fresh copy on every `load`.
#[async_trait]
impl CampusSource for Campus {
    async fn load(&self) -> Result<Campus, LoadError> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn path_from_config() {
        let config = Config::default();
        assert_eq!(
            CampusFile::from_config(&config).path(),
            Path::new("static/data/campus.json")
        );
    }

    #[tokio::test]
    async fn loads_file() {
        let file = write_file(
            r#"{
                "buildings": [{"id": "A1", "name": "Main Hall"}],
                "rooms": [{"parent": "A1", "type": "room", "name": "101"}],
                "schedules": {"A1-101": []}
            }"#,
        );
        let campus = CampusFile::new(file.path()).load().await.unwrap();
        assert_eq!(campus.buildings.len(), 1);
        assert_eq!(campus.buildings[0].name(), "Main Hall");
        assert_eq!(campus.rooms.len(), 1);
        assert_eq!(campus.schedules.len(), 1);
    }

    #[tokio::test]
    async fn rereads_on_every_load() {
        let file = write_file(r#"{"buildings": [{"id": "A1"}]}"#);
        let source = CampusFile::new(file.path());
        assert_eq!(source.load().await.unwrap().buildings.len(), 1);

        std::fs::write(file.path(), r#"{"buildings": [{"id": "A1"}, {"id": "B2"}]}"#).unwrap();
        assert_eq!(source.load().await.unwrap().buildings.len(), 2);
    }

    #[tokio::test]
    async fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("campus.json");
        match CampusFile::new(&path).load().await {
            Err(LoadError::NotFound(missing)) => assert_eq!(missing, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_file() {
        let file = write_file(r#"{"buildings": [{"id": "A1"}"#);
        assert!(matches!(
            CampusFile::new(file.path()).load().await,
            Err(LoadError::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn in_memory_source() {
        let campus: Campus =
            serde_json::from_str(r#"{"buildings": [{"id": "A1"}], "rooms": []}"#).unwrap();
        assert_eq!(campus.load().await.unwrap(), campus);
    }
}
