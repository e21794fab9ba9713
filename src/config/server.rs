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

use super::defaults;
use serde::Deserialize;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Directory served under `/static`, also the root for the campus dataset
    #[serde(default = "defaults::static_root")]
    pub static_root: PathBuf,
    /// Network configuration
    #[serde(default)]
    pub network: Network,
    /// Campus dataset
    #[serde(default)]
    pub campus: Dataset,
    /// Path to the TLS configuration
    #[serde(default)]
    pub tls: Option<Tls>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Network {
    /// Server address
    #[serde(default = "defaults::server_listen_address")]
    pub address: std::net::IpAddr,
    /// Server port
    #[serde(default = "defaults::server_port")]
    pub port: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Dataset {
    /// Path of the campus JSON document, relative to the static root.
    #[serde(default = "defaults::campus_data_file")]
    pub data_file: PathBuf,
    /// Whether to log the known building IDs at debug level on every building lookup.
    #[serde(default = "defaults::log_building_ids")]
    pub log_building_ids: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Tls {
    /// Server address
    #[serde(default = "defaults::server_listen_address")]
    pub address: std::net::IpAddr,
    /// Server port
    #[serde(default = "defaults::server_port_tls")]
    pub port: u16,
    /// Path to the TLS certificate
    pub certificate: PathBuf,
    /// Path to the TLS private key
    pub private_key: PathBuf,
}

impl super::Config for Config {
    const DEFAULT_TOML: &'static str = include_str!("../../default.toml");

    const DEFAULT_FILE: &'static str = "server.toml";

    fn validate(&self) -> Result<(), String> {
        if self.static_root.as_os_str().is_empty() {
            return Err("static-root must not be empty".to_string());
        }
        if self.campus.data_file.is_absolute() {
            return Err(format!(
                "campus data-file {:?} must be relative to static-root",
                self.campus.data_file
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            static_root: defaults::static_root(),
            network: Network::default(),
            campus: Dataset::default(),
            tls: None,
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        Self {
            address: defaults::server_listen_address(),
            port: defaults::server_port(),
        }
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            data_file: defaults::campus_data_file(),
            log_building_ids: defaults::log_building_ids(),
        }
    }
}

impl Config {
    /// Full path of the campus dataset.
    pub fn data_path(&self) -> PathBuf {
        self.static_root.join(&self.campus.data_file)
    }
}
