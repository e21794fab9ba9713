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

use axum_server::tls_rustls::RustlsConfig;
use campusmap::config::server::Config;
use campusmap::config::Config as _;
use campusmap::config::Error as ConfigError;
use std::env;
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::select;
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    const HIDE_TIMESTAMP_ENV: &str = "CAMPUSMAP_HIDE_TIMESTAMP";

    campusmap::config::init_logging(env::var_os(HIDE_TIMESTAMP_ENV).is_some());
    let config_path = env::var("CAMPUSMAP_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Config::default_path());

    debug!("Config path: {:?}", config_path);

    let config = match Config::read(&config_path) {
        Ok(config) => config,
        Err(ConfigError::IO(err)) if err.kind() == io::ErrorKind::NotFound => {
            info!("Config file not found at {:?}, writing defaults", config_path);
            Config::write_defaults(&config_path)?;
            Config::read(&config_path)?
        }
        Err(err) => {
            error!("Config error: {}", err);
            return Err(err.into());
        }
    };
    debug!("Config: {:#?}", config);

    let data_path = config.data_path();
    if !data_path.exists() {
        warn!(
            "Campus data not found at {:?}, building pages will fail until it is provided",
            data_path
        );
    }

    let state = campusmap::State::new(config);

    let address = SocketAddr::new(state.config.network.address, state.config.network.port);

    let fut = axum_server::bind(address).serve(campusmap::app(state.clone()).into_make_service());
    info!("Starting server at {}", address);
    if let Some(tls) = &state.config.tls {
        let tls_address = SocketAddr::new(tls.address, tls.port);
        let tls_config = RustlsConfig::from_pem_file(&tls.certificate, &tls.private_key).await?;
        let tls_fut = axum_server::bind_rustls(tls_address, tls_config)
            .serve(campusmap::app(state.clone()).into_make_service());
        info!("Starting TLS server at {}", tls_address);

        select! {
            val = fut => val?,
            val = tls_fut => val?
        };
    } else {
        fut.await?;
    }

    Ok(())
}
