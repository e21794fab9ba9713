pub mod defaults;
pub mod server;

use regex::Regex;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    env::{self, VarError},
    io::{self, Write},
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::Level;

pub trait Config: DeserializeOwned + Serialize {
    const DEFAULT_TOML: &'static str;
    const DEFAULT_FILE: &'static str;

    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    /// Writes the default configuration to `path`, creating missing parent directories.
    fn write_defaults(path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::File::create(path)?;
        file.write_all(Self::DEFAULT_TOML.as_bytes())?;
        Ok(())
    }

    fn parse(s: &str) -> Result<Self, Error> {
        let s = substitute_env(s)?;
        let config: Self = toml::from_str(&s)?;
        config.validate().map_err(Error::Validation)?;

        Ok(config)
    }

    fn read(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    fn default_path() -> PathBuf {
        xdg::BaseDirectories::with_prefix("campusmap")
            .map(|dirs| dirs.get_config_home())
            .unwrap_or_default()
            .join(Self::DEFAULT_FILE)
    }
}

/// Replaces every `${NAME}` in `s` with the value of the environment variable `NAME`.
fn substitute_env(s: &str) -> Result<String, Error> {
    let re = Regex::new(r"\$\{([a-zA-Z_]+)\}")?;
    let mut result = String::with_capacity(s.len());
    let mut last = 0;
    for caps in re.captures_iter(s) {
        let (whole, name) = match (caps.get(0), caps.get(1)) {
            (Some(whole), Some(name)) => (whole, name),
            _ => continue,
        };
        let value = match env::var(name.as_str()) {
            Ok(value) => value,
            Err(VarError::NotPresent) => {
                return Err(Error::Environment {
                    name: name.as_str().to_string(),
                    position: name.start(),
                    reason: "is not defined",
                })
            }
            Err(VarError::NotUnicode(_)) => {
                return Err(Error::Environment {
                    name: name.as_str().to_string(),
                    position: name.start(),
                    reason: "is not valid unicode",
                })
            }
        };
        result.push_str(&s[last..whole.start()]);
        result.push_str(&value);
        last = whole.end();
    }
    result.push_str(&s[last..]);
    Ok(result)
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    IO(#[from] io::Error),
    #[error("toml deserialize: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
    #[error("environment variable named {name} from configuration file at {position} {reason}")]
    Environment {
        name: String,
        position: usize,
        reason: &'static str,
    },
    #[error("pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("validation: {0}")]
    Validation(String),
}

pub fn init_logging(hide_timestamp: bool) {
    const LOG_ENV: &str = "CAMPUSMAP_LOG";

    let env_filter = match env::var(LOG_ENV) {
        Ok(env) => env,
        Err(VarError::NotPresent) => "info".to_string(),
        Err(VarError::NotUnicode(_)) => panic!(
            "{} environment variable is not valid unicode and can't be read",
            LOG_ENV
        ),
    };
    let level = Level::from_str(&env_filter)
        .unwrap_or_else(|err| panic!("invalid `{}` environment variable {}", LOG_ENV, err));

    if hide_timestamp {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .without_time()
            .init()
    } else {
        tracing_subscriber::fmt().with_max_level(level).init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_defined_variables() {
        std::env::set_var("CAMPUSMAP_TEST_ROOT", "/srv/campus");
        let substituted =
            substitute_env("static-root = \"${CAMPUSMAP_TEST_ROOT}/static\"").unwrap();
        assert_eq!(substituted, "static-root = \"/srv/campus/static\"");
    }

    #[test]
    fn leaves_plain_text_alone() {
        let input = "[network]\nport = 5000\n";
        assert_eq!(substitute_env(input).unwrap(), input);
    }

    #[test]
    fn undefined_variable_is_an_error() {
        std::env::remove_var("CAMPUSMAP_TEST_UNDEFINED");
        let err = substitute_env("static-root = \"${CAMPUSMAP_TEST_UNDEFINED}\"").unwrap_err();
        match err {
            Error::Environment { name, position, .. } => {
                assert_eq!(name, "CAMPUSMAP_TEST_UNDEFINED");
                assert_eq!(position, 17);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
