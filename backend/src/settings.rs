//! Service settings loaded via OrthoConfig.
//!
//! Values are layered from CLI flags, `USERS_API_*` environment variables and
//! an optional configuration file. `port` carries a loader default so an empty
//! environment still yields settings; the other keys are optional and their
//! accessors fall back to the defaults below.

use std::ffi::OsString;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BASE_PATH: &str = "/users";
const DEFAULT_JSON_LIMIT: usize = 32 * 1024;

/// Failures raised while loading or validating settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The layered sources could not be merged or parsed.
    #[error("failed to load settings: {message}")]
    Load { message: String },
    /// `base_path` is not of the form `/segment[/segment...]`.
    #[error("base path `{value}` must start with '/' and must not end with '/'")]
    InvalidBasePath { value: String },
    /// `json_limit` is zero.
    #[error("json limit must be greater than zero")]
    ZeroJsonLimit,
}

/// Runtime settings for the users service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct ServiceSettings {
    /// Interface to bind.
    pub host: Option<IpAddr>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Path prefix under which the users routes are mounted.
    pub base_path: Option<String>,
    /// Maximum accepted JSON body size in bytes.
    pub json_limit: Option<usize>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_PORT,
            base_path: None,
            json_limit: None,
        }
    }
}

impl ServiceSettings {
    /// Load from the given CLI arguments, the environment and config files,
    /// then validate.
    ///
    /// # Errors
    /// Returns [`SettingsError`] when a source cannot be parsed or a value is
    /// out of range.
    pub fn load_and_validate<I, T>(args: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let settings = Self::load_from_iter(args).map_err(|err| SettingsError::Load {
            message: err.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check every configured value.
    ///
    /// # Errors
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(path) = &self.base_path {
            if !path.starts_with('/') || path.ends_with('/') {
                return Err(SettingsError::InvalidBasePath {
                    value: path.clone(),
                });
            }
        }
        if self.json_limit == Some(0) {
            return Err(SettingsError::ZeroJsonLimit);
        }
        Ok(())
    }

    /// Socket address to bind, from `host` and `port`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(DEFAULT_HOST), self.port)
    }

    /// Return the configured base path, falling back to `/users`.
    pub fn base_path(&self) -> &str {
        self.base_path.as_deref().unwrap_or(DEFAULT_BASE_PATH)
    }

    /// Return the configured body limit, falling back to 32 KiB.
    pub fn json_limit(&self) -> usize {
        self.json_limit.unwrap_or(DEFAULT_JSON_LIMIT)
    }
}
