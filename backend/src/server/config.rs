//! HTTP server configuration object and helpers.

use std::net::{SocketAddr, TcpListener};

use crate::settings::ServiceSettings;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) listener: Option<TcpListener>,
    pub(crate) base_path: String,
    pub(crate) json_limit: usize,
    pub(crate) workers: Option<usize>,
    pub(crate) handle_signals: bool,
}

impl ServerConfig {
    /// Construct a configuration binding `bind_addr` with the default users
    /// base path and body limit.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        let defaults = ServiceSettings::default();
        Self {
            bind_addr,
            listener: None,
            base_path: defaults.base_path().to_owned(),
            json_limit: defaults.json_limit(),
            workers: None,
            handle_signals: true,
        }
    }

    /// Construct a configuration from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &ServiceSettings) -> Self {
        Self::new(settings.bind_addr())
            .with_base_path(settings.base_path())
            .with_json_limit(settings.json_limit())
    }

    /// Serve on an already bound listener instead of `bind_addr`.
    #[must_use]
    pub fn with_listener(mut self, listener: TcpListener) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Mount the users routes under `base_path`.
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Cap accepted JSON bodies at `limit` bytes.
    #[must_use]
    pub fn with_json_limit(mut self, limit: usize) -> Self {
        self.json_limit = limit;
        self
    }

    /// Run a fixed number of workers and leave signal handling to the caller.
    #[must_use]
    pub fn embedded(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self.handle_signals = false;
        self
    }

    /// Return the socket address the server will bind to when no listener is
    /// supplied.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the users base path.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}
