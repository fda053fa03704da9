//! HTTP client settings.
//!
//! Account calls are small JSON round trips against a single host, so the
//! knobs are limited to timeouts, the idle connection pool, the user agent,
//! response compression and request tracing.

use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Settings used to build the underlying reqwest client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upper bound for a whole request, connect included.
    pub request_timeout: Duration,
    /// Upper bound for establishing the TCP/TLS connection.
    pub connect_timeout: Duration,
    pub pool: PoolConfig,
    pub user_agent: String,
    /// Send `Accept-Encoding: gzip, deflate` and inflate responses.
    pub accept_compressed: bool,
    /// Emit `debug!`/`info!` events for each request and response.
    pub trace_requests: bool,
}

/// Idle connection pool settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub idle_timeout: Duration,
    pub max_idle_per_host: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(90),
            max_idle_per_host: 10,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool: PoolConfig::default(),
            user_agent: crate::USER_AGENT.to_string(),
            accept_compressed: true,
            trace_requests: true,
        }
    }
}

impl ClientConfig {
    /// Start from the defaults.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Reject settings reqwest would accept but that can never complete a call.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.request_timeout.is_zero() {
            return Err(Error::new(ErrorKind::Config(
                "request timeout must be non-zero".to_string(),
            )));
        }
        if self.connect_timeout.is_zero() {
            return Err(Error::new(ErrorKind::Config(
                "connect timeout must be non-zero".to_string(),
            )));
        }
        if self.user_agent.trim().is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "user agent must not be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool.idle_timeout = timeout;
        self
    }

    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.config.pool.max_idle_per_host = max;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn accept_compressed(mut self, enabled: bool) -> Self {
        self.config.accept_compressed = enabled;
        self
    }

    pub fn trace_requests(mut self, enabled: bool) -> Self {
        self.config.trace_requests = enabled;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
