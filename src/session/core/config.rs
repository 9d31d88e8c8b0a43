//! Configuration for the chat session core.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::session::core::errors::{SessionError, SessionResult};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "CHAT_CLONE_";

/// Top-level configuration for a session controller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Response simulator settings.
    pub simulator: SimulatorConfig,
    /// Notification lifetime settings.
    pub notifications: NotificationConfig,
    /// Capacity of the outbound event channel.
    pub event_buffer: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            simulator: SimulatorConfig::default(),
            notifications: NotificationConfig::default(),
            event_buffer: 256,
        }
    }
}

impl SessionConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from defaults overlaid with `CHAT_CLONE_*` variables.
    ///
    /// # Errors
    /// Returns an error if a variable is set but not a valid number, or if the
    /// resulting configuration fails validation.
    pub fn from_env() -> SessionResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an explicit variable source.
    ///
    /// # Errors
    /// Returns an error if a value cannot be parsed or validation fails.
    pub fn from_lookup<F>(lookup: F) -> SessionResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = parse_var::<u64, _>(&lookup, "MIN_DELAY_MS")? {
            config.simulator.min_delay_ms = value;
        }
        if let Some(value) = parse_var::<u64, _>(&lookup, "JITTER_MS")? {
            config.simulator.jitter_ms = value;
        }
        if let Some(value) = parse_var::<u64, _>(&lookup, "INFO_TTL_MS")? {
            config.notifications.info_ttl_ms = value;
        }
        if let Some(value) = parse_var::<u64, _>(&lookup, "ERROR_TTL_MS")? {
            config.notifications.error_ttl_ms = value;
        }
        if let Some(value) = parse_var::<usize, _>(&lookup, "EVENT_BUFFER")? {
            config.event_buffer = value;
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the simulated reply delay window.
    #[must_use]
    pub const fn with_delay(mut self, min_delay_ms: u64, jitter_ms: u64) -> Self {
        self.simulator.min_delay_ms = min_delay_ms;
        self.simulator.jitter_ms = jitter_ms;
        self
    }

    /// Set the notification lifetimes.
    #[must_use]
    pub const fn with_ttls(mut self, info_ttl_ms: u64, error_ttl_ms: u64) -> Self {
        self.notifications.info_ttl_ms = info_ttl_ms;
        self.notifications.error_ttl_ms = error_ttl_ms;
        self
    }

    /// Set the outbound event channel capacity.
    #[must_use]
    pub const fn with_event_buffer(mut self, event_buffer: usize) -> Self {
        self.event_buffer = event_buffer;
        self
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    /// Returns an error if any values are out of range.
    pub fn validate(&self) -> SessionResult<()> {
        if self.simulator.min_delay_ms.checked_add(self.simulator.jitter_ms).is_none() {
            return Err(SessionError::InvalidConfig(
                "simulator.min_delay_ms + simulator.jitter_ms overflows".to_string(),
            ));
        }

        if self.notifications.info_ttl_ms == 0 {
            return Err(SessionError::InvalidConfig(
                "notifications.info_ttl_ms must be > 0".to_string(),
            ));
        }

        if self.notifications.error_ttl_ms == 0 {
            return Err(SessionError::InvalidConfig(
                "notifications.error_ttl_ms must be > 0".to_string(),
            ));
        }

        if self.event_buffer == 0 {
            return Err(SessionError::InvalidConfig(
                "event_buffer must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Delay window of the response simulator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Lower bound of the reply delay (milliseconds).
    pub min_delay_ms: u64,
    /// Width of the random part of the delay (milliseconds, exclusive).
    pub jitter_ms: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 1000,
            jitter_ms: 2000,
        }
    }
}

/// Lifetimes used by callers of the notification scheduler.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// TTL for informational notifications (milliseconds).
    pub info_ttl_ms: u64,
    /// TTL for error notifications (milliseconds).
    pub error_ttl_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            info_ttl_ms: 3000,
            error_ttl_ms: 5000,
        }
    }
}

impl NotificationConfig {
    /// TTL for informational notifications.
    #[must_use]
    pub const fn info_ttl(&self) -> Duration {
        Duration::from_millis(self.info_ttl_ms)
    }

    /// TTL for error notifications.
    #[must_use]
    pub const fn error_ttl(&self) -> Duration {
        Duration::from_millis(self.error_ttl_ms)
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> SessionResult<Option<T>>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let key = format!("{ENV_PREFIX}{name}");
    let Some(raw) = lookup(&key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| SessionError::InvalidConfig(format!("{key} must be a number, got {raw:?}")))
}
