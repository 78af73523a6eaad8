use std::time::Duration;

use crate::api::paths::DEFAULT_TIMEOUT;
use crate::models::light::DEFAULT_BRIGHTNESS;

/// Poll cadence used when none is configured.
pub const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Table,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub output_mode: OutputMode,
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    pub host: String,
    pub name: Option<String>,
    pub timeout: Duration,
}

impl DeviceConfig {
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
            name: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    pub devices: Vec<DeviceConfig>,
    pub scan_interval: Duration,
    pub default_brightness: u8,
}

impl PlatformConfig {
    /// One device per host, all sharing the same timeout.
    ///
    /// A display name only makes sense for a single device, so it is
    /// rejected when more than one host is given.
    pub fn from_hosts(
        hosts: &[String],
        name: Option<String>,
        timeout: Duration,
    ) -> Result<Self, crate::error::AppError> {
        if hosts.is_empty() {
            return Err(crate::error::AppError::InvalidInput(
                "At least one host is required".into(),
            ));
        }
        if name.is_some() && hosts.len() > 1 {
            return Err(crate::error::AppError::InvalidInput(
                "--name can only be used with a single host".into(),
            ));
        }

        let devices = hosts
            .iter()
            .map(|host| DeviceConfig {
                host: host.trim().to_string(),
                name: name.clone(),
                timeout,
            })
            .collect();

        Ok(Self {
            devices,
            ..Self::default()
        })
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            devices: Vec::new(),
            scan_interval: DEFAULT_SCAN_INTERVAL,
            default_brightness: DEFAULT_BRIGHTNESS,
        }
    }
}
