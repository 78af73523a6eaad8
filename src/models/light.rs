use serde::Serialize;

use crate::api::device_client::DeviceClient;
use crate::error::{AppError, ConnectionError};
use crate::models::color::ColorValue;
use crate::models::device_status::DeviceIdentity;

pub const DEFAULT_BRIGHTNESS: u8 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// No probe has succeeded yet.
    Unknown,
    Available,
    Unavailable,
}

/// What a single [`Light::update`] did to availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PollOutcome {
    /// Device answered and was already available.
    Refreshed,
    /// Device answered after being unavailable.
    Restored,
    /// Device stopped answering.
    Lost,
    /// Device is still not answering.
    StillUnavailable,
}

impl PollOutcome {
    pub fn is_transition(&self) -> bool {
        matches!(self, PollOutcome::Restored | PollOutcome::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LightState {
    pub availability: Availability,
    pub brightness: u8,
    pub is_on: bool,
}

impl LightState {
    pub fn available(&self) -> bool {
        self.availability == Availability::Available
    }

    fn apply(&mut self, color: ColorValue) {
        self.brightness = color.level();
        self.is_on = !color.is_off();
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self {
            availability: Availability::Unknown,
            brightness: 0,
            is_on: false,
        }
    }
}

/// Serializable view of a light, as handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightSnapshot {
    pub unique_id: String,
    pub name: String,
    pub host: String,
    pub device_type: String,
    pub available: bool,
    pub is_on: bool,
    pub brightness: u8,
}

/// A dimmable light entity backed by one controller.
///
/// Holds the last state read from (or written to) the device. A failed poll
/// only flips availability; brightness keeps its last observed value.
#[derive(Debug)]
pub struct Light {
    client: DeviceClient,
    identity: DeviceIdentity,
    name: Option<String>,
    state: LightState,
    /// Level a bare `turn_on` goes back to. Never zero.
    last_level: u8,
}

impl Light {
    /// Probe the device and build the entity.
    ///
    /// Any connection failure here is fatal: no entity comes back and the
    /// error names the host so the caller can retry setup later.
    pub async fn setup(
        mut client: DeviceClient,
        name: Option<String>,
        default_brightness: u8,
    ) -> Result<Self, AppError> {
        let host = client.host().to_string();
        let probe = async {
            let status = client.get_status().await?;
            let state = client.get_state().await?;
            Ok::<_, ConnectionError>((status, state))
        }
        .await;

        let (status, reading) = match probe {
            Ok(probe) => probe,
            Err(e) => {
                tracing::error!(host = %host, "wLightBoxS setup failed: {}", e);
                client.close();
                return Err(AppError::not_ready(&host, e));
            }
        };

        let mut state = LightState::default();
        state.apply(reading.desired_color());
        state.availability = Availability::Available;

        let last_level = if state.brightness > 0 {
            state.brightness
        } else {
            default_brightness.max(1)
        };

        tracing::debug!(
            host = %host,
            id = %status.device.id,
            "wLightBoxS ready at brightness {}",
            state.brightness
        );

        Ok(Self {
            client,
            identity: status.device,
            name,
            state,
            last_level,
        })
    }

    pub fn unique_id(&self) -> &str {
        self.identity.id()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.identity.name())
    }

    pub fn host(&self) -> &str {
        self.client.host()
    }

    pub fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    pub fn device_type(&self) -> &str {
        self.identity.device_type()
    }

    pub fn state(&self) -> LightState {
        self.state
    }

    pub fn available(&self) -> bool {
        self.state.available()
    }

    pub fn is_on(&self) -> bool {
        self.state.is_on
    }

    pub fn brightness(&self) -> u8 {
        self.state.brightness
    }

    /// Level a `turn_on(None)` would send.
    pub fn last_level(&self) -> u8 {
        self.last_level
    }

    pub fn snapshot(&self) -> LightSnapshot {
        LightSnapshot {
            unique_id: self.unique_id().to_string(),
            name: self.name().to_string(),
            host: self.host().to_string(),
            device_type: self.device_type().to_string(),
            available: self.available(),
            is_on: self.is_on(),
            brightness: self.brightness(),
        }
    }

    /// Poll the device once and reconcile local state.
    ///
    /// Never fails: connection errors turn into [`PollOutcome::Lost`] or
    /// [`PollOutcome::StillUnavailable`]. The warning for each availability
    /// edge is logged exactly once.
    pub async fn update(&mut self) -> PollOutcome {
        match self.poll().await {
            Ok(color) => {
                self.state.apply(color);
                if !color.is_off() {
                    self.last_level = color.level();
                }
                let was_unavailable = self.state.availability == Availability::Unavailable;
                self.state.availability = Availability::Available;
                if was_unavailable {
                    tracing::warn!(host = %self.host(), "wLightBoxS control box connection restored");
                    PollOutcome::Restored
                } else {
                    PollOutcome::Refreshed
                }
            }
            Err(e) => {
                if self.state.availability == Availability::Unavailable {
                    tracing::debug!(host = %self.host(), "wLightBoxS still unreachable: {}", e);
                    PollOutcome::StillUnavailable
                } else {
                    tracing::warn!(host = %self.host(), "wLightBoxS control box connection lost: {}", e);
                    self.state.availability = Availability::Unavailable;
                    PollOutcome::Lost
                }
            }
        }
    }

    async fn poll(&mut self) -> Result<ColorValue, ConnectionError> {
        self.client.get_status().await?;
        let reading = self.client.get_state().await?;
        Ok(reading.desired_color())
    }

    /// Set brightness, or go back to the last non-zero level when `None`.
    pub async fn turn_on(&mut self, brightness: Option<u8>) -> Result<(), ConnectionError> {
        let level = brightness.unwrap_or(self.last_level);
        self.client.set_brightness(level).await?;

        self.state.apply(ColorValue::new(level));
        if level > 0 {
            self.last_level = level;
        }
        Ok(())
    }

    /// Send level 0. The remembered level for the next `turn_on(None)` stays.
    pub async fn turn_off(&mut self) -> Result<(), ConnectionError> {
        self.client.set_brightness(0).await?;
        self.state.apply(ColorValue::OFF);
        Ok(())
    }

    /// Release the HTTP session if this light's client created it.
    pub fn close(&mut self) {
        self.client.close();
    }
}
