use serde_json::json;

use crate::api::device_client::DeviceClient;
use crate::api::session::{build_http_client, Session};
use crate::cli::output::{print_json, print_snapshots};
use crate::config::{PlatformConfig, RuntimeConfig};
use crate::error::AppError;
use crate::models::color::ColorValue;
use crate::models::light::Light;
use crate::platform::setup_platform;

/// What to do to every configured light.
pub enum LightAction {
    Status,
    On(Option<u8>),
    Off,
}

pub async fn handle(
    action: LightAction,
    platform: &PlatformConfig,
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    let session = shared_session()?;
    let mut lights = setup_platform(platform, session).await?;

    for light in lights.iter_mut() {
        apply(light, &action).await?;
    }

    let snapshots: Vec<_> = lights.iter().map(Light::snapshot).collect();
    print_snapshots(&snapshots, &config.output_mode)
}

async fn apply(light: &mut Light, action: &LightAction) -> Result<(), AppError> {
    match action {
        LightAction::Status => {}
        LightAction::On(brightness) => light.turn_on(*brightness).await?,
        LightAction::Off => light.turn_off().await?,
    }
    Ok(())
}

/// Raw `setParams` passthrough; skips the setup probe.
pub async fn handle_color(
    hex: &str,
    fade_speed: u16,
    platform: &PlatformConfig,
) -> Result<(), AppError> {
    let color = hex
        .parse::<ColorValue>()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;
    let session = shared_session()?;

    for device in &platform.devices {
        let mut client =
            DeviceClient::new(&device.host, device.timeout, Session::shared(session.clone()));
        let response = client.set_params(color, fade_speed).await?;
        print_json(&json!({"host": device.host, "light": response.light}));
    }
    Ok(())
}

pub fn shared_session() -> Result<reqwest::Client, AppError> {
    Ok(build_http_client()?)
}
