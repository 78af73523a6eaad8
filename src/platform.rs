//! Multi-device setup and the polling scheduler.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::{interval, MissedTickBehavior};

use crate::api::device_client::DeviceClient;
use crate::api::session::Session;
use crate::config::PlatformConfig;
use crate::error::AppError;
use crate::models::light::{Light, LightSnapshot, PollOutcome};

/// Result of one scheduled poll, as sent to the host.
#[derive(Debug, Clone, Serialize)]
pub struct PollReport {
    pub outcome: PollOutcome,
    #[serde(flatten)]
    pub snapshot: LightSnapshot,
}

/// Probe every configured device over one shared session.
///
/// The first device that fails its probe aborts the whole setup; nothing
/// partially built is returned.
pub async fn setup_platform(
    config: &PlatformConfig,
    session: reqwest::Client,
) -> Result<Vec<Light>, AppError> {
    let mut lights = Vec::with_capacity(config.devices.len());

    for device in &config.devices {
        let client = DeviceClient::new(&device.host, device.timeout, Session::shared(session.clone()));
        let light = Light::setup(client, device.name.clone(), config.default_brightness).await?;
        tracing::info!(host = %device.host, id = %light.unique_id(), "Added wLightBoxS '{}'", light.name());
        lights.push(light);
    }

    Ok(lights)
}

/// Poll each light on its own task until the report receiver goes away.
///
/// Every light is owned by exactly one task, so its requests never overlap,
/// and a dead device never delays the others.
pub async fn watch(lights: Vec<Light>, scan_interval: Duration, reports: mpsc::Sender<PollReport>) {
    let mut tasks = JoinSet::new();

    for light in lights {
        tasks.spawn(poll_loop(light, scan_interval, reports.clone()));
    }
    drop(reports);

    while let Some(result) = tasks.join_next().await {
        if let Err(e) = result {
            tracing::error!("Poll task ended abnormally: {}", e);
        }
    }
}

async fn poll_loop(mut light: Light, scan_interval: Duration, reports: mpsc::Sender<PollReport>) {
    let mut ticker = interval(scan_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick fires immediately and setup has just read the device.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = reports.closed() => break,
        }

        let outcome = light.update().await;
        tracing::debug!(host = %light.host(), "poll outcome: {:?}", outcome);

        let report = PollReport {
            outcome,
            snapshot: light.snapshot(),
        };
        if reports.send(report).await.is_err() {
            break;
        }
    }

    light.close();
}
