use std::time::Duration;

use tokio::sync::mpsc;

use crate::cli::light::shared_session;
use crate::cli::output::print_json_line;
use crate::config::PlatformConfig;
use crate::error::AppError;
use crate::platform::{setup_platform, watch};

pub async fn handle(platform: &PlatformConfig) -> Result<(), AppError> {
    let session = shared_session()?;
    let lights = setup_platform(platform, session).await?;

    for light in &lights {
        print_json_line(&serde_json::to_value(light.snapshot())?);
    }

    let (tx, mut rx) = mpsc::channel(lights.len().max(1) * 4);
    let scheduler = tokio::spawn(watch(lights, platform.scan_interval, tx));

    tracing::debug!("polling every {:?}", platform.scan_interval);

    loop {
        tokio::select! {
            report = rx.recv() => match report {
                Some(report) => print_json_line(&serde_json::to_value(&report)?),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Stopping watch");
                break;
            }
        }
    }

    // Dropping the receiver ends every poll loop.
    drop(rx);
    let _ = tokio::time::timeout(Duration::from_secs(1), scheduler).await;
    Ok(())
}
