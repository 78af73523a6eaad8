use std::time::Duration;

pub const PATH_DEVICE_STATE: &str = "/api/device/state";
pub const PATH_LIGHT_STATE: &str = "/api/light/state";
pub const PATH_LIGHT_SET: &str = "/api/light/set";

/// Device-side smoothing applied to every brightness change.
pub const DEFAULT_FADE_SPEED: u16 = 213;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub fn device_url(host: &str, path: &str) -> String {
    format!("http://{}{}", host, path)
}
