use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::paths::{
    device_url, DEFAULT_FADE_SPEED, DEFAULT_TIMEOUT, PATH_DEVICE_STATE, PATH_LIGHT_SET,
    PATH_LIGHT_STATE,
};
use super::session::Session;
use crate::error::ConnectionError;
use crate::models::color::ColorValue;
use crate::models::device_status::DeviceStatus;
use crate::models::light_state::{LightStateResponse, SetLightRequest};

/// HTTP client for a single wLightBoxS controller.
///
/// Every call is attempted once. Calls take `&mut self`, so one client never
/// has two requests in flight.
#[derive(Debug)]
pub struct DeviceClient {
    host: String,
    timeout: Duration,
    session: Session,
}

impl DeviceClient {
    pub fn new(host: &str, timeout: Duration, session: Session) -> Self {
        Self {
            host: host.to_string(),
            timeout,
            session,
        }
    }

    /// Client that builds and owns its HTTP session on first use.
    pub fn with_own_session(host: &str) -> Self {
        Self::new(host, DEFAULT_TIMEOUT, Session::lazy())
    }

    /// Client borrowing a session that other clients may share.
    pub fn with_shared_session(host: &str, client: reqwest::Client) -> Self {
        Self::new(host, DEFAULT_TIMEOUT, Session::shared(client))
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn get_status(&mut self) -> Result<DeviceStatus, ConnectionError> {
        self.get_json(PATH_DEVICE_STATE).await
    }

    pub async fn get_state(&mut self) -> Result<LightStateResponse, ConnectionError> {
        self.get_json(PATH_LIGHT_STATE).await
    }

    pub async fn set_params(
        &mut self,
        desired_color: ColorValue,
        fade_speed: u16,
    ) -> Result<LightStateResponse, ConnectionError> {
        let body = SetLightRequest::new(desired_color, fade_speed);
        self.post_json(PATH_LIGHT_SET, &body).await
    }

    pub async fn set_brightness(&mut self, level: u8) -> Result<LightStateResponse, ConnectionError> {
        self.set_params(ColorValue::new(level), DEFAULT_FADE_SPEED)
            .await
    }

    /// Drops the session if this client created it; a shared one is kept.
    pub fn close(&mut self) {
        self.session.close();
    }

    async fn get_json<T: DeserializeOwned>(&mut self, path: &str) -> Result<T, ConnectionError> {
        let url = device_url(&self.host, path);
        tracing::debug!("GET {}", url);

        let request = self
            .session
            .client()
            .map_err(|e| ConnectionError::transport(&url, e))?
            .get(&url)
            .timeout(self.timeout);

        read_json(&url, request).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &mut self,
        path: &str,
        body: &B,
    ) -> Result<T, ConnectionError> {
        let url = device_url(&self.host, path);
        let body_json = serde_json::to_string(body).map_err(|e| ConnectionError::decode(&url, e))?;
        tracing::debug!("POST {} body: {}", url, body_json);

        let request = self
            .session
            .client()
            .map_err(|e| ConnectionError::transport(&url, e))?
            .post(&url)
            .timeout(self.timeout)
            .header("Content-Type", "application/json")
            .body(body_json);

        read_json(&url, request).await
    }
}

async fn read_json<T: DeserializeOwned>(
    url: &str,
    request: reqwest::RequestBuilder,
) -> Result<T, ConnectionError> {
    let response = request
        .send()
        .await
        .map_err(|e| ConnectionError::transport(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ConnectionError::Status {
            url: url.to_string(),
            status,
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| ConnectionError::transport(url, e))?;
    tracing::debug!("{} response: {}", url, text);

    serde_json::from_str(&text).map_err(|e| ConnectionError::decode(url, e))
}
