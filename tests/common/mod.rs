#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DEVICE_ID: &str = "5c0f2a3b4d5e";

pub fn host(server: &MockServer) -> String {
    server.address().to_string()
}

pub fn status_body(id: &str, name: &str) -> Value {
    json!({
        "device": {
            "deviceName": name,
            "type": "wLightBoxS",
            "fv": "0.924",
            "hv": "0.2",
            "id": id,
            "apiLevel": "20180718",
            "ip": "192.168.1.40"
        }
    })
}

pub fn light_body(color: &str) -> Value {
    json!({"light": {"desiredColor": color, "currentColor": color, "fadeSpeed": 213}})
}

pub async fn mount_status(server: &MockServer, id: &str, name: &str) {
    Mock::given(method("GET"))
        .and(path("/api/device/state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body(id, name)))
        .mount(server)
        .await;
}

pub async fn mount_state(server: &MockServer, color: &str) {
    Mock::given(method("GET"))
        .and(path("/api/light/state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(light_body(color)))
        .mount(server)
        .await;
}

/// Status and light endpoints for a healthy device showing `color`.
pub async fn mount_device(server: &MockServer, color: &str) {
    mount_status(server, DEVICE_ID, "Desk lamp").await;
    mount_state(server, color).await;
}

/// Accept exactly `times` set requests for `color` with the default fade speed.
pub async fn expect_set(server: &MockServer, color: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path("/api/light/set"))
        .and(body_json(json!({"light": {"desiredColor": color, "fadeSpeed": 213}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(light_body(color)))
        .expect(times)
        .mount(server)
        .await;
}

/// A device that answers every request with garbage.
pub async fn mount_broken(server: &MockServer) {
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(server)
        .await;
}
