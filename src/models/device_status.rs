use serde::{Deserialize, Serialize};

/// Body of `GET /api/device/state`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub device: DeviceIdentity,
}

/// Who the controller says it is. Read once at setup and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceIdentity {
    pub id: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub device_name: String,
    /// Firmware version.
    #[serde(default, rename = "fv", skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,
    /// Hardware version.
    #[serde(default, rename = "hv", skip_serializing_if = "Option::is_none")]
    pub hardware_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

impl DeviceIdentity {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn device_type(&self) -> &str {
        &self.device_type
    }

    pub fn name(&self) -> &str {
        &self.device_name
    }
}
