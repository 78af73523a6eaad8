use serde::{Deserialize, Serialize};

use super::color::ColorValue;

/// Body of `GET /api/light/state` and of the `POST /api/light/set` reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightStateResponse {
    pub light: LightReading,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightReading {
    pub desired_color: ColorValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_color: Option<ColorValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_speed: Option<u16>,
}

impl LightStateResponse {
    pub fn desired_color(&self) -> ColorValue {
        self.light.desired_color
    }
}

/// Body of `POST /api/light/set`.
#[derive(Debug, Clone, Serialize)]
pub struct SetLightRequest {
    pub light: SetLightParams,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLightParams {
    pub desired_color: ColorValue,
    pub fade_speed: u16,
}

impl SetLightRequest {
    pub fn new(desired_color: ColorValue, fade_speed: u16) -> Self {
        Self {
            light: SetLightParams {
                desired_color,
                fade_speed,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_light_state() {
        let state: LightStateResponse = serde_json::from_value(json!({
            "light": {"desiredColor": "c8", "currentColor": "80", "fadeSpeed": 213}
        }))
        .unwrap();
        assert_eq!(state.desired_color().level(), 200);
        assert_eq!(state.light.current_color, Some(ColorValue::new(0x80)));
        assert_eq!(state.light.fade_speed, Some(213));
    }

    #[test]
    fn test_decode_requires_desired_color() {
        assert!(serde_json::from_value::<LightStateResponse>(json!({"light": {}})).is_err());
        assert!(serde_json::from_value::<LightStateResponse>(json!({"other": {}})).is_err());
    }

    #[test]
    fn test_decode_rejects_bad_hex() {
        let result =
            serde_json::from_value::<LightStateResponse>(json!({"light": {"desiredColor": "xyz"}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_set_request_body() {
        let body = serde_json::to_value(SetLightRequest::new(ColorValue::new(5), 213)).unwrap();
        assert_eq!(
            body,
            json!({"light": {"desiredColor": "05", "fadeSpeed": 213}})
        );
    }
}
