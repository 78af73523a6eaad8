/// Failure talking to a device.
///
/// Connect failures, timeouts, unusable statuses and undecodable bodies all
/// land here. Callers react the same way to every variant; the variants only
/// exist so the message says what went wrong.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ConnectionError {
    pub fn transport(url: &str, source: reqwest::Error) -> Self {
        ConnectionError::Transport {
            url: url.to_string(),
            source,
        }
    }

    pub fn decode(url: &str, source: serde_json::Error) -> Self {
        ConnectionError::Decode {
            url: url.to_string(),
            source,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            ConnectionError::Transport { url, .. }
            | ConnectionError::Status { url, .. }
            | ConnectionError::Decode { url, .. } => url,
        }
    }

    /// True when the request was abandoned because the timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ConnectionError::Transport { source, .. } if source.is_timeout())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Device {host} not ready: {source}")]
    NotReady {
        host: String,
        #[source]
        source: ConnectionError,
    },

    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn not_ready(host: &str, source: ConnectionError) -> Self {
        AppError::NotReady {
            host: host.to_string(),
            source,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Connection(_) => 4,
            AppError::NotReady { .. } => 5,
            _ => 1,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::NotReady { .. } => "not_ready",
            AppError::Connection(_) => "connection",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Http(_) => "http",
            AppError::Json(_) => "json",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({
            "error": self.error_type(),
            "message": self.to_string(),
        });
        if let Some(host) = self.host() {
            obj["host"] = serde_json::json!(host);
        }
        obj
    }

    fn host(&self) -> Option<&str> {
        match self {
            AppError::NotReady { host, .. } => Some(host),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bad_json() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("not json").unwrap_err()
    }

    #[test]
    fn test_not_ready_exit_code_and_json() {
        let err = AppError::not_ready(
            "10.0.0.7",
            ConnectionError::decode("http://10.0.0.7/api/device/state", bad_json()),
        );
        assert_eq!(err.exit_code(), 5);
        let json = err.to_json();
        assert_eq!(json["error"], "not_ready");
        assert_eq!(json["host"], "10.0.0.7");
        assert!(json["message"].as_str().unwrap().contains("10.0.0.7"));
    }

    #[test]
    fn test_connection_error_converts() {
        let err: AppError =
            ConnectionError::decode("http://10.0.0.7/api/light/state", bad_json()).into();
        assert_eq!(err.exit_code(), 4);
        assert_eq!(err.error_type(), "connection");
        assert!(err.to_json().get("host").is_none());
    }

    #[test]
    fn test_url_accessor() {
        let err = ConnectionError::Status {
            url: "http://h/api/light/set".into(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.url(), "http://h/api/light/set");
        assert!(!err.is_timeout());
    }
}
