use crate::api::paths::DEFAULT_TIMEOUT;

/// HTTP session used by a [`DeviceClient`](super::device_client::DeviceClient).
///
/// A shared session belongs to whoever passed it in and is never released
/// here. A lazy session is built on first use, belongs to this value alone,
/// and is dropped by [`Session::close`].
#[derive(Debug)]
pub struct Session {
    client: Option<reqwest::Client>,
    externally_owned: bool,
}

pub fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(concat!("wlightbox/", env!("CARGO_PKG_VERSION")))
        .timeout(DEFAULT_TIMEOUT)
        .build()
}

impl Session {
    pub fn shared(client: reqwest::Client) -> Self {
        Self {
            client: Some(client),
            externally_owned: true,
        }
    }

    pub fn lazy() -> Self {
        Self {
            client: None,
            externally_owned: false,
        }
    }

    pub fn is_externally_owned(&self) -> bool {
        self.externally_owned
    }

    pub fn is_open(&self) -> bool {
        self.client.is_some()
    }

    /// Returns the underlying client, building an owned one if none exists yet.
    pub fn client(&mut self) -> Result<&reqwest::Client, reqwest::Error> {
        let client = match self.client.take() {
            Some(client) => client,
            None => build_http_client()?,
        };
        Ok(&*self.client.insert(client))
    }

    /// Releases an owned client. A shared client is left alone. Safe to repeat.
    pub fn close(&mut self) {
        if !self.externally_owned {
            self.client = None;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::lazy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_session_created_on_first_use() {
        let mut session = Session::lazy();
        assert!(!session.is_open());
        session.client().unwrap();
        assert!(session.is_open());
        assert!(!session.is_externally_owned());
    }

    #[test]
    fn test_close_releases_owned_session_repeatedly() {
        let mut session = Session::lazy();
        session.client().unwrap();
        session.close();
        assert!(!session.is_open());
        session.close();
        assert!(!session.is_open());
    }

    #[test]
    fn test_close_keeps_shared_session() {
        let mut session = Session::shared(reqwest::Client::new());
        session.close();
        session.close();
        assert!(session.is_open());
        assert!(session.is_externally_owned());
    }

    #[test]
    fn test_reopen_after_close() {
        let mut session = Session::lazy();
        session.client().unwrap();
        session.close();
        session.client().unwrap();
        assert!(session.is_open());
    }
}
