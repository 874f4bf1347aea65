//! Configuration types shared by the portal components.

use std::time::Duration;

/// HTTP client configuration for the outbound search API call.
///
/// The timeout bounds how long a page render can be held up by a slow
/// backend; on expiry the loader degrades to the empty state like any other
/// failure. There is deliberately no retry setting: the landing page issues
/// exactly one backend call per render.
pub struct HttpConfig {
    pub timeout: Duration,
    pub user_agent: &'static str,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "scoap3-portal/0.1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_config_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.user_agent, "scoap3-portal/0.1");
    }
}
