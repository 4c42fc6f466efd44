use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, info};

/// Cache-invalidation ping targets. Peer portal instances are hinted with a
/// best-effort GET after catalog mutations; an empty list disables the pings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncConfig {
    pub ping_urls: Vec<String>,
}

impl SyncConfig {
    /// Load from SYNC_PING_URLS, a comma-separated URL list.
    pub fn from_env() -> Self {
        let ping_urls: Vec<String> = env::var("SYNC_PING_URLS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        if ping_urls.is_empty() {
            info!("SYNC_PING_URLS not set, cache-invalidation pings disabled");
        } else {
            debug!("Sync ping targets: {:?}", ping_urls);
        }
        SyncConfig { ping_urls }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_disabled() {
        let config = SyncConfig::default();
        assert!(config.ping_urls.is_empty());
    }
}
