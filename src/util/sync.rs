//! Best-effort cache-invalidation pings. After a catalog mutation each
//! configured peer URL gets a fire-and-forget GET hinting which table
//! changed. Failures are logged and swallowed; the primary response never
//! waits on these calls.

use crate::config::SyncConfig;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct SyncNotifier {
    client: reqwest::Client,
    targets: Vec<String>,
}

impl SyncNotifier {
    pub fn new(config: SyncConfig) -> Self {
        SyncNotifier {
            client: reqwest::Client::new(),
            targets: config.ping_urls,
        }
    }

    pub fn disabled() -> Self {
        SyncNotifier {
            client: reqwest::Client::new(),
            targets: Vec::new(),
        }
    }

    /// Hint peers that `table` changed. Returns immediately.
    pub fn notify(&self, table: &str) {
        for target in &self.targets {
            let url = format!("{}?table={}", target, table);
            let client = self.client.clone();
            let table = table.to_string();
            tokio::spawn(async move {
                match client.get(&url).send().await {
                    Ok(response) => {
                        debug!("Sync ping for '{}' answered {}", table, response.status())
                    }
                    Err(e) => warn!("Sync ping for '{}' failed: {}", table, e),
                }
            });
        }
    }
}
