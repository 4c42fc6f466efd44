//! Human-legible identifier generation for quotes, orders and service
//! requests: `QT-20250805-3FA2C1`. Uniqueness comes from the random hex
//! segment; the primary-key constraint backstops the unlikely collision.

use chrono::Utc;
use uuid::Uuid;

const HEX_SEGMENT_LEN: usize = 6;

fn generate(prefix: &str) -> String {
    let date = Utc::now().format("%Y%m%d");
    let segment: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(HEX_SEGMENT_LEN)
        .collect::<String>()
        .to_ascii_uppercase();
    format!("{}-{}-{}", prefix, date, segment)
}

pub fn quote_id() -> String {
    generate("QT")
}

pub fn order_id() -> String {
    generate("ORD")
}

pub fn service_request_id() -> String {
    generate("SR")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_prefixes() {
        assert!(quote_id().starts_with("QT-"));
        assert!(order_id().starts_with("ORD-"));
        assert!(service_request_id().starts_with("SR-"));
    }

    #[test]
    fn test_shape() {
        let id = quote_id();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].len(), 8);
        assert_eq!(parts[2].len(), HEX_SEGMENT_LEN);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_no_collisions_under_expected_load() {
        let ids: HashSet<String> = (0..1000).map(|_| order_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
