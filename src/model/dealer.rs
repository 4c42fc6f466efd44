use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Country wildcard: a dealer with this value passes every portal gate.
pub const COUNTRY_ALL: &str = "All";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Dealer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Dealer shape handed back to the portal client after login. The password
/// hash never leaves the service layer.
#[derive(Debug, Clone, Serialize)]
pub struct DealerSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub country: String,
}

impl From<&Dealer> for DealerSummary {
    fn from(dealer: &Dealer) -> Self {
        DealerSummary {
            id: dealer.id,
            name: dealer.name.clone(),
            email: dealer.email.clone(),
            country: dealer.country.clone(),
        }
    }
}
