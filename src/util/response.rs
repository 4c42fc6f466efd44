use axum::Json;
use serde::Serialize;

/// Uniform success envelope: `{ "success": true, "data": … }`.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub data: T,
}

pub fn success<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope { success: true, data })
}
