use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenUrlRequest {
    pub original_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenUrlResponse {
    pub short_url: String,
    pub short_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveUrlResponse {
    pub original_url: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
