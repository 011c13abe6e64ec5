use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Body of the HTML form posted to `/short`.
#[derive(Deserialize)]
pub struct ShortenForm {
    #[serde(rename = "longUrl")]
    pub long_url: String,
}

#[derive(Deserialize)]
pub struct CreateUrlRequest {
    pub original_url: String,
}

#[derive(Serialize)]
pub struct CreateUrlResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
}

#[derive(Serialize)]
pub struct GetUrlResponse {
    pub short_code: String,
    pub original_url: String,
    pub created_at: Timestamp,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
