use serde::{Deserialize, Serialize};

fn default_size() -> String {
    "1024x1024".to_string()
}

/// Body for `POST /api/create-image`.
///
/// Both fields may be omitted on the wire. A missing prompt deserializes to
/// an empty string and fails validation in the handler; a missing size falls
/// back to the default.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateImageRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default = "default_size")]
    pub size: String,
}

/// Envelope wrapping every successful image response.
#[derive(Debug, Serialize)]
pub struct ImageResponse {
    /// `data:image/png;base64,<payload>` data URL.
    pub image: String,
}
