use crate::dtos::{CreateImageRequest, ImageResponse};
use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Upload cap for edit requests. Bytes are buffered fully in memory before
/// the provider call.
const MAX_IMAGE_BYTES: usize = 20 * 1024 * 1024;

fn encode_data_url(image_bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(image_bytes))
}

pub async fn create_image(
    State(state): State<AppState>,
    Json(request): Json<CreateImageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let prompt = request.prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Prompt is required to generate an image"
        )));
    }

    tracing::info!(
        size = %request.size,
        prompt_len = prompt.len(),
        "Image generation requested"
    );

    let image_bytes = state
        .provider
        .create_image(prompt, &request.size)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Image generation failed");
            AppError::ProviderFailure(format!("Failed to generate image: {}", e))
        })?;

    Ok(Json(ImageResponse {
        image: encode_data_url(&image_bytes),
    }))
}

pub async fn edit_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut prompt: Option<String> = None;
    let mut image: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("prompt") => {
                let value = field.text().await.map_err(|e| {
                    AppError::BadRequest(anyhow::anyhow!("Failed to read prompt field: {}", e))
                })?;
                prompt = Some(value);
            }
            Some("image") => {
                // Read the entire file into memory; the provider call needs
                // the full image anyway.
                let data = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(anyhow::anyhow!("Failed to read file bytes: {}", e))
                })?;
                if data.len() > MAX_IMAGE_BYTES {
                    return Err(AppError::BadRequest(anyhow::anyhow!(
                        "Image too large (max 20MB)"
                    )));
                }
                image = Some(data.to_vec());
            }
            _ => {}
        }
    }

    let prompt = prompt.unwrap_or_default();
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Prompt is required to edit an image"
        )));
    }

    let image = image.ok_or_else(|| {
        AppError::BadRequest(anyhow::anyhow!("Image file is required to edit an image"))
    })?;

    tracing::info!(
        image_len = image.len(),
        prompt_len = prompt.len(),
        "Image edit requested"
    );

    let edited = state.provider.edit_image(prompt, &image).await.map_err(|e| {
        tracing::error!(error = %e, "Image edit failed");
        AppError::ProviderFailure(format!("Failed to edit image: {}", e))
    })?;

    Ok(Json(ImageResponse {
        image: encode_data_url(&edited),
    }))
}
