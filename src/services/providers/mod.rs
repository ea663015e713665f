//! Image provider abstractions and implementations.
//!
//! This module provides a trait-based abstraction for image generation
//! backends, allowing easy swapping between the real provider and a mock.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
///
/// All variants map to the same generic 500 at the HTTP boundary; the
/// distinction exists for logs only.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    #[error("{0}")]
    Api(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Trait for image generation backends.
///
/// Both operations return raw PNG bytes; the HTTP layer owns the data-URL
/// encoding.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Generate an image from a text prompt at the requested size.
    async fn create_image(&self, prompt: &str, size: &str) -> Result<Vec<u8>, ProviderError>;

    /// Edit an existing image according to a text prompt.
    async fn edit_image(&self, prompt: &str, image: &[u8]) -> Result<Vec<u8>, ProviderError>;
}
