//! Mock provider implementation for testing.

use super::{ImageProvider, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;

/// A single recorded provider invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    Create { prompt: String, size: String },
    Edit { prompt: String, image: Vec<u8> },
}

enum Behavior {
    Fixed(Vec<u8>),
    EchoPrompt,
    Fail(String),
}

/// Mock image provider that records every call for assertions.
pub struct MockImageProvider {
    behavior: Behavior,
    calls: Mutex<Vec<ProviderCall>>,
}

impl MockImageProvider {
    /// Provider that always returns the given bytes.
    pub fn returning(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            behavior: Behavior::Fixed(bytes.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Provider that returns the prompt itself as bytes, so a response can be
    /// matched back to its request.
    pub fn echoing() -> Self {
        Self {
            behavior: Behavior::EchoPrompt,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Provider that always fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Fail(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls observed so far, in order.
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }

    fn respond(&self, prompt: &str) -> Result<Vec<u8>, ProviderError> {
        match &self.behavior {
            Behavior::Fixed(bytes) => Ok(bytes.clone()),
            Behavior::EchoPrompt => Ok(prompt.as_bytes().to_vec()),
            Behavior::Fail(message) => Err(ProviderError::Api(message.clone())),
        }
    }
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    async fn create_image(&self, prompt: &str, size: &str) -> Result<Vec<u8>, ProviderError> {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .push(ProviderCall::Create {
                prompt: prompt.to_string(),
                size: size.to_string(),
            });
        self.respond(prompt)
    }

    async fn edit_image(&self, prompt: &str, image: &[u8]) -> Result<Vec<u8>, ProviderError> {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .push(ProviderCall::Edit {
                prompt: prompt.to_string(),
                image: image.to_vec(),
            });
        self.respond(prompt)
    }
}
