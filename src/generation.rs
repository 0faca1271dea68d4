//! Generation Orchestrator
//!
//! Remote-first content and image generation. One backend attempt per request; any
//! failure is replaced by the matching demo table entry, so generation always yields
//! a usable payload tagged with where it came from.

use crate::backend::Backend;
use crate::error::ValidationError;
use crate::fallback;
use crate::post::ImageRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// What to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationKind {
    Content,
    Image,
}

impl fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationKind::Content => write!(f, "content"),
            GenerationKind::Image => write!(f, "image"),
        }
    }
}

/// A validated prompt plus the kind of output wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    prompt: String,
    kind: GenerationKind,
}

impl GenerationRequest {
    /// Rejects prompts that are empty after trimming.
    pub fn new(prompt: impl Into<String>, kind: GenerationKind) -> Result<Self, ValidationError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(ValidationError::EmptyPrompt(kind));
        }
        Ok(Self { prompt, kind })
    }

    pub fn content(prompt: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(prompt, GenerationKind::Content)
    }

    pub fn image(prompt: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(prompt, GenerationKind::Image)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn kind(&self) -> GenerationKind {
        self.kind
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    Remote,
    Fallback,
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceMode::Remote => write!(f, "remote"),
            SourceMode::Fallback => write!(f, "fallback"),
        }
    }
}

/// Generated text or image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Content(String),
    Image(ImageRef),
}

impl Payload {
    pub fn as_content(&self) -> Option<&str> {
        match self {
            Payload::Content(text) => Some(text),
            Payload::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageRef> {
        match self {
            Payload::Image(image) => Some(image),
            Payload::Content(_) => None,
        }
    }
}

/// Outcome of a generation: the backend's payload or the demo substitute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    Remote(Payload),
    Fallback(Payload),
}

impl GenerationResult {
    /// Always true: failures are converted into fallback payloads.
    pub fn success(&self) -> bool {
        true
    }

    pub fn source_mode(&self) -> SourceMode {
        match self {
            GenerationResult::Remote(_) => SourceMode::Remote,
            GenerationResult::Fallback(_) => SourceMode::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GenerationResult::Fallback(_))
    }

    pub fn payload(&self) -> &Payload {
        match self {
            GenerationResult::Remote(payload) | GenerationResult::Fallback(payload) => payload,
        }
    }

    pub fn into_payload(self) -> Payload {
        match self {
            GenerationResult::Remote(payload) | GenerationResult::Fallback(payload) => payload,
        }
    }
}

/// Generation Orchestrator
pub struct Generator {
    backend: Arc<dyn Backend>,
}

impl Generator {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Generate content or an image. Never fails.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        let prompt = request.prompt();
        let remote = match request.kind() {
            GenerationKind::Content => self
                .backend
                .generate_content(prompt)
                .await
                .map(Payload::Content),
            GenerationKind::Image => self
                .backend
                .generate_image(prompt)
                .await
                .map(|bytes| Payload::Image(ImageRef::Bytes(bytes))),
        };

        match remote {
            Ok(payload) => {
                info!(kind = %request.kind(), endpoint = self.backend.endpoint(), "Generated from backend");
                GenerationResult::Remote(payload)
            }
            Err(e) => {
                warn!(
                    kind = %request.kind(),
                    endpoint = self.backend.endpoint(),
                    error = %e,
                    "Backend not available, using demo data"
                );
                GenerationResult::Fallback(Self::fallback_payload(request))
            }
        }
    }

    fn fallback_payload(request: &GenerationRequest) -> Payload {
        match request.kind() {
            GenerationKind::Content => {
                Payload::Content(fallback::lookup_content(request.prompt()).to_string())
            }
            GenerationKind::Image => Payload::Image(ImageRef::Url(
                fallback::lookup_image(request.prompt()).to_string(),
            )),
        }
    }
}
