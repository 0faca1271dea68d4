//! Post drafts, preview rendering, and one-time publishing.

use crate::backend::{Backend, PublishReceipt, PublishRequest};
use crate::error::{ApiError, ValidationError};
use crate::fallback::{self, DemoPost};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where a post image lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Remote image (demo images, user-supplied links)
    Url(String),
    /// Image bytes returned by the backend
    Bytes(Vec<u8>),
    /// Image file on disk
    Path(PathBuf),
}

impl ImageRef {
    /// `http://` and `https://` references are URLs, everything else is a path.
    pub fn parse(reference: &str) -> Self {
        let trimmed = reference.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            ImageRef::Url(trimmed.to_string())
        } else {
            ImageRef::Path(PathBuf::from(trimmed))
        }
    }

    /// Value sent as `image_path`. Backend-generated bytes are referenced by the file
    /// name the backend saved them under.
    pub fn image_path(&self, generated_image_path: &str) -> String {
        match self {
            ImageRef::Url(url) => url.clone(),
            ImageRef::Path(path) => path.display().to_string(),
            ImageRef::Bytes(_) => generated_image_path.to_string(),
        }
    }

    /// True when the reference points at nothing (empty link, path, or body).
    pub fn is_blank(&self) -> bool {
        match self {
            ImageRef::Url(url) => url.trim().is_empty(),
            ImageRef::Path(path) => path.as_os_str().is_empty(),
            ImageRef::Bytes(bytes) => bytes.is_empty(),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ImageRef::Url(url) => url.clone(),
            ImageRef::Path(path) => path.display().to_string(),
            ImageRef::Bytes(bytes) => format!("<generated image, {} bytes>", bytes.len()),
        }
    }

    /// Write generated bytes to `path`, turning the reference into a `Path`.
    /// URLs and paths are returned unchanged.
    pub fn save_to(self, path: &Path) -> Result<ImageRef, ApiError> {
        match self {
            ImageRef::Bytes(bytes) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                std::fs::write(path, &bytes)?;
                info!(path = %path.display(), size = bytes.len(), "Saved generated image");
                Ok(ImageRef::Path(path.to_path_buf()))
            }
            other => Ok(other),
        }
    }
}

/// A post in progress. Either part may still be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub content: Option<String>,
    pub image: Option<ImageRef>,
}

/// A draft with both parts present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyPost {
    content: String,
    image: ImageRef,
}

impl PostDraft {
    pub fn new(content: Option<String>, image: Option<ImageRef>) -> Self {
        Self { content, image }
    }

    pub fn is_complete(&self) -> bool {
        self.ready().is_ok()
    }

    /// Blank content or a blank image reference counts as missing.
    pub fn ready(&self) -> Result<ReadyPost, ValidationError> {
        let content = match self.content.as_deref() {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => return Err(ValidationError::MissingContent),
        };
        let image = match &self.image {
            Some(image) if !image.is_blank() => image.clone(),
            _ => return Err(ValidationError::MissingImage),
        };
        Ok(ReadyPost { content, image })
    }
}

impl ReadyPost {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn to_request(&self, generated_image_path: &str) -> PublishRequest {
        PublishRequest {
            generated_content: self.content.clone(),
            image_path: self.image.image_path(generated_image_path),
        }
    }
}

pub const PREVIEW_UNAVAILABLE: &str = "Generate both content and image to see the preview";

/// Combined content + image preview, with the schedule length line.
pub fn render_preview(draft: &PostDraft, day_count: i64) -> String {
    let Ok(post) = draft.ready() else {
        return PREVIEW_UNAVAILABLE.to_string();
    };
    let mut output = String::from("Content Preview:\n");
    for line in post.content().lines() {
        output.push_str("  ");
        output.push_str(line);
        output.push('\n');
    }
    output.push_str("\nImage Preview:\n");
    output.push_str(&format!("  {}\n", post.image().describe()));
    output.push_str(&format!(
        "\nThis post will be scheduled for {} day{} from now.\n",
        day_count,
        if day_count > 1 { "s" } else { "" }
    ));
    output
}

/// Result of a one-time post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PostOutcome {
    /// Backend accepted the post
    Published { status: String },
    /// Backend answered but reported a failure
    Rejected { error: String },
    /// Backend unreachable; simulated receipt
    Demo(DemoPost),
}

impl PostOutcome {
    pub fn message(&self) -> String {
        match self {
            PostOutcome::Published { .. } => "Successfully posted to LinkedIn! 🎉".to_string(),
            PostOutcome::Rejected { error } => format!("Failed to post to LinkedIn: {}", error),
            PostOutcome::Demo(demo) => format!("Demo: {} 🎭", demo.message),
        }
    }
}

/// Either the receipt's status or the reason the post did not go through.
pub(crate) fn receipt_outcome(receipt: PublishReceipt) -> Result<String, String> {
    if receipt.success {
        Ok(receipt.status)
    } else {
        Err(receipt.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}

/// Publish a draft once. Unreachable backends produce a demo receipt.
pub async fn post_once(
    backend: &dyn Backend,
    draft: &PostDraft,
    generated_image_path: &str,
) -> Result<PostOutcome, ApiError> {
    let post = draft.ready()?;
    let request = post.to_request(generated_image_path);

    info!(endpoint = backend.endpoint(), "Posting to LinkedIn");
    match backend.publish(&request).await {
        Ok(receipt) => Ok(match receipt_outcome(receipt) {
            Ok(status) => {
                info!(status = %status, "Post published");
                PostOutcome::Published { status }
            }
            Err(error) => {
                warn!(error = %error, "Backend rejected post");
                PostOutcome::Rejected { error }
            }
        }),
        Err(e) => {
            warn!(error = %e, "Backend not available, using demo mode");
            Ok(PostOutcome::Demo(fallback::mock_publish(
                post.content(),
                post.image(),
            )))
        }
    }
}
