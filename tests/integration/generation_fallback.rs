//! Integration tests for remote-then-fallback generation and one-time posting
//! against a backend that is not listening.

use linkpost::backend::{Backend, HttpBackend, MockBackend, PublishReceipt};
use linkpost::fallback::{CONTENT_TABLE, DEMO_POST_MESSAGE, IMAGE_TABLE};
use linkpost::generation::{GenerationRequest, Generator, Payload, SourceMode};
use linkpost::post::{post_once, ImageRef, PostDraft, PostOutcome};
use std::sync::Arc;
use std::time::Duration;

fn unreachable_backend() -> Arc<dyn Backend> {
    Arc::new(
        HttpBackend::with_timeouts(
            "http://127.0.0.1:1",
            Duration::from_millis(500),
            Duration::from_secs(2),
        )
        .unwrap(),
    )
}

#[tokio::test]
async fn test_unreachable_backend_yields_keyword_content() {
    let generator = Generator::new(unreachable_backend());

    let request = GenerationRequest::content("Tell me about AI trends").unwrap();
    let result = generator.generate(&request).await;

    assert!(result.success());
    assert_eq!(result.source_mode(), SourceMode::Fallback);
    assert_eq!(
        result.payload().as_content(),
        Some(CONTENT_TABLE.get("ai").unwrap().value)
    );
}

#[tokio::test]
async fn test_unreachable_backend_yields_default_image_url() {
    let generator = Generator::new(unreachable_backend());

    let request = GenerationRequest::image("a quiet lake at dawn").unwrap();
    let result = generator.generate(&request).await;

    assert!(result.is_fallback());
    assert_eq!(
        result.into_payload(),
        Payload::Image(ImageRef::Url(IMAGE_TABLE.default_entry().value.to_string()))
    );
}

#[tokio::test]
async fn test_content_and_image_generate_concurrently() {
    let backend = Arc::new(
        MockBackend::new()
            .with_content(Ok("Remote text"))
            .with_image(Err("model overloaded")),
    );
    let generator = Generator::new(backend.clone());
    let content = GenerationRequest::content("marketing").unwrap();
    let image = GenerationRequest::image("marketing").unwrap();

    let (content, image) = futures::join!(generator.generate(&content), generator.generate(&image));

    assert_eq!(content.source_mode(), SourceMode::Remote);
    assert_eq!(image.source_mode(), SourceMode::Fallback);
    assert_eq!(
        image.payload().as_image(),
        Some(&ImageRef::Url(IMAGE_TABLE.get("marketing").unwrap().value.to_string()))
    );
    assert_eq!(backend.call_count(), 2);
}

#[tokio::test]
async fn test_post_once_against_unreachable_backend_is_a_demo_post() {
    let backend = unreachable_backend();
    let draft = PostDraft::new(
        Some("Hello network".to_string()),
        Some(ImageRef::parse("https://example.com/pic.png")),
    );

    let outcome = post_once(backend.as_ref(), &draft, "generated_image.png")
        .await
        .unwrap();

    match outcome {
        PostOutcome::Demo(post) => {
            assert!(post.post_id.starts_with("demo-post-"));
            assert_eq!(post.message, DEMO_POST_MESSAGE);
            assert_eq!(post.content, "Hello network");
        }
        other => panic!("expected demo post, got {:?}", other),
    }
}

#[tokio::test]
async fn test_post_once_reports_backend_rejection() {
    let backend = MockBackend::new().with_receipt(Ok(PublishReceipt::rejected("token expired")));
    let draft = PostDraft::new(
        Some("Hello".to_string()),
        Some(ImageRef::Bytes(vec![1, 2])),
    );

    let outcome = post_once(&backend, &draft, "generated_image.png").await.unwrap();

    assert_eq!(
        outcome,
        PostOutcome::Rejected {
            error: "token expired".to_string()
        }
    );
    assert_eq!(backend.published()[0].image_path, "generated_image.png");
}
