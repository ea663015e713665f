//! Run with: cargo test --test edit_image_test

mod common;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use common::TestApp;
use image_service::services::providers::mock::{MockImageProvider, ProviderCall};
use reqwest::multipart::{Form, Part};

fn edit_form(prompt: &str, bytes: &[u8]) -> Form {
    Form::new().text("prompt", prompt.to_string()).part(
        "image",
        Part::bytes(bytes.to_vec())
            .file_name("input.png")
            .mime_str("image/png")
            .expect("invalid mime"),
    )
}

#[tokio::test]
async fn empty_prompt_is_rejected_without_calling_the_provider() {
    let app = TestApp::spawn(MockImageProvider::returning(b"PNGDATA".to_vec())).await;
    let client = reqwest::Client::new();

    for prompt in ["", "   "] {
        let response = client
            .post(format!("{}/api/edit-image", app.address))
            .multipart(edit_form(prompt, b"RAWBYTES"))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), 400);
        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(body["detail"], "Prompt is required to edit an image");
    }

    assert!(app.provider.calls().is_empty());
}

#[tokio::test]
async fn missing_image_file_is_rejected() {
    let app = TestApp::spawn(MockImageProvider::returning(b"PNGDATA".to_vec())).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/edit-image", app.address))
        .multipart(Form::new().text("prompt", "add a hat"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["detail"], "Image file is required to edit an image");
    assert!(app.provider.calls().is_empty());
}

#[tokio::test]
async fn oversized_image_is_rejected_without_calling_the_provider() {
    let app = TestApp::spawn(MockImageProvider::returning(b"PNGDATA".to_vec())).await;
    let oversized = vec![0u8; 20 * 1024 * 1024 + 1];

    let response = reqwest::Client::new()
        .post(format!("{}/api/edit-image", app.address))
        .multipart(edit_form("add a hat", &oversized))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["detail"], "Image too large (max 20MB)");
    assert!(app.provider.calls().is_empty());
}

#[tokio::test]
async fn uploaded_bytes_reach_the_provider_unchanged() {
    let original = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];
    let app = TestApp::spawn(MockImageProvider::returning(b"EDITED".to_vec())).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/edit-image", app.address))
        .multipart(edit_form("add a hat", &original))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["image"],
        format!("data:image/png;base64,{}", BASE64.encode(b"EDITED"))
    );

    assert_eq!(
        app.provider.calls(),
        vec![ProviderCall::Edit {
            prompt: "add a hat".to_string(),
            image: original.to_vec(),
        }]
    );
}

#[tokio::test]
async fn provider_failure_maps_to_500_with_detail() {
    let app = TestApp::spawn(MockImageProvider::failing("quota exceeded")).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/edit-image", app.address))
        .multipart(edit_form("add a hat", b"RAWBYTES"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["detail"], "Failed to edit image: quota exceeded");
}
