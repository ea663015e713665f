use image_service::config::ServiceConfig;
use image_service::services::providers::mock::MockImageProvider;
use image_service::startup::Application;
use std::sync::Arc;
use std::time::Duration;

pub struct TestApp {
    pub address: String,
    pub provider: Arc<MockImageProvider>,
}

impl TestApp {
    pub async fn spawn(provider: MockImageProvider) -> Self {
        std::env::set_var("APP_PORT", "0"); // Random port for testing

        let config = ServiceConfig::load().expect("Failed to load configuration");
        let provider = Arc::new(provider);

        let app = Application::build(config, provider.clone())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections.
        let client = reqwest::Client::new();
        let health_url = format!("{}/api/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp { address, provider }
    }
}
