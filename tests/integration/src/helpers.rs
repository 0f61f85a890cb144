//! Test helpers for integration tests
//!
//! Provides a self-contained test server and assertion helpers for
//! HTTP responses.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use status_api::{create_app, AppState};
use status_common::{AppConfig, JwtService};
use status_core::UserStatusRepository;
use status_db::InMemoryUserStatusRepository;
use status_service::{Clock, ExpiredStatusSweeper, FixedClock, ServiceContextBuilder};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::TEST_NOW;

const TEST_SECRET: &str = "integration-test-secret";

/// Configuration with only the required keys set
pub fn test_config() -> Result<AppConfig> {
    let vars: HashMap<&str, &str> = [
        ("API_PORT", "0"),
        ("DATABASE_URL", "postgres://unused/user_status"),
        ("JWT_SECRET", TEST_SECRET),
        ("STATUS_SWEEP_ENABLED", "false"),
    ]
    .into_iter()
    .collect();

    AppConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_string()))
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub repo: Arc<InMemoryUserStatusRepository>,
    pub clock: Arc<FixedClock>,
    jwt: Arc<JwtService>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server with an empty store and the clock at [`TEST_NOW`]
    pub async fn start() -> Result<Self> {
        let config = test_config()?;

        let repo = Arc::new(InMemoryUserStatusRepository::new());
        let clock = Arc::new(FixedClock::new(TEST_NOW));
        let jwt = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry));

        let service_context = ServiceContextBuilder::new()
            .status_repo(repo.clone())
            .jwt_service(jwt.clone())
            .clock(clock.clone())
            .build()?;
        let app = create_app(AppState::new(service_context, config));

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            repo,
            clock,
            jwt,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Bearer token for a user
    pub fn token_for(&self, user_id: &str) -> Result<String> {
        Ok(self.jwt.issue_token(user_id)?)
    }

    /// Run one expiry sweep at the current clock value
    pub async fn sweep(&self) -> Result<u64> {
        let repo: Arc<dyn UserStatusRepository> = self.repo.clone();
        let sweeper = ExpiredStatusSweeper::new(repo, self.clock.clone(), Duration::from_secs(60));
        Ok(sweeper.sweep_once(self.clock.now()).await?)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        send_auth(self.client.get(self.url(path)), token).await
    }

    /// Make a PUT request without a token
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.put(self.url(path)).json(body).send().await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        send_auth(self.client.put(self.url(path)).json(body), token).await
    }

    /// Make a PUT request with auth token and a raw body
    pub async fn put_raw_auth(&self, path: &str, token: &str, body: &str) -> Result<Response> {
        let request = self
            .client
            .put(self.url(path))
            .header("Content-Type", "application/json")
            .body(body.to_string());
        send_auth(request, token).await
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        send_auth(self.client.delete(self.url(path)), token).await
    }
}

async fn send_auth(request: RequestBuilder, token: &str) -> Result<Response> {
    Ok(request
        .header("Authorization", format!("Bearer {token}"))
        .send()
        .await?)
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
