//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use blog_api::{create_app, create_app_state};
use blog_common::{AppConfig, JwtService};
use blog_db::PgPool;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations");

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    /// Client with a cookie store, so it keeps one anonymous session
    pub client: Client,
    pub pool: PgPool,
    jwt: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on an ephemeral port
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry);

        let state = create_app_state(config).await?;
        let pool = state.pool().clone();
        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            client: new_client()?,
            pool,
            jwt,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Access token for a seeded user
    pub fn token_for(&self, user_id: blog_core::Snowflake) -> Result<String> {
        Ok(self.jwt.issue_access_token(user_id)?)
    }

    /// Make a GET request with the shared session
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(with_token(self.client.get(self.url(path)), token).send().await?)
    }

    /// Make a GET request from a brand new anonymous session
    pub async fn get_fresh(&self, path: &str) -> Result<Response> {
        Ok(new_client()?.get(self.url(path)).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(with_token(self.client.post(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }
}

fn with_token(request: RequestBuilder, token: &str) -> RequestBuilder {
    request.header("Authorization", format!("Bearer {token}"))
}

fn new_client() -> Result<Client> {
    Ok(Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(10))
        .build()?)
}

/// Create a test configuration from the environment
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    // API_PORT is required by the loader but unused: tests bind port 0
    if std::env::var("API_PORT").is_err() {
        std::env::set_var("API_PORT", "0");
    }

    let mut config =
        AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;
    config.database.migrations_dir = MIGRATIONS_DIR.to_string();
    config.rate_limit.requests_per_second = 1000;
    config.rate_limit.burst = 1000;
    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    for var in ["DATABASE_URL", "REDIS_URL", "JWT_SECRET"] {
        if std::env::var(var).is_err() {
            eprintln!("Skipping test: {var} not set");
            return false;
        }
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
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
