//! End-to-end test harness for the loyalty console.
//!
//! Each [`TestServer`] boots the full router on an ephemeral port with its
//! own freshly seeded store, so tests never see each other's writes.
//!
//! ```rust,ignore
//! let server = TestServer::spawn().await;
//! let client = server.client();
//! server.login(&client, "admin@amka.com").await;
//! let orders = server.get_json(&client, "/api/orders").await;
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use loyalty_admin::config::{ConsoleConfig, DEFAULT_SHARED_PASSWORD};
use loyalty_admin::db::Store;
use loyalty_admin::routes;
use loyalty_admin::state::AppState;
use reqwest::{Client, Response, StatusCode};
use serde_json::{Value, json};

/// A console instance listening on `127.0.0.1`.
pub struct TestServer {
    base_url: String,
}

impl TestServer {
    /// Start a server with zero simulated latency.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn spawn() -> Self {
        let config = ConsoleConfig {
            login_delay: Duration::ZERO,
            registration_delay: Duration::ZERO,
            ..ConsoleConfig::default()
        };
        let app = routes::app(AppState::new(config, Store::seeded()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Test server error");
        });

        Self {
            base_url: format!("http://{addr}"),
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// A client that keeps the session cookie between requests.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn client(&self) -> Client {
        Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client")
    }

    /// Submit the login form with an explicit password.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn try_login(&self, client: &Client, email: &str, password: &str) -> Response {
        client
            .post(self.url("/api/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Login request failed")
    }

    /// Log in with the shared password and return the session view.
    ///
    /// # Panics
    ///
    /// Panics if the login is rejected.
    pub async fn login(&self, client: &Client, email: &str) -> Value {
        let response = self.try_login(client, email, DEFAULT_SHARED_PASSWORD).await;
        assert_eq!(response.status(), StatusCode::OK, "login as {email}");
        response.json().await.expect("Login body is not JSON")
    }

    /// GET `path` and return the status.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn get_status(&self, client: &Client, path: &str) -> StatusCode {
        client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
            .status()
    }

    /// GET `path`, expecting 200 with a JSON body.
    ///
    /// # Panics
    ///
    /// Panics on a non-200 answer or an unreadable body.
    pub async fn get_json(&self, client: &Client, path: &str) -> Value {
        let response = client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed");
        assert_eq!(response.status(), StatusCode::OK, "GET {path}");
        response.json().await.expect("Body is not JSON")
    }

    /// POST a JSON body to `path`.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn post_json(&self, client: &Client, path: &str, body: &Value) -> Response {
        client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("POST request failed")
    }
}
