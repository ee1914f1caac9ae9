use bankly_rust::{apis::auth::Credentials, client::Environment, BanklyClient};
use reqwest::Url;
use serde_json::json;
use std::sync::atomic::{AtomicU32, Ordering};
use uuid::Uuid;
use wiremock::{
    matchers::{body_string_contains, method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

pub static MOCK_ACCESS_TOKEN: &str = "mock-access-token";

/// A client wired to a local mock of the Bankly token endpoint and banking APIs.
pub struct TestContext {
    pub client: BanklyClient,
    pub mock_server: MockServer,
    client_id: String,
    client_secret: String,
}

impl TestContext {
    pub async fn start() -> Self {
        // Generate a new set of random credentials for this specific test
        let client_id = Uuid::new_v4().to_string();
        let client_secret = Uuid::new_v4().to_string();

        let mock_server = MockServer::start().await;

        let client = BanklyClient::builder(Credentials::ClientCredentials {
            client_id: client_id.clone(),
            client_secret: client_secret.clone().into(),
        })
        .with_environment(Environment::from_single_url(
            &Url::parse(&mock_server.uri()).unwrap(),
        ))
        .build();

        Self {
            client,
            mock_server,
            client_id,
            client_secret,
        }
    }

    /// Builds another client pointing to the same mock server.
    pub fn client_with(&self, credentials: Credentials) -> BanklyClient {
        BanklyClient::builder(credentials)
            .with_environment(self.environment())
            .build()
    }

    pub fn environment(&self) -> Environment {
        Environment::from_single_url(&Url::parse(&self.mock_server.uri()).unwrap())
    }

    /// Mounts a token endpoint accepting only this context's credentials.
    ///
    /// Issued tokens are named `{MOCK_ACCESS_TOKEN}-{n}` and live for `expires_in` seconds.
    /// Exactly `expected_calls` successful authentications are expected.
    pub async fn mount_token_endpoint(&self, expires_in: u32, expected_calls: u64) {
        let count = AtomicU32::new(0);
        Mock::given(method("POST"))
            .and(path("/connect/token"))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains(format!("client_id={}", self.client_id)))
            .and(body_string_contains(format!(
                "client_secret={}",
                self.client_secret
            )))
            .respond_with(move |_: &Request| {
                let i = count.fetch_add(1, Ordering::SeqCst);
                ResponseTemplate::new(200).set_body_json(json!({
                    "token_type": "Bearer",
                    "access_token": format!("{}-{}", MOCK_ACCESS_TOKEN, i),
                    "expires_in": expires_in
                }))
            })
            .expect(expected_calls)
            .named("Token endpoint")
            .mount(&self.mock_server)
            .await;

        // Anything else is rejected
        Mock::given(method("POST"))
            .and(path("/connect/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_client"
            })))
            .named("Token endpoint rejecting credentials")
            .mount(&self.mock_server)
            .await;
    }

    /// Number of requests received so far by the given path.
    pub async fn requests_to(&self, request_path: &str) -> usize {
        self.mock_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .filter(|r| r.url.path() == request_path)
            .count()
    }
}
