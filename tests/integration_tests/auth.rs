use crate::common::test_context::{TestContext, MOCK_ACCESS_TOKEN};
use bankly_rust::apis::auth::Credentials;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn get_access_token() {
    let ctx = TestContext::start().await;
    ctx.mount_token_endpoint(3600, 1).await;

    let access_token = ctx.client.auth.get_access_token().await.unwrap();
    let again = ctx.client.auth.get_access_token().await.unwrap();

    assert_eq!(access_token.expose_secret(), format!("{}-0", MOCK_ACCESS_TOKEN));
    assert_eq!(access_token.token_type(), "Bearer");
    assert_eq!(access_token.expose_secret(), again.expose_secret());
}

#[tokio::test]
async fn invalid_credentials() {
    let ctx = TestContext::start().await;
    ctx.mount_token_endpoint(3600, 0).await;
    Mock::given(method("GET"))
        .and(path("/baas/account/balance"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.mock_server)
        .await;

    // Create a new client with a set of invalid credentials pointing to the same mock server
    let client = ctx.client_with(Credentials::ClientCredentials {
        client_id: "invalid".to_string(),
        client_secret: "invalid".into(),
    });

    let err = client.auth.get_access_token().await.expect_err("Expected error");
    assert!(err.is_authentication_error());
    assert_eq!(err.api_error().unwrap().title, "invalid_client");

    // Operations report the failed authentication under their own name
    let err = client
        .accounts
        .get_balance("0001", "12345")
        .await
        .expect_err("Expected error");
    assert!(err.is_authentication_error());
    assert!(err
        .to_string()
        .starts_with("getBalance: Authentication failed: "));
}

#[tokio::test]
async fn failed_refresh_keeps_the_cached_token() {
    let ctx = TestContext::start().await;
    ctx.mount_token_endpoint(3600, 1).await;

    let token = ctx.client.auth.get_access_token().await.unwrap();
    ctx.mock_server.verify().await;

    // The token endpoint goes down
    ctx.mock_server.reset().await;
    Mock::given(method("POST"))
        .and(path("/connect/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_client"
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/baas/account/balance"))
        .and(header(
            "Authorization",
            format!("Bearer {}", token.expose_secret()).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "available": 10.0,
            "blocked": 0.0
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let err = ctx.client.auth.refresh_access_token().await.unwrap_err();
    assert!(err.is_authentication_error());

    // Business calls keep using the still valid token
    ctx.client.accounts.get_balance("0001", "12345").await.unwrap();
}
