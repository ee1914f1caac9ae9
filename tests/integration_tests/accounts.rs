use crate::common::test_context::{TestContext, MOCK_ACCESS_TOKEN};
use bankly_rust::{apis::auth::Credentials, client::Environment, BanklyClient};
use reqwest::Url;
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, header_exists, method, path, query_param},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn get_balance_authenticates_first() {
    let ctx = TestContext::start().await;
    ctx.mount_token_endpoint(3600, 1).await;
    Mock::given(method("GET"))
        .and(path("/baas/account/balance"))
        .and(query_param("branch", "0001"))
        .and(query_param("account", "12345"))
        .and(header("api-version", "1"))
        .and(header_exists("x-correlation-id"))
        .and(header(
            "Authorization",
            format!("Bearer {}-0", MOCK_ACCESS_TOKEN).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "available": 150.75,
            "blocked": 20.0
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let balance = ctx
        .client
        .accounts
        .get_balance("0001", "12345")
        .await
        .unwrap();

    assert_eq!(balance.available, 150.75);
    assert_eq!(balance.blocked, 20.0);

    let requests = ctx.mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method.as_str(), "POST");
    assert_eq!(requests[0].url.path(), "/connect/token");
    assert_eq!(requests[1].url.path(), "/baas/account/balance");
}

#[tokio::test]
async fn get_document_account() {
    let ctx = TestContext::start().await;
    ctx.mount_token_endpoint(3600, 1).await;
    Mock::given(method("GET"))
        .and(path("/baas/person-account/12345678909"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bankBranch": "0001",
            "accountNumber": "12345"
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let account = ctx
        .client
        .accounts
        .get_document_account("12345678909")
        .await
        .unwrap();

    assert_eq!(account.bank_branch, "0001");
    assert_eq!(account.account_number, "12345");
}

#[tokio::test]
async fn document_is_percent_encoded_in_the_path() {
    let ctx = TestContext::start().await;
    ctx.mount_token_endpoint(3600, 1).await;
    Mock::given(method("GET"))
        .and(path("/baas/person-account/123%2F456"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let err = ctx
        .client
        .accounts
        .get_document_account("123/456")
        .await
        .unwrap_err();

    assert_eq!(err.api_error().unwrap().status, 404);
    assert!(err.to_string().starts_with("getDocumentAccount: "));
}

#[tokio::test]
async fn create_account() {
    let ctx = TestContext::start().await;
    ctx.mount_token_endpoint(3600, 1).await;
    Mock::given(method("POST"))
        .and(path("/baas/person-account"))
        .and(body_json(json!({ "document": "12345678909" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "branch": "0001",
            "number": "12345",
            "status": "ACTIVE"
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let account = ctx
        .client
        .accounts
        .create_account("12345678909")
        .await
        .unwrap();

    assert_eq!(account["status"], "ACTIVE");
}

#[tokio::test]
async fn requests_keep_the_base_url_path_prefix() {
    let ctx = TestContext::start().await;
    Mock::given(method("POST"))
        .and(path("/gw/connect/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "access_token": MOCK_ACCESS_TOKEN,
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gw/baas/account/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "available": 5.0,
            "blocked": 1.0
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    // Behind a gateway, without the trailing slash
    let gateway = Url::parse(&format!("{}/gw", ctx.mock_server.uri())).unwrap();
    let client = BanklyClient::builder(Credentials::ClientCredentials {
        client_id: "gateway-client".to_string(),
        client_secret: "gateway-secret".into(),
    })
    .with_environment(Environment::from_single_url(&gateway))
    .build();

    let balance = client.accounts.get_balance("0001", "12345").await.unwrap();

    assert_eq!(balance.available, 5.0);
    let paths: Vec<_> = ctx
        .mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(paths, vec!["/gw/connect/token", "/gw/baas/account/balance"]);
}
