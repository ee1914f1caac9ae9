use crate::common::test_context::TestContext;
use futures::future::join_all;
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

const CALLERS: usize = 20;

async fn concurrent_balances(ctx: &TestContext) {
    Mock::given(method("GET"))
        .and(path("/baas/account/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "available": 1.0,
            "blocked": 0.0
        })))
        .expect(CALLERS as u64)
        .mount(&ctx.mock_server)
        .await;

    let results = join_all((0..CALLERS).map(|_| {
        let client = ctx.client.clone();
        async move { client.accounts.get_balance("0001", "12345").await }
    }))
    .await;

    assert!(results.iter().all(|r| r.is_ok()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_callers_share_a_single_refresh() {
    let ctx = TestContext::start().await;
    ctx.mount_token_endpoint(3600, 1).await;

    concurrent_balances(&ctx).await;

    assert_eq!(ctx.requests_to("/connect/token").await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_calls_with_short_lived_tokens_all_succeed() {
    let ctx = TestContext::start().await;
    // 5 minutes: every caller is inside the refresh margin, one refresh each
    ctx.mount_token_endpoint(300, CALLERS as u64).await;

    concurrent_balances(&ctx).await;

    assert_eq!(ctx.requests_to("/connect/token").await, CALLERS);
}
