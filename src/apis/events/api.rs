use crate::{
    apis::{events::GetEventsRequest, BanklyClientInner},
    executor::Operation,
    Error,
};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Bankly events APIs client.
#[derive(Clone, Debug)]
pub struct EventsApi {
    inner: Arc<BanklyClientInner>,
}

/// Query string of the events endpoint.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct EventsQuery<'a> {
    branch: &'a str,
    account: &'a str,
    include_details: bool,
    page: u32,
    #[serde(rename = "Pagesize")]
    page_size: u32,
}

impl EventsApi {
    pub(crate) fn new(inner: Arc<BanklyClientInner>) -> Self {
        Self { inner }
    }

    /// Lists one page of events of an account, including their details.
    ///
    /// The page is returned as sent by Bankly.
    #[tracing::instrument(name = "Get Events", skip(self))]
    pub async fn get_events(&self, events_request: &GetEventsRequest) -> Result<Value, Error> {
        let query = EventsQuery {
            branch: &events_request.branch,
            account: &events_request.account,
            include_details: true,
            page: events_request.page,
            page_size: events_request.page_size,
        };

        self.inner
            .executor
            .execute(Operation::GetEvents, Method::GET, "baas/events", |req| {
                req.query(&query)
            })
            .await
    }
}
