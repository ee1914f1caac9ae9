use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Filter for the events of an account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct GetEventsRequest {
    pub branch: String,
    pub account: String,
    /// Page to fetch, starting from 1.
    #[builder(default = "1")]
    pub page: u32,
    #[builder(default = "20")]
    pub page_size: u32,
}

impl GetEventsRequest {
    /// First page of events of an account, with the default page size.
    pub fn new(branch: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            account: account.into(),
            page: 1,
            page_size: 20,
        }
    }
}
