//! Single entry point for every authenticated call to the Bankly APIs.

use crate::Error;
use reqwest::{Method, Url};
use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use serde::de::DeserializeOwned;
use std::fmt::{self, Debug, Display, Formatter};

/// Banking operations exposed by the client.
///
/// The name of the operation prefixes the message of any error it raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Balance of an account.
    GetBalance,
    /// New fund transfer.
    SendTransfer,
    /// Status history of a fund transfer.
    GetTransfer,
    /// Page of account events.
    GetEvents,
    /// Onboarding status of a person.
    GetDocumentStatus,
    /// Onboarding status along with the sent document images.
    GetDocumentImageStatus,
    /// Account opened for a person.
    GetDocumentAccount,
    /// Account opening.
    PostCreateAccount,
    /// Document image upload.
    PostImagesDocument,
    /// Customer registration.
    PostUserData,
}

impl Operation {
    /// Name of the operation as used by Bankly, e.g. `getBalance`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::GetBalance => "getBalance",
            Operation::SendTransfer => "sendTransfer",
            Operation::GetTransfer => "getTransfer",
            Operation::GetEvents => "getEvents",
            Operation::GetDocumentStatus => "getDocumentStatus",
            Operation::GetDocumentImageStatus => "getDocumentImageStatus",
            Operation::GetDocumentAccount => "getDocumentAccount",
            Operation::PostCreateAccount => "postCreateAccount",
            Operation::PostImagesDocument => "postImagesDocument",
            Operation::PostUserData => "postUserData",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sends requests through the authenticated client and tags failures with the operation name.
///
/// Authentication, `api-version` and correlation id headers are attached by the middlewares
/// of the wrapped client. Failures are never retried.
pub(crate) struct RequestExecutor {
    client: ClientWithMiddleware,
    api_url: Url,
}

impl RequestExecutor {
    pub(crate) fn new(client: ClientWithMiddleware, api_url: Url) -> Self {
        Self { client, api_url }
    }

    /// Sends a `method` request to `path`, relative to the API base URL, and decodes the JSON response.
    ///
    /// `prepare` adds the operation specific query, body and headers.
    pub(crate) async fn execute<T, F>(
        &self,
        operation: Operation,
        method: Method,
        path: &str,
        prepare: F,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        self.send(method, path, prepare)
            .await
            .map_err(|source| Error::OperationError {
                operation,
                source: Box::new(source),
            })
    }

    async fn send<T, F>(&self, method: Method, path: &str, prepare: F) -> Result<T, Error>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = self
            .api_url
            .join(path)
            .map_err(|e| Error::Other(e.into()))?;

        let res = prepare(self.client.request(method, url))
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}

impl Debug for RequestExecutor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}
