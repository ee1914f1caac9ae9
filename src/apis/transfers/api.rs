use crate::{
    apis::{
        transfers::{TransferCreated, TransferRequest, TransferStatus},
        BanklyClientInner,
    },
    executor::Operation,
    Error,
};
use reqwest::Method;
use std::sync::Arc;
use urlencoding::encode;

/// Bankly fund transfers APIs client.
#[derive(Clone, Debug)]
pub struct TransfersApi {
    inner: Arc<BanklyClientInner>,
}

impl TransfersApi {
    pub(crate) fn new(inner: Arc<BanklyClientInner>) -> Self {
        Self { inner }
    }

    /// Sends a fund transfer.
    ///
    /// A failed request is not retried: check the transfer status before sending it again.
    #[tracing::instrument(
        name = "Send Transfer",
        skip(self, transfer_request),
        fields(
            amount = transfer_request.amount,
            bank_code = %transfer_request.recipient.bank_code,
        )
    )]
    pub async fn send_transfer(
        &self,
        transfer_request: &TransferRequest,
    ) -> Result<TransferCreated, Error> {
        self.inner
            .executor
            .execute(
                Operation::SendTransfer,
                Method::POST,
                "baas/fund-transfers",
                |req| req.json(transfer_request),
            )
            .await
    }

    /// Gets the status history of a transfer sent from the given account.
    #[tracing::instrument(name = "Get Transfer", skip(self))]
    pub async fn get_transfer(
        &self,
        authentication_code: &str,
        branch: &str,
        account: &str,
    ) -> Result<TransferStatus, Error> {
        self.inner
            .executor
            .execute(
                Operation::GetTransfer,
                Method::GET,
                &format!(
                    "baas/fund-transfers/{}/status",
                    encode(authentication_code)
                ),
                |req| req.query(&[("branch", branch), ("account", account)]),
            )
            .await
    }
}
