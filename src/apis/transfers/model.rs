use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Request to transfer funds from one of your accounts.
///
/// Amounts and account data are validated by Bankly only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Builder)]
#[builder(setter(into))]
pub struct TransferRequest {
    pub amount: f64,
    pub description: String,
    pub sender: TransferSender,
    pub recipient: TransferRecipient,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct TransferSender {
    pub branch: String,
    pub account: String,
    pub document: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct TransferRecipient {
    pub bank_code: String,
    pub branch: String,
    pub account: String,
    pub document: String,
    pub name: String,
}

/// Response to a transfer request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransferCreated {
    /// Identifier of the transfer, used to query its status.
    pub authentication_code: String,
}

/// Status history of a transfer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransferStatus {
    pub status: Vec<TransferStatusEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransferStatusEntry {
    pub name: String,
    /// Timestamp as sent by Bankly.
    pub time_of_status: String,
}
