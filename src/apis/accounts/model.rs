use serde::{Deserialize, Serialize};

/// Balance of a checking account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Balance {
    /// Amount available for transfers.
    pub available: f64,
    /// Amount currently blocked.
    pub blocked: f64,
}

/// Checking account owned by a person.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAccount {
    pub bank_branch: String,
    pub account_number: String,
}
