use crate::{
    apis::{
        accounts::{Balance, DocumentAccount},
        BanklyClientInner,
    },
    executor::Operation,
    Error,
};
use reqwest::Method;
use serde_json::{json, Value};
use std::sync::Arc;
use urlencoding::encode;

/// Bankly accounts APIs client.
#[derive(Clone, Debug)]
pub struct AccountsApi {
    inner: Arc<BanklyClientInner>,
}

impl AccountsApi {
    pub(crate) fn new(inner: Arc<BanklyClientInner>) -> Self {
        Self { inner }
    }

    /// Gets the available and blocked balance of an account.
    #[tracing::instrument(name = "Get Balance", skip(self))]
    pub async fn get_balance(&self, branch: &str, account: &str) -> Result<Balance, Error> {
        self.inner
            .executor
            .execute(
                Operation::GetBalance,
                Method::GET,
                "baas/account/balance",
                |req| req.query(&[("branch", branch), ("account", account)]),
            )
            .await
    }

    /// Gets the checking account opened for a person, identified by their document number.
    #[tracing::instrument(name = "Get Document Account", skip(self))]
    pub async fn get_document_account(&self, document: &str) -> Result<DocumentAccount, Error> {
        self.inner
            .executor
            .execute(
                Operation::GetDocumentAccount,
                Method::GET,
                &format!("baas/person-account/{}", encode(document)),
                |req| req,
            )
            .await
    }

    /// Opens a checking account for a person whose onboarding was approved.
    ///
    /// Returns the account data as sent by Bankly.
    #[tracing::instrument(name = "Create Account", skip(self))]
    pub async fn create_account(&self, document: &str) -> Result<Value, Error> {
        self.inner
            .executor
            .execute(
                Operation::PostCreateAccount,
                Method::POST,
                "baas/person-account",
                |req| req.json(&json!({ "document": document })),
            )
            .await
    }
}
