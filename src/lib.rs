//! Async Rust client for the [Bankly](https://bankly.com.br) banking-as-a-service APIs.
//!
//! # Usage
//!
//! ## Initialize a new `BanklyClient`
//!
//! Create a new [`BanklyClient`](crate::client::BanklyClient) and provide your client ID and client secret.
//!
//! ```rust,no_run
//! # use bankly_rust::{BanklyClient, apis::auth::Credentials};
//! # #[tokio::main]
//! # async fn main() {
//! let bankly = BanklyClient::new(Credentials::ClientCredentials {
//!     client_id: "some-client-id".into(),
//!     client_secret: "some-client-secret".into(),
//! });
//! # }
//! ```
//!
//! Clients acting on behalf of a user authenticate with [`Credentials::Password`](crate::apis::auth::Credentials::Password).
//!
//! The client must be built from within a tokio runtime. No request is sent until the first call:
//! the access token is requested then, cached, and refreshed once it has less than 15 minutes left.
//! Every request carries the `api-version` header and a new `x-correlation-id`.
//!
//! By default, a `BanklyClient` connects to the Live environment.
//! To point it somewhere else, use [`with_environment`](crate::client::BanklyClientBuilder::with_environment).
//!
//! ## Check a balance
//!
//! ```rust,no_run
//! # use bankly_rust::{BanklyClient, Error};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let bankly: BanklyClient = unreachable!();
//! #
//! let balance = bankly.accounts.get_balance("0001", "12345").await?;
//!
//! println!("Available: {:.2}, blocked: {:.2}", balance.available, balance.blocked);
//! # Ok(())
//! # }
//! ```
//!
//! ## Send a transfer
//!
//! ```rust,no_run
//! # use bankly_rust::{BanklyClient, Error, apis::transfers::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let bankly: BanklyClient = unreachable!();
//! #
//! let transfer = TransferRequestBuilder::default()
//!     .amount(10.5)
//!     .description("Rent")
//!     .sender(
//!         TransferSenderBuilder::default()
//!             .branch("0001")
//!             .account("12345")
//!             .document("12345678909")
//!             .name("Some One")
//!             .build()
//!             .unwrap(),
//!     )
//!     .recipient(
//!         TransferRecipientBuilder::default()
//!             .bank_code("332")
//!             .branch("0001")
//!             .account("54321")
//!             .document("98765432100")
//!             .name("Someone Else")
//!             .build()
//!             .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let res = bankly.transfers.send_transfer(&transfer).await?;
//! let status = bankly
//!     .transfers
//!     .get_transfer(&res.authentication_code, "0001", "12345")
//!     .await?;
//!
//! for entry in &status.status {
//!     println!("{} at {}", entry.name, entry.time_of_status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every banking operation fails with an [`Error::OperationError`](crate::Error::OperationError)
//! whose message starts with the name of the operation, e.g. `sendTransfer: ...`.
//! A rejected authentication is reported inside it, and can be detected with
//! [`Error::is_authentication_error`](crate::Error::is_authentication_error).
//! The client stays usable after any error. Nothing is retried automatically.

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod error;
pub mod executor;
mod middlewares;
mod token_cache;

pub use client::BanklyClient;
pub use error::Error;
pub use executor::Operation;
