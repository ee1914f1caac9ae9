use anyhow::Context;
use bankly_rust::{apis::auth::Credentials, BanklyClient};

#[derive(serde::Deserialize, Debug)]
struct Config {
    client_id: String,
    client_secret: String,
    branch: String,
    account: String,
    document: Option<String>,
}

impl Config {
    /// Reads `config.{toml,json,yaml}` if present, then `BANKLY_*` environment variables.
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("BANKLY"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    let bankly = BanklyClient::new(Credentials::ClientCredentials {
        client_id: config.client_id,
        client_secret: config.client_secret.into(),
    });

    let balance = bankly
        .accounts
        .get_balance(&config.branch, &config.account)
        .await?;

    tracing::info!(
        "Account {}/{}: available {:.2}, blocked {:.2}",
        config.branch,
        config.account,
        balance.available,
        balance.blocked
    );

    if let Some(document) = config.document {
        let status = bankly.onboarding.get_document_status(&document).await?;
        tracing::info!(
            "Onboarding of {}: {} since {}",
            status.document,
            status.last_status.situation,
            status.last_status.date
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
