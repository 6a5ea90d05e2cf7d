//! Example: resolving a provider credential into a user identity
//!
//! Loads configuration from `SSO_*` environment variables or an `sso.toml` /
//! `sso.json` file, then resolves one credential.
//!
//! ```bash
//! export SSO_GOOGLE_CLIENT_ID=my-app.apps.googleusercontent.com
//! RUST_LOG=ssoconnect_infra=debug cargo run --example sso_lookup -- google <id-token>
//! ```
//!
//! The credential is the user access token for `facebook`, the ID token for
//! `google` and the authorization code for `tiktok`.

use ssoconnect_domain::Provider;
use ssoconnect_infra::{config, HttpClient, SsoAdapters};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut args = std::env::args().skip(1);
    let (Some(provider), Some(credential)) = (args.next(), args.next()) else {
        eprintln!("usage: sso_lookup <facebook|google|tiktok> <credential>");
        std::process::exit(2);
    };
    let provider: Provider = provider.parse()?;

    let config = config::load()?;
    let http_client = HttpClient::from_config(&config.http)?;
    let adapters = SsoAdapters::from_config(&config, http_client);

    match adapters.resolve(provider, &credential).await? {
        Some(identity) => println!("{}", serde_json::to_string_pretty(&identity)?),
        None => println!("{provider} rejected the credential for this application"),
    }

    Ok(())
}
