//! API client configuration assembly.

use std::time::Duration;

use super::environment::EnvSnapshot;
use super::schema::ClientSettings;
use crate::api::{ClientConfig, TlsVerification};

/// Overrides `client.client_id`.
pub const CLIENT_ID_ENV: &str = "ICONFINDER_CLIENT_ID";

/// Overrides `client.client_secret`.
pub const CLIENT_SECRET_ENV: &str = "ICONFINDER_CLIENT_SECRET";

/// Build a [`ClientConfig`] from file settings and the environment.
///
/// Credentials from the environment take precedence over the file.
/// Whether the pair is complete is checked later by
/// [`Client::new`](crate::api::Client::new).
pub fn client_config(settings: &ClientSettings, env: &EnvSnapshot) -> ClientConfig {
    let mut config = ClientConfig::default();

    if let Some(url) = &settings.api_base_url {
        config.api_base_url = url.clone();
    }
    if let Some(url) = &settings.site_base_url {
        config.site_base_url = url.clone();
    }
    if let Some(secs) = settings.timeout_secs {
        config.timeout = Duration::from_secs(secs);
    }

    config.client_id = env
        .get(CLIENT_ID_ENV)
        .map(String::from)
        .or_else(|| settings.client_id.clone());
    config.client_secret = env
        .get(CLIENT_SECRET_ENV)
        .map(String::from)
        .or_else(|| settings.client_secret.clone());

    let tls = if settings.verify_tls == Some(false) {
        if settings.ca_bundle.is_some() {
            tracing::warn!("ca_bundle is ignored because verify_tls is false");
        }
        TlsVerification::Disabled
    } else if let Some(bundle) = &settings.ca_bundle {
        TlsVerification::CaBundle(bundle.clone())
    } else {
        TlsVerification::System
    };
    config.api_tls = tls.clone();
    config.site_tls = tls;

    config
}
