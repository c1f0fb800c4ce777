use super::{Config, TOKEN_ENDPOINT};
use crate::error::PlutoraError;
use log::{debug, error};
use reqwest::header;
use serde::Deserialize;

/// The portion of the token response we care about.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Exchanges our configured credentials for an access token via the OAuth2 password grant.
///
/// There is no caching: every call is a full round trip to the token endpoint.
pub async fn obtain_access_token(
    client: &reqwest::Client,
    config: &Config,
) -> Result<String, PlutoraError> {
    let credentials = &config.credentials;
    let url = format!("{}{}", config.urls.auth_url, TOKEN_ENDPOINT);
    debug!("POST {url} as {}", credentials.username);

    // Form encoding also takes care of escaping the `@` within usernames.
    let result = client
        .post(&url)
        .header(header::CACHE_CONTROL, "no-cache")
        .form(&[
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("grant_type", "password"),
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ])
        .send()
        .await?;

    let status = result.status();
    let response_text = result.text().await?;
    if !status.is_success() {
        error!("access token request failed with {status}: {response_text}");
        return Err(PlutoraError::AuthenticationFailed {
            status,
            body: response_text,
        });
    }

    let body: TokenResponse = serde_json::from_str(&response_text)?;
    body.access_token
        .ok_or_else(|| PlutoraError::LookupNotFound("access_token".to_string()))
}
