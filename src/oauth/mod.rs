mod credentials;
mod oauth_client;

pub use credentials::{Config, DEFAULT_CONFIG_PATH};
pub use oauth_client::obtain_access_token;

/// The token endpoint, relative to the configured `authUrl`.
pub const TOKEN_ENDPOINT: &str = "oauth/token";
