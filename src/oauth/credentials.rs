use crate::error::PlutoraError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::{self, BufRead, Write},
    path::Path,
};
use url::Url;

/// The default location of our configuration, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "credentials.cfg";

/// The format of our JSON configuration file.
///
/// ```json
/// {
///   "urls": {
///     "authUrl": "https://usoauth.plutora.com/",
///     "baseUrl": "https://usapi.plutora.com/"
///   },
///   "credentials": {
///     "client_id": "XXXXXXXXXXXXXXXXXXXXXXXXXX",
///     "client_secret": "YYYYYYYYYYYYYYYYYYYYYYYYYY",
///     "username": "user@company.com",
///     "password": ""
///   }
/// }
/// ```
///
/// The password may be left blank, in which case the user is prompted for it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub urls: Urls,
    pub credentials: Credentials,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Urls {
    /// The OAuth2 server; `oauth/token` is appended to it.
    #[serde(rename = "authUrl")]
    pub auth_url: String,
    /// The REST API root; resource paths are appended to it.
    #[serde(rename = "baseUrl")]
    pub base_url: String,
}

/// Values generated by the Plutora platform (see Customizations > API),
/// alongside the user credentials used to access it.
#[derive(Clone, Deserialize, Serialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// Keep secrets out of debug output and logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Reads and validates the configuration at the given path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlutoraError> {
        let contents = fs::read_to_string(path).map_err(PlutoraError::ConfigRead)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, PlutoraError> {
        let config: Config = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Everything but the password must be present before we make any call.
    pub fn validate(&self) -> Result<(), PlutoraError> {
        for (name, url) in [
            ("urls.authUrl", &self.urls.auth_url),
            ("urls.baseUrl", &self.urls.base_url),
        ] {
            if url.is_empty() {
                return Err(PlutoraError::Config(format!("{name} must not be empty")));
            }
            Url::parse(url)
                .map_err(|error| PlutoraError::Config(format!("{name} is not a URL: {error}")))?;
        }

        let credentials = &self.credentials;
        for (name, value) in [
            ("credentials.client_id", &credentials.client_id),
            ("credentials.client_secret", &credentials.client_secret),
            ("credentials.username", &credentials.username),
        ] {
            if value.is_empty() {
                return Err(PlutoraError::Config(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    /// If no password was configured, interactively asks for the username and password.
    pub fn ensure_password(&mut self) -> Result<(), PlutoraError> {
        if !self.credentials.password.is_empty() {
            return Ok(());
        }

        let stdin = io::stdin();
        self.credentials.username =
            prompt_username(&self.credentials.username, stdin.lock(), io::stdout())?;
        self.credentials.password =
            rpassword::prompt_password("Password: ").map_err(PlutoraError::Prompt)?;

        if self.credentials.password.is_empty() {
            return Err(PlutoraError::Config("a password is required".to_string()));
        }
        Ok(())
    }
}

/// Asks for a username, falling back to `default` on empty input.
pub fn prompt_username<R: BufRead, W: Write>(
    default: &str,
    mut input: R,
    mut output: W,
) -> Result<String, PlutoraError> {
    write!(output, "Enter your Plutora userid [{default}]: ").map_err(PlutoraError::Prompt)?;
    output.flush().map_err(PlutoraError::Prompt)?;

    let mut response = String::new();
    input
        .read_line(&mut response)
        .map_err(PlutoraError::Prompt)?;

    let response = response.trim();
    if response.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(response.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const VALID: &str = r#"{
        "urls": {
            "authUrl": "https://usoauth.plutora.com/",
            "baseUrl": "https://usapi.plutora.com/"
        },
        "credentials": {
            "client_id": "id",
            "client_secret": "secret",
            "username": "user@company.com",
            "password": "hunter2"
        }
    }"#;

    #[test]
    fn parses_valid_config() {
        let config = Config::from_json(VALID).unwrap();
        assert_eq!(config.urls.auth_url, "https://usoauth.plutora.com/");
        assert_eq!(config.urls.base_url, "https://usapi.plutora.com/");
        assert_eq!(config.credentials.username, "user@company.com");
        assert_eq!(config.credentials.password, "hunter2");
    }

    #[test]
    fn missing_password_defaults_to_empty() {
        let contents = r#"{
            "urls": {"authUrl": "https://a.example/", "baseUrl": "https://b.example/"},
            "credentials": {"client_id": "id", "client_secret": "secret", "username": "u"}
        }"#;
        let config = Config::from_json(contents).unwrap();
        assert!(config.credentials.password.is_empty());
    }

    #[test]
    fn rejects_empty_base_url() {
        let contents = VALID.replace("https://usapi.plutora.com/", "");
        let error = Config::from_json(&contents).unwrap_err();
        assert!(matches!(error, PlutoraError::Config(ref reason) if reason.contains("baseUrl")));
    }

    #[test]
    fn rejects_relative_auth_url() {
        let contents = VALID.replace("https://usoauth.plutora.com/", "usoauth/");
        let error = Config::from_json(&contents).unwrap_err();
        assert!(matches!(error, PlutoraError::Config(ref reason) if reason.contains("authUrl")));
    }

    #[test]
    fn rejects_missing_client_secret() {
        let contents = VALID.replace(r#""secret""#, r#""""#);
        assert!(matches!(
            Config::from_json(&contents),
            Err(PlutoraError::Config(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Config::from_json("{ not json"),
            Err(PlutoraError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        assert!(matches!(
            Config::load("/nonexistent/credentials.cfg"),
            Err(PlutoraError::ConfigRead(_))
        ));
    }

    #[test]
    fn configured_password_skips_prompt() {
        let mut config = Config::from_json(VALID).unwrap();
        config.ensure_password().unwrap();
        assert_eq!(config.credentials.password, "hunter2");
    }

    #[test]
    fn username_prompt_keeps_default_on_empty_input() {
        let mut output = Vec::new();
        let username =
            prompt_username("user@company.com", Cursor::new("\n"), &mut output).unwrap();
        assert_eq!(username, "user@company.com");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Enter your Plutora userid [user@company.com]: "
        );
    }

    #[test]
    fn username_prompt_accepts_override() {
        let username =
            prompt_username("user@company.com", Cursor::new("other@company.com\n"), io::sink())
                .unwrap();
        assert_eq!(username, "other@company.com");
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config = Config::from_json(VALID).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("\"secret\""));
    }
}
