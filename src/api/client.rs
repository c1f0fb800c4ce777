use crate::{
    error::PlutoraError,
    oauth::{self, Config},
};
use log::{debug, warn};
use reqwest::{header, Method};
use serde_json::Value;

/// A client for the Plutora REST API.
///
/// No token is held across requests; each call authenticates anew.
#[derive(Debug)]
pub struct ApiClient {
    /// Our loaded configuration, including a non-empty password.
    config: Config,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a new API client around the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Obtains a fresh access token.
    pub async fn access_token(&self) -> Result<String, PlutoraError> {
        oauth::obtain_access_token(&self.http, &self.config).await
    }

    /// Makes a REST API call to Plutora, e.g. `GET systems` or `PUT systems/{id}`.
    ///
    /// Only `PUT` and `POST` carry a body, which is `data` rendered as JSON.
    /// Without any data, the JSON literal `""` is sent.
    ///
    /// Returns `None` if the response had no body.
    pub async fn api(
        &self,
        verb: Method,
        path: &str,
        data: Option<&Value>,
    ) -> Result<Option<Value>, PlutoraError> {
        let access_token = self.access_token().await?;
        let url = format!("{}{}", self.config.urls.base_url, path);
        debug!("{verb} {url}");

        let mut request = self
            .http
            .request(verb.clone(), &url)
            .header(header::AUTHORIZATION, format!("bearer {access_token}"))
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CACHE_CONTROL, "no-cache");
        if verb == Method::PUT || verb == Method::POST {
            let empty = Value::String(String::new());
            let posted_contents = serde_json::to_string(data.unwrap_or(&empty))?;
            request = request.body(posted_contents);
        }

        let result = request.send().await?;
        let status = result.status();
        let response_text = result.text().await?;
        if !status.is_success() {
            warn!("{verb} {path} failed with {status}: {response_text}");
            return Err(PlutoraError::HttpRequestFailed {
                status,
                body: response_text,
            });
        }

        if response_text.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&response_text)?))
    }

    /// Fetches the resource at `path`, which must have a body.
    pub async fn get(&self, path: &str) -> Result<Value, PlutoraError> {
        self.api(Method::GET, path, None)
            .await?
            .ok_or_else(|| PlutoraError::UnexpectedShape(format!("GET {path} had no body")))
    }
}
