//! Environment lookup endpoint which hands out the api base url.

use crate::error::{Error, ErrorContext};
use crate::Result;
use chrono::{DateTime, Utc};
use http::header;
use reqwest::Client;
use serde::Deserialize;

/// One deployment of the upstream api.
#[derive(Clone, Debug, Deserialize, smart_default::SmartDefault)]
#[serde(default, rename_all = "camelCase")]
pub struct Environment {
    pub id: String,
    #[serde(rename = "baseURL", alias = "baseUrl", alias = "base_url")]
    pub base_url: String,
    #[default(DateTime::<Utc>::from(std::time::SystemTime::UNIX_EPOCH))]
    #[serde(alias = "created_at")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(dead_code)]
struct EnvironmentResponse {
    status_code: u16,
    status_message: String,
    message: String,
    ok: bool,
    data: Vec<Environment>,
}

/// Request the environment list from `url` and return the first entry.
pub(crate) async fn lookup_environment(client: &Client, url: &str, secret: &str) -> Result<Environment> {
    tracing::debug!(url, "looking up api environment");

    let resp = client
        .get(url)
        .header(header::AUTHORIZATION, format!("Bearer {secret}"))
        .header("X-API-Key", secret)
        .header(header::CONTENT_TYPE, "application/json")
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Upstream(
            ErrorContext::new("environment lookup failed")
                .with_url(url)
                .with_status(status.as_u16()),
        ));
    }

    let raw = resp.bytes().await?;
    let response: EnvironmentResponse = serde_json::from_slice(raw.as_ref()).map_err(|e| {
        Error::Decode(
            ErrorContext::new(e.to_string())
                .with_url(url)
                .with_value(raw.as_ref()),
        )
    })?;
    if !response.ok {
        return Err(Error::Envelope(
            ErrorContext::new("environment lookup reported failure").with_url(url),
        ));
    }

    response
        .data
        .into_iter()
        .next()
        .filter(|env| !env.base_url.is_empty())
        .ok_or_else(|| {
            Error::Configuration(ErrorContext::new("no environment data available").with_url(url))
        })
}
