//! Api credentials and where the api base url comes from.

use std::env;

/// Environment variable holding a fixed api base url.
pub const API_BASE_VAR: &str = "PUBLIC_API_BASE";
/// Environment variables holding the api secret, checked in order.
pub const API_SECRET_VARS: [&str; 2] = ["API_SECRET", "PUBLIC_API_SECRET"];
/// Environment variable holding the url of the environment lookup endpoint.
pub const ENVIRONMENT_URL_VAR: &str = "API_ENVIRONMENT";
/// Environment variable holding the secret of the environment lookup endpoint.
pub const ENVIRONMENT_SECRET_VAR: &str = "API_ENVIRONMENT_SECRET";

/// Where the api base url is taken from.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BaseUrlSource {
    /// A fixed base url.
    Static(String),
    /// The base url of the first entry returned by an environment lookup endpoint.
    Lookup { url: String, secret: String },
    /// Nothing configured. Every request fails with [`crate::error::Error::Configuration`].
    #[default]
    Missing,
}

/// Everything needed to talk to the upstream api.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiConfig {
    pub base: BaseUrlSource,
    /// Sent as `X-API-Key` (and as bearer token if [`ApiConfig::bearer`] is set).
    pub secret: Option<String>,
    /// Also send the secret as `Authorization: Bearer ...`.
    pub bearer: bool,
}

impl ApiConfig {
    /// Read the configuration from the process environment. A static base url wins over an
    /// environment lookup endpoint; with an environment lookup the bearer header is enabled.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let secret = API_SECRET_VARS.iter().find_map(|key| non_empty(key));

        let base = if let Some(base) = non_empty(API_BASE_VAR) {
            BaseUrlSource::Static(base)
        } else if let (Some(url), Some(env_secret)) = (
            non_empty(ENVIRONMENT_URL_VAR),
            non_empty(ENVIRONMENT_SECRET_VAR),
        ) {
            BaseUrlSource::Lookup {
                url,
                secret: env_secret,
            }
        } else {
            BaseUrlSource::Missing
        };
        let bearer = matches!(base, BaseUrlSource::Lookup { .. });

        Self {
            base,
            secret,
            bearer,
        }
    }
}
