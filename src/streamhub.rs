//! Builder and access to the [`StreamHub`] struct which is required to make any request.

use crate::config::{ApiConfig, BaseUrlSource};
use crate::environment::lookup_environment;
use crate::error::{check_request, Error};
use crate::{Request, Result};
use http::header;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Starting point of this whole library.
#[derive(Clone, Debug)]
pub struct StreamHub {
    pub(crate) executor: Arc<Executor>,
}

impl StreamHub {
    pub fn builder() -> StreamHubBuilder {
        StreamHubBuilder::default()
    }

    /// Create a new instance configured from the process environment. See
    /// [`ApiConfig::from_env`].
    pub fn from_env() -> StreamHub {
        StreamHub::builder().config(ApiConfig::from_env()).build()
    }

    /// Return the (cloned) [`Client`] which is internally used to make requests.
    pub fn client(&self) -> Client {
        self.executor.client.clone()
    }

    /// The configuration this instance was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.executor.config
    }

    /// Return the api base url, running the environment lookup first if it hasn't been done yet.
    pub async fn base_url(&self) -> Result<String> {
        self.executor.base_url().await
    }
}

/// Internal struct to execute all request with.
#[derive(Debug)]
pub struct Executor {
    pub(crate) client: Client,
    pub(crate) config: ApiConfig,

    /// Must be a mutex because the base url may only be known after the environment lookup,
    /// which happens on first use.
    base_url: Mutex<Option<String>>,
}

impl Executor {
    pub(crate) fn get<S: Into<String>>(self: &Arc<Self>, path: S) -> ExecutorRequestBuilder {
        ExecutorRequestBuilder::new(self.clone(), path.into())
    }

    pub(crate) async fn base_url(&self) -> Result<String> {
        let mut cached = self.base_url.lock().await;
        if let Some(base_url) = cached.as_ref() {
            return Ok(base_url.clone());
        }

        let base_url = match &self.config.base {
            BaseUrlSource::Static(base_url) => base_url.clone(),
            BaseUrlSource::Lookup { url, secret } => {
                lookup_environment(&self.client, url, secret).await?.base_url
            }
            BaseUrlSource::Missing => {
                return Err(Error::Configuration("api base url is not configured".into()))
            }
        };
        let base_url = base_url.trim_end_matches('/').to_string();
        tracing::debug!(%base_url, "using api base url");

        *cached = Some(base_url.clone());
        Ok(base_url)
    }

    fn secret(&self) -> Result<&str> {
        self.config
            .secret
            .as_deref()
            .ok_or_else(|| Error::Configuration("api secret is not configured".into()))
    }

    pub(crate) async fn request<T: Request + DeserializeOwned>(
        self: &Arc<Self>,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let secret = self.secret()?;
        let url = format!("{}{}", self.base_url().await?, path);

        let mut req = self
            .client
            .get(&url)
            .header("X-API-Key", secret)
            .header(header::CONTENT_TYPE, "application/json");
        if self.config.bearer {
            req = req.header(header::AUTHORIZATION, format!("Bearer {secret}"));
        }
        if !query.is_empty() {
            req = req.query(query);
        }

        tracing::debug!(%url, "requesting");
        let resp = req.send().await?;
        let mut result: T = check_request(url, resp).await?;
        result.__set_executor(self.clone());

        Ok(result)
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self {
            client: Client::new(),
            config: ApiConfig::default(),
            base_url: Mutex::new(None),
        }
    }
}

pub(crate) struct ExecutorRequestBuilder {
    executor: Arc<Executor>,
    path: String,
    query: Vec<(String, String)>,
}

impl ExecutorRequestBuilder {
    pub(crate) fn new(executor: Arc<Executor>, path: String) -> Self {
        Self {
            executor,
            path,
            query: vec![],
        }
    }

    pub(crate) fn query<K: ToString, V: ToString>(mut self, query: &[(K, V)]) -> Self {
        self.query
            .extend(query.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        self
    }

    pub(crate) async fn request<T: Request + DeserializeOwned>(self) -> Result<T> {
        self.executor.request(&self.path, &self.query).await
    }
}

/// A builder to construct a new [`StreamHub`] instance. To create it, call
/// [`StreamHub::builder`].
pub struct StreamHubBuilder {
    client: Option<Client>,
    config: ApiConfig,
}

impl Default for StreamHubBuilder {
    fn default() -> Self {
        Self {
            client: None,
            config: ApiConfig::default(),
        }
    }
}

impl StreamHubBuilder {
    /// Return a [`ClientBuilder`] with the defaults this crate uses. Use it as base if you want
    /// to set a custom client via [`StreamHubBuilder::client`].
    pub fn predefined_client_builder() -> ClientBuilder {
        Client::builder().user_agent(concat!("streamhub-rs/", env!("CARGO_PKG_VERSION")))
    }

    /// Set a custom client that will be used in all api requests.
    pub fn client(mut self, client: Client) -> StreamHubBuilder {
        self.client = Some(client);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ApiConfig) -> StreamHubBuilder {
        self.config = config;
        self
    }

    /// Use a fixed api base url.
    pub fn api_base<S: AsRef<str>>(mut self, api_base: S) -> StreamHubBuilder {
        self.config.base = BaseUrlSource::Static(api_base.as_ref().to_string());
        self
    }

    /// Take the api base url from an environment lookup endpoint. This also enables the bearer
    /// header, call [`StreamHubBuilder::bearer`] afterwards to disable it.
    pub fn environment<S: AsRef<str>>(mut self, url: S, secret: S) -> StreamHubBuilder {
        self.config.base = BaseUrlSource::Lookup {
            url: url.as_ref().to_string(),
            secret: secret.as_ref().to_string(),
        };
        self.config.bearer = true;
        self
    }

    /// Set the secret which is sent as `X-API-Key` header.
    pub fn api_secret<S: AsRef<str>>(mut self, api_secret: S) -> StreamHubBuilder {
        self.config.secret = Some(api_secret.as_ref().to_string());
        self
    }

    /// Send the api secret as `Authorization: Bearer` header too.
    pub fn bearer(mut self, bearer: bool) -> StreamHubBuilder {
        self.config.bearer = bearer;
        self
    }

    /// Build the [`StreamHub`] instance. Missing configuration is not checked here but surfaces
    /// as [`Error::Configuration`] on the first request.
    pub fn build(self) -> StreamHub {
        let client = self.client.unwrap_or_else(|| {
            StreamHubBuilder::predefined_client_builder()
                .build()
                .unwrap_or_default()
        });

        StreamHub {
            executor: Arc::new(Executor {
                client,
                config: self.config,
                base_url: Mutex::new(None),
            }),
        }
    }
}
