//! Error types and upstream response checking.

use crate::common::Envelope;
use reqwest::Response;
use serde::de::DeserializeOwned;
use std::error;
use std::fmt::{Debug, Display, Formatter};

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Crate specific error types.
#[derive(Clone, Debug)]
pub enum Error {
    /// The api base url or the api secret is not configured. Nothing was requested.
    Configuration(ErrorContext),

    /// The request could not be sent or no response was received.
    Request(ErrorContext),
    /// The upstream answered with a non-2xx status. [`ErrorContext::status`] is always set.
    Upstream(ErrorContext),
    /// The response was valid json but the `{ ok, data }` envelope reported a failure or had no
    /// data.
    Envelope(ErrorContext),
    /// While decoding the response body something went wrong.
    Decode(ErrorContext),

    /// Generally malformed or invalid user input.
    Input(ErrorContext),
}

impl Error {
    pub fn context(&self) -> &ErrorContext {
        match self {
            Error::Configuration(context)
            | Error::Request(context)
            | Error::Upstream(context)
            | Error::Envelope(context)
            | Error::Decode(context)
            | Error::Input(context) => context,
        }
    }

    /// Http status of the failed request, if the upstream answered at all.
    pub fn status(&self) -> Option<u16> {
        self.context().status
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Configuration(context) => write!(f, "configuration missing: {context}"),
            Error::Request(context) => write!(f, "request failed: {context}"),
            Error::Upstream(context) => write!(f, "upstream error: {context}"),
            Error::Envelope(context) => write!(f, "invalid envelope: {context}"),
            Error::Decode(context) => write!(f, "decode error: {context}"),
            Error::Input(context) => write!(f, "invalid input: {context}"),
        }
    }
}

impl error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(ErrorContext::new(err.to_string()))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let mut context = ErrorContext::new(err.to_string());
        if let Some(url) = err.url() {
            context = context.with_url(url);
        }
        if let Some(status) = err.status() {
            context.status = Some(status.as_u16());
            return Error::Upstream(context);
        }

        if err.is_decode() {
            Error::Decode(context)
        } else if err.is_builder() {
            Error::Input(context)
        } else {
            Error::Request(context)
        }
    }
}

/// Information about an [`Error`].
#[derive(Clone, Debug, Default)]
pub struct ErrorContext {
    pub message: String,
    pub url: Option<String>,
    pub status: Option<u16>,
    pub value: Option<String>,
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(status) = self.status {
            write!(f, " [{status}]")?;
        }
        if let Some(url) = &self.url {
            write!(f, " ({url})")?;
        }
        if let Some(value) = &self.value {
            write!(f, ": {value}")?;
        }
        Ok(())
    }
}

impl From<String> for ErrorContext {
    fn from(string: String) -> Self {
        ErrorContext::new(string)
    }
}

impl From<&str> for ErrorContext {
    fn from(str: &str) -> Self {
        ErrorContext::new(str)
    }
}

impl ErrorContext {
    pub(crate) fn new<S: ToString>(message: S) -> Self {
        Self {
            message: message.to_string(),
            ..Default::default()
        }
    }

    pub(crate) fn with_url<S: AsRef<str>>(mut self, url: S) -> Self {
        self.url = Some(url.as_ref().to_string());
        self
    }

    pub(crate) fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub(crate) fn with_value(mut self, value: &[u8]) -> Self {
        self.value = Some(
            std::str::from_utf8(value)
                .unwrap_or("-- not displayable --")
                .to_string(),
        );
        self
    }
}

/// Check the status of `resp`, decode its body as [`Envelope`] and return the enveloped data.
pub(crate) async fn check_request<T: DeserializeOwned>(url: String, resp: Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        let message = if status.is_server_error() {
            "Server error detected. Try again later"
        } else {
            "Unexpected client error"
        };
        return Err(Error::Upstream(
            ErrorContext::new(message)
                .with_url(&url)
                .with_status(status.as_u16()),
        ));
    }

    let raw = resp.bytes().await?;
    decode_envelope(&url, raw.as_ref())
}

/// Decode an enveloped upstream body. `ok: false`, a missing `data` field and `data: null` are
/// all treated as [`Error::Envelope`].
pub(crate) fn decode_envelope<T: DeserializeOwned>(url: &str, raw: &[u8]) -> Result<T> {
    let envelope: Envelope<serde_json::Value> = serde_json::from_slice(raw).map_err(|e| {
        Error::Decode(
            ErrorContext::new(format!("{} at {}:{}", e, e.line(), e.column()))
                .with_url(url)
                .with_value(raw),
        )
    })?;

    if !envelope.ok {
        let message = if envelope.message.is_empty() {
            "upstream reported failure".to_string()
        } else {
            envelope.message
        };
        return Err(Error::Envelope(ErrorContext::new(message).with_url(url)));
    }
    let data = match envelope.data {
        Some(serde_json::Value::Null) | None => {
            return Err(Error::Envelope(
                ErrorContext::new("response has no data").with_url(url),
            ))
        }
        Some(data) => data,
    };

    serde_json::from_value::<T>(data).map_err(|e| {
        Error::Decode(
            ErrorContext::new(e.to_string())
                .with_url(url)
                .with_value(raw),
        )
    })
}
