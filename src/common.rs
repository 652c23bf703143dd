use crate::Executor;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

pub(crate) use streamhub_rs_internal::Request;

/// The `{ ok, data }` wrapper every upstream response is delivered in.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Envelope<T> {
    #[serde(alias = "status_code")]
    pub status_code: u16,
    #[serde(alias = "status_message")]
    pub status_message: String,
    pub message: String,
    pub ok: bool,
    pub data: Option<T>,
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            status_code: 0,
            status_message: String::new(),
            message: String::new(),
            ok: false,
            data: None,
        }
    }
}

/// Helper trait for [`crate::Executor::request`] generic returns.
/// Must be implemented for every struct which is used as generic parameter there.
#[doc(hidden)]
pub trait Request {
    /// Set a usable [`Executor`] instance to the struct if required
    fn __set_executor(&mut self, _: Arc<Executor>) {}
}

impl Request for () {}

impl<K, V> Request for HashMap<K, V> {}

impl<T: Request> Request for Vec<T> {
    fn __set_executor(&mut self, executor: Arc<Executor>) {
        for item in self.iter_mut() {
            item.__set_executor(executor.clone())
        }
    }
}

impl Request for serde_json::Value {}
