//! HTTP client helpers (REST).

use crate::core::request::{ApiError, Method, RequestOptions, RequestOverrides, check_status};
use crate::core::store::AppStore;
use gloo::console;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use yewdux::prelude::Dispatch;

#[derive(Clone, Debug)]
pub(crate) struct PortalClient {
    pub base_url: String,
}

impl PortalClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Issue a request and decode its JSON body.
    ///
    /// Every failure is announced once here before it is returned, so callers
    /// only add feature-specific follow-up. Transport and status failures are
    /// also written to the console.
    pub(crate) async fn make_request<T: DeserializeOwned>(
        &self,
        path: &str,
        overrides: RequestOverrides,
    ) -> Result<T, ApiError> {
        let result = self.send(path, overrides).await;
        if let Err(err) = &result {
            self.report_failure(err);
        }
        result
    }

    pub(crate) fn report_failure(&self, err: &ApiError) {
        if err.is_transport_or_status() {
            console::error!("Request failed:", err.to_string());
        }
        Dispatch::<AppStore>::new().reduce_mut(|store| {
            store.report_request_failure(err);
        });
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        overrides: RequestOverrides,
    ) -> Result<T, ApiError> {
        let options = RequestOptions::merged_over_defaults(overrides);
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let mut req = match options.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        for (name, value) in &options.headers {
            req = req.header(name, value);
        }
        if let Some(body) = options.body {
            req = req.body(body);
        }
        let response = req
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        check_status(response.status())?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}
