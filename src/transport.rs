//! Declarative request descriptor and the blocking executor behind every
//! endpoint method.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{HubSpotError, Result};

/// One outbound call: what to send and which status counts as success.
#[derive(Debug, Clone)]
pub(crate) struct Request {
    pub method: Method,
    pub url: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Vec<u8>>,
    pub ok_status: StatusCode,
    pub headers: HeaderMap,
}

impl Request {
    pub(crate) fn new(method: Method, url: String, ok_status: StatusCode) -> Self {
        Self {
            method,
            url,
            query: Vec::new(),
            body: None,
            ok_status,
            headers: HeaderMap::new(),
        }
    }

    /// Attach `payload` serialized as JSON.
    pub(crate) fn json<T: serde::Serialize + ?Sized>(mut self, payload: &T) -> Result<Self> {
        self.body = Some(serde_json::to_vec(payload)?);
        Ok(self)
    }
}

/// Raw body and status of a successful call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub body: Vec<u8>,
    pub status: StatusCode,
}

impl Response {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body, e.g. into a
    /// [`ContactUpsertResult`](crate::models::ContactUpsertResult).
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Executes [`Request`] descriptors over a shared blocking client.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: Client,
}

impl Transport {
    pub(crate) fn new(http: Client) -> Self {
        Self { http }
    }

    /// Send `request` and map the outcome.
    ///
    /// The body is read to the end before the status is checked, so the
    /// connection is released whichever way the call goes.
    pub(crate) fn execute(&self, request: Request) -> Result<Response> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in request.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        tracing::debug!(method = %request.method, url = %request.url, "sending HubSpot request");

        let mut builder = self
            .http
            .request(request.method, request.url.as_str())
            .headers(headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        // reqwest errors echo the URL, which carries `hapikey` in key mode.
        let resp = builder
            .send()
            .map_err(|e| HubSpotError::Transport(e.without_url()))?;
        let status = resp.status();
        let body = resp
            .bytes()
            .map_err(|e| HubSpotError::Transport(e.without_url()))?
            .to_vec();

        tracing::debug!(status = %status, bytes = body.len(), "received HubSpot response");

        if status != request.ok_status {
            tracing::warn!(
                status = %status,
                expected = %request.ok_status,
                url = %request.url,
                "unexpected HubSpot response status"
            );
            return Err(HubSpotError::Api {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(Response { body, status })
    }
}
