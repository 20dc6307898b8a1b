// SPDX-FileCopyrightText: 2026 Runner Events Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Payload delivery over TCP or a Unix domain socket.
//!
//! The destination kind is decided per delivery: a configured url naming
//! an existing filesystem path is treated as a Unix domain socket,
//! anything else as a plain HTTP URL. The socket branch goes through a
//! hyper client with the hyperlocal connector, the TCP branch through
//! reqwest.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use bytes::Bytes;
use http_body_util::Full;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use hyperlocal::UnixConnector;
use tracing::debug;

use runner_events::RunnerError;

/// HTTP transport holding one client per destination kind.
pub(crate) struct Transport {
    http: reqwest::Client,
    unix: Client<UnixConnector, Full<Bytes>>,
}

impl Transport {
    pub(crate) fn new() -> Result<Self, RunnerError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| RunnerError::Emitter {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        let unix = Client::builder(TokioExecutor::new()).build(UnixConnector);

        Ok(Self { http, unix })
    }

    /// POST the payload as JSON, returning the response status code.
    ///
    /// The `resource` path applies only on the socket branch; a TCP url
    /// already carries its request path.
    pub(crate) async fn post_json(
        &self,
        url: &str,
        resource: Option<&str>,
        headers: &HashMap<String, String>,
        payload: &serde_json::Value,
    ) -> Result<u16, RunnerError> {
        if Path::new(url).exists() {
            self.post_unix(url, resource.unwrap_or("/"), headers, payload).await
        } else {
            self.post_tcp(url, headers, payload).await
        }
    }

    async fn post_tcp(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        payload: &serde_json::Value,
    ) -> Result<u16, RunnerError> {
        debug!(url, "sending payload over tcp");

        let mut request = self.http.post(url).json(payload);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(|e| RunnerError::Emitter {
            message: format!("HTTP request to {url} failed: {e}"),
            source: Some(Box::new(e)),
        })?;

        Ok(response.status().as_u16())
    }

    async fn post_unix(
        &self,
        socket_path: &str,
        resource: &str,
        headers: &HashMap<String, String>,
        payload: &serde_json::Value,
    ) -> Result<u16, RunnerError> {
        debug!(socket_path, resource, "sending payload over unix socket");

        let uri: hyper::Uri = hyperlocal::Uri::new(socket_path, resource).into();

        let body = serde_json::to_vec(payload).map_err(|e| RunnerError::Emitter {
            message: format!("failed to serialize payload: {e}"),
            source: Some(Box::new(e)),
        })?;

        let mut builder = hyper::Request::post(uri)
            .header(hyper::header::CONTENT_TYPE, "application/json");
        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let request = builder
            .body(Full::new(Bytes::from(body)))
            .map_err(|e| RunnerError::Emitter {
                message: format!("failed to build socket request: {e}"),
                source: Some(Box::new(e)),
            })?;

        let response = self.unix.request(request).await.map_err(|e| RunnerError::Emitter {
            message: format!("HTTP request over socket {socket_path} failed: {e}"),
            source: Some(Box::new(e)),
        })?;

        Ok(response.status().as_u16())
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport").finish_non_exhaustive()
    }
}
