//! Request execution against the service.

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use ureq::Agent;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("{0}")]
    Unavailable(String),
}

/// Executes POST requests, keeping cookies across calls on the same instance.
pub trait Transport {
    /// Send `payload` as the request body and return the response body as text.
    ///
    /// With `continue_session` the request shares the instance's cookie jar;
    /// otherwise it goes out with a clean session.
    fn execute_post(
        &mut self,
        url: &str,
        payload: &Value,
        continue_session: bool,
        headers: &[(&str, &str)],
    ) -> Result<String, TransportError>;
}

/// Blocking HTTP transport backed by a cookie-keeping `ureq` agent.
pub struct HttpTransport {
    agent: Agent,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        Self {
            agent: build_agent(timeout),
            timeout,
        }
    }
}

fn build_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .build()
        .into()
}

impl Transport for HttpTransport {
    fn execute_post(
        &mut self,
        url: &str,
        payload: &Value,
        continue_session: bool,
        headers: &[(&str, &str)],
    ) -> Result<String, TransportError> {
        let fresh;
        let agent = if continue_session {
            &self.agent
        } else {
            fresh = build_agent(self.timeout);
            &fresh
        };

        tracing::debug!(url, continue_session, "POST");
        let http_error = |source: ureq::Error| TransportError::Http {
            url: url.to_string(),
            source,
        };

        let mut request = agent.post(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let mut response = request.send(payload.to_string()).map_err(http_error)?;
        let body = response.body_mut().read_to_string().map_err(http_error)?;
        tracing::debug!(url, bytes = body.len(), "response received");
        Ok(body)
    }
}
