use crate::{ClientError, Result};
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use std::time::Duration;

/// Status and undecoded body of an HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Issues GET requests relative to an API root
pub trait Transport {
    fn get(&self, path: &str) -> Result<RawResponse>;

    /// Release the underlying connection resources
    fn close(&mut self) {}
}

/// reqwest-backed transport carrying the bearer credential on every request
pub struct HttpTransport {
    base_url: String,
    client: Option<HttpClient>,
}

impl HttpTransport {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/');
        reqwest::Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL {:?}: {}", base_url, e)))?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
            ClientError::Config("API key contains characters not allowed in a header".to_string())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = HttpClient::builder()
            .default_headers(headers)
            .user_agent(concat!("tcannex-rs/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.to_string(),
            client: Some(client),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_closed(&self) -> bool {
        self.client.is_none()
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str) -> Result<RawResponse> {
        let client = self.client.as_ref().ok_or(ClientError::Closed)?;
        let url = format!("{}{}", self.base_url, path);

        let response = client.get(&url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(RawResponse { status, body })
    }

    fn close(&mut self) {
        if self.client.take().is_some() {
            tracing::debug!(base_url = %self.base_url, "HTTP transport closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport =
            HttpTransport::new("http://localhost:8000/", "key", Duration::from_secs(5)).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8000");
        assert!(!transport.is_closed());
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpTransport::new("not a url", "key", Duration::from_secs(5))
            .err()
            .unwrap();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_header_unsafe_key() {
        let err = HttpTransport::new("http://localhost:8000", "bad\nkey", Duration::from_secs(5))
            .err()
            .unwrap();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_get_after_close() {
        let mut transport =
            HttpTransport::new("http://localhost:8000", "key", Duration::from_secs(5)).unwrap();
        transport.close();
        transport.close();

        assert!(transport.is_closed());
        assert!(matches!(transport.get("/"), Err(ClientError::Closed)));
    }
}
