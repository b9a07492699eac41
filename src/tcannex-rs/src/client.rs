use crate::transport::{HttpTransport, Transport};
use crate::{ClientError, Result};
use std::time::Duration;
use tcannex_core::config::resolve_api_key;
use tcannex_core::{ClientConfig, CprtResponse, API_KEY_ENV};
use tracing::{debug, instrument, warn};

/// TCAnnex CPRT API Client
///
/// The transport is released when the client is closed or dropped.
pub struct Client<T: Transport = HttpTransport> {
    transport: T,
}

impl Client<HttpTransport> {
    /// Create a client, falling back to `TCANNEX_API_KEY` when no key is given
    pub fn new(api_key: Option<&str>, base_url: Option<&str>) -> Result<Self> {
        let mut config = ClientConfig::default();
        if let Some(api_key) = api_key {
            config = config.with_api_key(api_key);
        }
        if let Some(base_url) = base_url {
            config = config.with_base_url(base_url);
        }

        Self::from_config(config.with_env())
    }

    /// Create a client from explicit configuration without reading the environment
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let api_key = resolve_api_key(config.api_key.as_deref(), None).ok_or_else(|| {
            ClientError::Authentication(format!(
                "No API key provided. Set the {} environment variable or pass an API key to the client.",
                API_KEY_ENV
            ))
        })?;

        let transport = HttpTransport::new(
            config.normalized_base_url(),
            &api_key,
            Duration::from_secs(config.timeout_secs),
        )?;

        debug!(base_url = %transport.base_url(), "TCAnnex client created");
        Ok(Self { transport })
    }

    /// Run `f` with a client built from `config`, closing it afterwards
    pub fn scoped<R>(config: ClientConfig, f: impl FnOnce(&Client) -> Result<R>) -> Result<R> {
        let client = Self::from_config(config)?;
        let result = f(&client);
        client.close();
        result
    }
}

impl<T: Transport> Client<T> {
    /// Create a client over a custom transport
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET / (read root)
    pub fn get_root(&self) -> Result<CprtResponse> {
        self.request("/")
    }

    /// GET /documents (list all documents)
    pub fn get_documents(&self) -> Result<CprtResponse> {
        self.request("/documents")
    }

    /// GET /documents/{document_identifier} (a document with its relations)
    pub fn get_document(&self, document_identifier: &str) -> Result<CprtResponse> {
        require("document_identifier", document_identifier)?;
        self.request(&format!("/documents/{}", document_identifier))
    }

    /// GET /elements/{document_identifier}/{element_identifier} (an element with its relations)
    pub fn get_element(
        &self,
        document_identifier: &str,
        element_identifier: &str,
    ) -> Result<CprtResponse> {
        require("document_identifier", document_identifier)?;
        require("element_identifier", element_identifier)?;
        self.request(&format!(
            "/elements/{}/{}",
            document_identifier, element_identifier
        ))
    }

    /// Close the client and release the transport
    pub fn close(self) {
        drop(self);
    }

    #[instrument(level = "debug", skip(self))]
    fn request(&self, path: &str) -> Result<CprtResponse> {
        let raw = self.transport.get(path)?;

        if !(200..300).contains(&raw.status) {
            warn!(status = raw.status, "CPRT request rejected");
            return Err(ClientError::Api {
                status: raw.status,
                body: raw.body,
            });
        }

        let response = CprtResponse::from_json(&raw.body)?;
        debug!(
            status = raw.status,
            documents = response.documents.len(),
            elements = response.elements.len(),
            relationship_types = response.relationship_types.len(),
            relationships = response.relationships.len(),
            "CPRT response decoded"
        );

        Ok(response)
    }
}

impl<T: Transport> Drop for Client<T> {
    fn drop(&mut self) {
        self.transport.close();
    }
}

fn require(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ClientError::InvalidIdentifier(name));
    }
    Ok(())
}
