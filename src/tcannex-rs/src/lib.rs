//! TCAnnex Client Library
//!
//! Blocking HTTP client for the TCAnnex CPRT API.
//!
//! ```rust,no_run
//! use tcannex_rs::Client;
//!
//! fn main() -> tcannex_rs::Result<()> {
//!     // Falls back to TCANNEX_API_KEY when no key is passed
//!     let client = Client::new(None, None)?;
//!     let response = client.get_element("NIST_CSF_2.0", "GV")?;
//!     for edge in &response.relationships {
//!         println!("{} -> {}", edge.source_element_identifier, edge.dest_element_identifier);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod transport;

pub use client::Client;
pub use tcannex_core::{
    ClientConfig, CprtResponse, Document, Element, Relationship, RelationshipType, API_KEY_ENV,
    DEFAULT_BASE_URL,
};
pub use transport::{HttpTransport, RawResponse, Transport};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0} must not be empty")]
    InvalidIdentifier(&'static str),

    #[error("Client has been closed")]
    Closed,
}

impl ClientError {
    /// Status code of an API error response
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
