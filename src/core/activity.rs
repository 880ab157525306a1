//! Indexing activity.
//!
//! Decodes a cloud id and cloud auth, builds client settings from the primary
//! endpoint, and hands one document to an [`IndexClient`]. The client itself
//! (HTTP, TLS, retries) lives outside this crate.
//!
//! Decode failures never reach the client: they come back as
//! [`Outcome::Declined`] so the caller can report them.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::cloud_auth::Credential;
use crate::core::cloud_id::CloudId;
use crate::core::config::IndexConfig;
use crate::core::constants::MASKED_PASSWORD;
use crate::error::{DecodeError, IndexError, Result};

/// Error type returned by an [`IndexClient`].
pub type ClientError = Box<dyn std::error::Error + Send + Sync>;

/// Connection settings handed to the indexing client.
#[derive(Clone, Serialize)]
pub struct ClientSettings {
    /// Primary endpoint URL
    pub url: String,
    pub username: String,
    #[serde(skip)]
    pub password: Zeroizing<String>,
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    pub compression_level: u32,
}

impl ClientSettings {
    /// Build settings from a decoded cloud id and credential.
    pub fn new(cloud_id: &CloudId, credential: Credential, index: &IndexConfig) -> Self {
        let (username, password) = credential.into_parts();
        Self {
            url: cloud_id.primary().url(),
            username,
            password,
            timeout: index.timeout(),
            compression_level: index.compression_level,
        }
    }

    /// Decode both descriptors and build settings.
    ///
    /// # Errors
    ///
    /// Returns the first `DecodeError`, cloud id before cloud auth.
    pub fn decode(
        cloud_id: &str,
        cloud_auth: &str,
        index: &IndexConfig,
    ) -> std::result::Result<Self, DecodeError> {
        let cloud_id = CloudId::decode(cloud_id)?;
        let credential = Credential::decode(cloud_auth)?;
        Ok(Self::new(&cloud_id, credential, index))
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &MASKED_PASSWORD)
            .field("timeout", &self.timeout)
            .field("compression_level", &self.compression_level)
            .finish()
    }
}

mod duration_secs {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }
}

/// One document to index.
#[derive(Debug, Clone, Copy)]
pub struct IndexRequest<'a> {
    pub index: &'a str,
    pub document_type: &'a str,
    /// `None` lets the service assign an id
    pub document_id: Option<&'a str>,
    pub params: &'a BTreeMap<String, String>,
    pub document: &'a Value,
}

/// Response returned by the indexing service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexResponse {
    pub status: u16,
    pub body: Value,
}

/// The external indexing/search client.
pub trait IndexClient {
    /// Index a single document.
    fn index(
        &self,
        settings: &ClientSettings,
        request: &IndexRequest<'_>,
    ) -> std::result::Result<IndexResponse, ClientError>;
}

/// Inputs of one activity evaluation.
#[derive(Clone, Default)]
pub struct ActivityInput {
    pub cloud_id: String,
    pub cloud_auth: String,
    pub index: String,
    pub params: BTreeMap<String, String>,
    /// Empty or `None` lets the service assign an id
    pub document_id: Option<String>,
    pub document: Value,
}

impl fmt::Debug for ActivityInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivityInput")
            .field("cloud_id", &self.cloud_id)
            .field("cloud_auth", &MASKED_PASSWORD)
            .field("index", &self.index)
            .field("params", &self.params)
            .field("document_id", &self.document_id)
            .field("document", &self.document)
            .finish()
    }
}

/// Result of an activity evaluation that did not fail outright.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The document was indexed.
    Completed(IndexResponse),
    /// A descriptor could not be decoded. The client was not called.
    Declined { message: String, cause: DecodeError },
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }
}

/// Something observable that happened during an evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivityEvent<'a> {
    /// Both descriptors decoded; `url` is the primary endpoint.
    Resolved { url: &'a str },
    Declined { message: &'a str },
    Indexing {
        index: &'a str,
        document_id: Option<&'a str>,
    },
    Indexed { status: u16 },
    Failed { message: &'a str },
}

/// Receives activity events.
pub trait EventSink: Send + Sync {
    fn record(&self, event: &ActivityEvent<'_>);
}

/// Forwards activity events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &ActivityEvent<'_>) {
        match *event {
            ActivityEvent::Resolved { url } => debug!(url, "cloud id resolved"),
            ActivityEvent::Declined { message } => warn!(reason = message, "activity declined"),
            ActivityEvent::Indexing { index, document_id } => {
                debug!(index, document_id = document_id.unwrap_or(""), "indexing document")
            }
            ActivityEvent::Indexed { status } => debug!(status, "document indexed"),
            ActivityEvent::Failed { message } => warn!(reason = message, "index request failed"),
        }
    }
}

/// Indexes documents through an [`IndexClient`].
pub struct IndexActivity<C> {
    client: C,
    config: IndexConfig,
    sink: Option<Arc<dyn EventSink>>,
}

impl<C: IndexClient> IndexActivity<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            config: IndexConfig::default(),
            sink: None,
        }
    }

    /// Use the settings of an `[index]` section: timeout, compression level
    /// and document type, plus the default index name and params.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `config` fails
    /// [`IndexConfig::validate`].
    pub fn with_config(client: C, config: IndexConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            client,
            config,
            sink: None,
        })
    }

    /// Report events to `sink`.
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// The input's index, or the configured one when the input leaves it blank.
    fn index_name<'a>(&'a self, input: &'a ActivityInput) -> Option<&'a str> {
        [Some(input.index.as_str()), self.config.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.trim().is_empty())
    }

    fn emit(&self, event: ActivityEvent<'_>) {
        if let Some(sink) = &self.sink {
            sink.record(&event);
        }
    }

    /// Decode the descriptors and index the document.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::MissingIndex` if neither the input nor the config
    /// names an index, and `IndexError::Request` if the client fails. Decode
    /// failures are not errors: they yield `Outcome::Declined`.
    pub fn eval(&self, input: &ActivityInput) -> Result<Outcome> {
        let settings =
            match ClientSettings::decode(&input.cloud_id, &input.cloud_auth, &self.config) {
                Ok(settings) => settings,
                Err(cause) => {
                    let message = cause.to_string();
                    self.emit(ActivityEvent::Declined { message: &message });
                    return Ok(Outcome::Declined { message, cause });
                }
            };
        self.emit(ActivityEvent::Resolved { url: &settings.url });

        let index = match self.index_name(input) {
            Some(index) => index,
            None => {
                let err = IndexError::MissingIndex;
                self.emit(ActivityEvent::Failed {
                    message: &err.to_string(),
                });
                return Err(err.into());
            }
        };

        // Input params override config params per key.
        let mut params = self.config.params.clone();
        params.extend(input.params.iter().map(|(k, v)| (k.clone(), v.clone())));

        let request = IndexRequest {
            index,
            document_type: &self.config.document_type,
            document_id: input.document_id.as_deref().filter(|id| !id.is_empty()),
            params: &params,
            document: &input.document,
        };
        self.emit(ActivityEvent::Indexing {
            index: request.index,
            document_id: request.document_id,
        });

        match self.client.index(&settings, &request) {
            Ok(response) => {
                self.emit(ActivityEvent::Indexed {
                    status: response.status,
                });
                Ok(Outcome::Completed(response))
            }
            Err(source) => {
                let message = source.to_string();
                self.emit(ActivityEvent::Failed { message: &message });
                Err(IndexError::Request {
                    url: settings.url.clone(),
                    source,
                }
                .into())
            }
        }
    }
}
