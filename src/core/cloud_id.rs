//! Cloud id decoding and encoding.
//!
//! A cloud id identifies a hosted deployment in a single string:
//!
//! ```text
//! my-deployment:ZXhhbXBsZS5jb20kZXMka2I=
//! └── label ──┘ └──── base64 payload ───┘
//! ```
//!
//! The payload decodes to `$`-separated fields:
//!
//! ```text
//! example.com:9243$es$kb
//! └─ domain[:port] ┘ │  └ secondary service id[:port]
//!                    └ primary service id[:port]
//! ```
//!
//! A service field without a port inherits the domain's port, and the domain
//! falls back to 443. Fields after the third are ignored.
//!
//! Decoding is pure: no logging and no shared state.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

use crate::core::constants::{
    DEFAULT_CLOUD_PORT, ENDPOINT_SCHEME, FIELD_DELIMITER, LABEL_DELIMITER, MIN_PAYLOAD_FIELDS,
    PORT_DELIMITER,
};
use crate::core::port::extract_port;
use crate::error::{ConfigError, DecodeError, Result};

/// An `https` endpoint of one deployment service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Endpoint {
    host: String,
    port: String,
}

impl Endpoint {
    fn new(service_id: &str, domain: &str, port: &str) -> Self {
        Self {
            host: format!("{}.{}", service_id, domain),
            port: port.to_string(),
        }
    }

    /// Always `https`.
    pub fn scheme(&self) -> &'static str {
        ENDPOINT_SCHEME
    }

    /// `<service id>.<domain>`
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// Render as `https://<host>:<port>`, without escaping.
    pub fn url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", ENDPOINT_SCHEME, self.host, self.port)
    }
}

/// A decoded cloud id: the primary (data) and secondary (management) endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CloudId {
    primary: Endpoint,
    secondary: Endpoint,
}

impl CloudId {
    /// Decode a cloud id.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::InvalidEncoding` if the payload is not padded
    /// standard base64 or does not decode to UTF-8, and
    /// `DecodeError::MalformedPayload` if it holds fewer than three fields.
    pub fn decode(descriptor: &str) -> std::result::Result<Self, DecodeError> {
        // Everything up to the last `:` is a label. The payload alphabet has no `:`.
        let payload = match descriptor.rfind(LABEL_DELIMITER) {
            Some(idx) => &descriptor[idx + LABEL_DELIMITER.len_utf8()..],
            None => descriptor,
        };

        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| DecodeError::InvalidEncoding {
                payload: payload.to_string(),
                reason: e.to_string(),
            })?;
        let decoded = String::from_utf8(bytes).map_err(|e| DecodeError::InvalidEncoding {
            payload: payload.to_string(),
            reason: format!("decoded payload is not UTF-8: {}", e.utf8_error()),
        })?;

        let fields: Vec<&str> = decoded.split(FIELD_DELIMITER).collect();
        if fields.len() < MIN_PAYLOAD_FIELDS {
            return Err(DecodeError::MalformedPayload {
                found: fields.len(),
                decoded,
            });
        }

        let (domain, domain_port) = extract_port(fields[0], DEFAULT_CLOUD_PORT);
        let (primary_id, primary_port) = extract_port(fields[1], domain_port);
        let (secondary_id, secondary_port) = extract_port(fields[2], domain_port);

        Ok(Self {
            primary: Endpoint::new(primary_id, domain, primary_port),
            secondary: Endpoint::new(secondary_id, domain, secondary_port),
        })
    }

    /// Endpoint of the data service.
    pub fn primary(&self) -> &Endpoint {
        &self.primary
    }

    /// Endpoint of the management service.
    pub fn secondary(&self) -> &Endpoint {
        &self.secondary
    }

    /// Both endpoint URLs as `(primary, secondary)`.
    pub fn into_urls(self) -> (String, String) {
        (self.primary.url(), self.secondary.url())
    }
}

impl FromStr for CloudId {
    type Err = DecodeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::decode(s)
    }
}

/// Decode a cloud id into its `(primary, secondary)` endpoint URLs.
///
/// # Errors
///
/// See [`CloudId::decode`].
pub fn decode_cloud_id(descriptor: &str) -> std::result::Result<(String, String), DecodeError> {
    CloudId::decode(descriptor).map(CloudId::into_urls)
}

/// Builds a cloud id from its parts. The inverse of [`CloudId::decode`].
///
/// # Example
///
/// ```
/// use elasticloud::core::cloud_id::{decode_cloud_id, CloudIdBuilder};
///
/// let id = CloudIdBuilder::new("example.com", "es", "kb")
///     .port("9243")
///     .label("staging")
///     .build()
///     .unwrap();
/// let (primary, _) = decode_cloud_id(&id).unwrap();
/// assert_eq!(primary, "https://es.example.com:9243");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CloudIdBuilder {
    label: Option<String>,
    domain: String,
    port: Option<String>,
    primary: String,
    primary_port: Option<String>,
    secondary: String,
    secondary_port: Option<String>,
}

impl CloudIdBuilder {
    pub fn new(
        domain: impl Into<String>,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            primary: primary.into(),
            secondary: secondary.into(),
            ..Self::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Port of the domain, inherited by both services unless overridden.
    pub fn port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    pub fn primary_port(mut self, port: impl Into<String>) -> Self {
        self.primary_port = Some(port.into());
        self
    }

    pub fn secondary_port(mut self, port: impl Into<String>) -> Self {
        self.secondary_port = Some(port.into());
        self
    }

    /// Encode into `[label:]base64(domain[:port]$primary[:port]$secondary[:port])`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a component contains `$` or `:`,
    /// which would not survive decoding, or if the label contains `:`.
    pub fn build(&self) -> Result<String> {
        if let Some(label) = &self.label {
            if label.contains(LABEL_DELIMITER) {
                return Err(ConfigError::InvalidValue {
                    field: "label",
                    reason: format!("'{}' must not contain `{}`", label, LABEL_DELIMITER),
                }
                .into());
            }
        }

        let parts = [
            ("domain", &self.domain, &self.port),
            ("primary", &self.primary, &self.primary_port),
            ("secondary", &self.secondary, &self.secondary_port),
        ];

        let mut fields = Vec::with_capacity(parts.len());
        for (name, id, port) in parts {
            check_component(name, id)?;
            match port {
                Some(port) => {
                    check_component(name, port)?;
                    fields.push(format!("{}{}{}", id, PORT_DELIMITER, port));
                }
                None => fields.push(id.clone()),
            }
        }

        let separator = FIELD_DELIMITER.to_string();
        let payload = STANDARD.encode(fields.join(separator.as_str()));
        match &self.label {
            Some(label) => Ok(format!("{}{}{}", label, LABEL_DELIMITER, payload)),
            None => Ok(payload),
        }
    }
}

fn check_component(field: &'static str, value: &str) -> Result<()> {
    if let Some(ch) = value
        .chars()
        .find(|&c| c == FIELD_DELIMITER || c == PORT_DELIMITER)
    {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("'{}' must not contain `{}`", value, ch),
        }
        .into());
    }
    Ok(())
}
