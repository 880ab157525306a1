//! Encode command.
//!
//! Builds a cloud id from its parts and prints it bare, so it can be piped
//! into `decode` or an environment variable.

use tracing::debug;

use crate::cli::output;
use crate::core::cloud_id::CloudIdBuilder;
use crate::error::Result;

/// Components of a cloud id, as given on the command line.
pub struct Parts {
    pub domain: String,
    pub port: Option<String>,
    pub primary: String,
    pub primary_port: Option<String>,
    pub secondary: String,
    pub secondary_port: Option<String>,
    pub label: Option<String>,
}

/// Encode `parts` and print the cloud id.
pub fn execute(parts: Parts) -> Result<()> {
    let mut builder = CloudIdBuilder::new(parts.domain, parts.primary, parts.secondary);
    if let Some(port) = parts.port {
        builder = builder.port(port);
    }
    if let Some(port) = parts.primary_port {
        builder = builder.primary_port(port);
    }
    if let Some(port) = parts.secondary_port {
        builder = builder.secondary_port(port);
    }
    if let Some(label) = parts.label {
        builder = builder.label(label);
    }

    let cloud_id = builder.build()?;
    debug!(len = cloud_id.len(), "cloud id encoded");
    output::plain(cloud_id);
    Ok(())
}
