//! Decode command.
//!
//! Prints the endpoints encoded in a cloud id.

use serde::Serialize;
use tracing::debug;

use crate::cli::output;
use crate::core::cloud_id::CloudId;
use crate::error::Result;

#[derive(Serialize)]
struct DecodedJson<'a> {
    primary: String,
    secondary: String,
    endpoints: &'a CloudId,
}

/// Decode `cloud_id` and print both endpoints.
pub fn execute(cloud_id: &str, json: bool) -> Result<()> {
    let decoded = CloudId::decode(cloud_id)?;
    debug!(
        primary = %decoded.primary(),
        secondary = %decoded.secondary(),
        "cloud id decoded"
    );

    if json {
        return output::json(&DecodedJson {
            primary: decoded.primary().url(),
            secondary: decoded.secondary().url(),
            endpoints: &decoded,
        });
    }

    output::section("Endpoints");
    output::kv("primary", output::url(&decoded.primary().url()));
    output::kv("secondary", output::url(&decoded.secondary().url()));
    Ok(())
}
