//! Settings command.
//!
//! Resolves the cloud id and cloud auth from arguments, environment and the
//! config file, then prints the client settings an indexing activity would
//! use.

use tracing::debug;

use crate::cli::output;
use crate::core::activity::ClientSettings;
use crate::core::config::Config;
use crate::core::constants::MASKED_PASSWORD;
use crate::error::Result;

/// Print resolved client settings. The password is always masked.
pub fn execute(
    config: &Config,
    cloud_id: Option<String>,
    cloud_auth: Option<String>,
    json: bool,
) -> Result<()> {
    let cloud_id = config.cloud_id(cloud_id)?;
    let cloud_auth = config.cloud_auth(cloud_auth)?;
    let settings = ClientSettings::decode(&cloud_id, &cloud_auth, &config.index)?;
    debug!(url = %settings.url, "client settings resolved");

    if json {
        return output::json(&serde_json::json!({
            "client": settings,
            "index": config.index.name,
            "document_type": config.index.document_type,
            "params": config.index.params,
        }));
    }

    output::section("Client");
    output::kv("url", output::url(&settings.url));
    output::kv("username", &settings.username);
    output::kv("password", MASKED_PASSWORD);
    output::kv("timeout", format!("{}s", settings.timeout.as_secs()));
    output::kv("gzip", settings.compression_level);

    println!();
    output::section("Index");
    output::kv("name", config.index.name.as_deref().unwrap_or("-"));
    output::kv("type", &config.index.document_type);
    for (key, value) in &config.index.params {
        output::kv(key, value);
    }
    Ok(())
}
