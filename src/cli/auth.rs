//! Auth command.
//!
//! Splits a cloud auth string and prints the username. The password is
//! masked unless asked for.

use serde::Serialize;
use tracing::debug;

use crate::cli::output;
use crate::core::cloud_auth::Credential;
use crate::core::constants::MASKED_PASSWORD;
use crate::error::Result;

#[derive(Serialize)]
struct CredentialJson<'a> {
    username: &'a str,
    password: &'a str,
}

/// Decode `cloud_auth` and print the credential.
pub fn execute(cloud_auth: &str, show_password: bool, json: bool) -> Result<()> {
    let credential = Credential::decode(cloud_auth)?;
    debug!(username = credential.username(), "cloud auth decoded");

    let password = if show_password {
        credential.password()
    } else {
        MASKED_PASSWORD
    };

    if json {
        return output::json(&CredentialJson {
            username: credential.username(),
            password,
        });
    }

    output::section("Credential");
    output::kv("username", credential.username());
    output::kv("password", password);
    if credential.password().is_empty() {
        output::warn("password is empty");
    }
    Ok(())
}
