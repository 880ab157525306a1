//! Cloud auth decoding.
//!
//! A cloud auth string is `username:password`. Only the first `:` splits, so
//! passwords may contain colons.

use std::fmt;
use std::str::FromStr;

use zeroize::Zeroizing;

use crate::core::constants::{AUTH_DELIMITER, MASKED_PASSWORD};
use crate::error::DecodeError;

/// A username and password pair.
///
/// The password is wiped from memory on drop and masked in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    username: String,
    password: Zeroizing<String>,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Split a cloud auth string at its first `:`.
    ///
    /// Empty usernames and passwords are accepted.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::MissingDelimiter` if the string has no `:`.
    pub fn decode(descriptor: &str) -> Result<Self, DecodeError> {
        let (username, password) =
            descriptor
                .split_once(AUTH_DELIMITER)
                .ok_or_else(|| DecodeError::MissingDelimiter {
                    descriptor: descriptor.to_string(),
                })?;

        Ok(Self::new(username, password))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Take the pair apart, keeping the password zeroizing.
    pub fn into_parts(self) -> (String, Zeroizing<String>) {
        (self.username, self.password)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &MASKED_PASSWORD)
            .finish()
    }
}

impl FromStr for Credential {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

/// Decode a cloud auth string into `(username, password)`.
///
/// # Errors
///
/// See [`Credential::decode`].
pub fn decode_cloud_auth(descriptor: &str) -> Result<(String, String), DecodeError> {
    let (username, password) = Credential::decode(descriptor)?.into_parts();
    Ok((username, password.to_string()))
}
