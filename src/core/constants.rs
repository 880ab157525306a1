//! Constants used throughout elasticloud.
//!
//! Centralizes magic strings and default settings.

/// Port used when the domain segment of a cloud id carries none.
pub const DEFAULT_CLOUD_PORT: &str = "443";

/// Scheme of every decoded endpoint.
pub const ENDPOINT_SCHEME: &str = "https";

/// Separates the optional label from the base64 payload.
pub const LABEL_DELIMITER: char = ':';

/// Separates fields inside the decoded payload.
pub const FIELD_DELIMITER: char = '$';

/// Separates an id from its port inside a payload field.
pub const PORT_DELIMITER: char = ':';

/// Separates username from password in a cloud auth string.
pub const AUTH_DELIMITER: char = ':';

/// Minimum number of payload fields: domain, primary, secondary.
pub const MIN_PAYLOAD_FIELDS: usize = 3;

/// Configuration file name (.elasticloud.toml).
pub const CONFIG_FILE: &str = ".elasticloud.toml";

/// Environment variable holding the cloud id.
pub const CLOUD_ID_ENV: &str = "ELASTICLOUD_CLOUD_ID";

/// Environment variable holding the cloud auth.
pub const CLOUD_AUTH_ENV: &str = "ELASTICLOUD_CLOUD_AUTH";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "ELASTICLOUD_LOG";

/// Environment variable selecting the log format (`json` or anything else for text).
pub const LOG_FORMAT_ENV: &str = "ELASTICLOUD_LOG_FORMAT";

/// Document type sent with every index request.
pub const DEFAULT_DOCUMENT_TYPE: &str = "_doc";

/// Client request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Client gzip compression level.
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 3;

/// Highest accepted compression level.
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

/// Placeholder printed in place of a password.
pub const MASKED_PASSWORD: &str = "********";
