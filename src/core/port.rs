//! Port extraction for cloud id payload fields.

use crate::core::constants::PORT_DELIMITER;

/// Split `field` into an id and a port at its last `:`.
///
/// Without a `:` the whole field is the id and `default_port` is returned.
/// Never fails.
pub fn extract_port<'a>(field: &'a str, default_port: &'a str) -> (&'a str, &'a str) {
    match field.rsplit_once(PORT_DELIMITER) {
        Some((id, port)) => (id, port),
        None => (field, default_port),
    }
}
