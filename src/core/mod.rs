//! Core library components.
//!
//! The decoders (`cloud_id`, `cloud_auth`, `port`) are pure functions with no
//! logging. `config` and `activity` sit on top of them and carry the
//! configuration and observability concerns.

pub mod activity;
pub mod cloud_auth;
pub mod cloud_id;
pub mod config;
pub mod constants;
pub mod port;
