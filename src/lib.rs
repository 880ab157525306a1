//! elasticloud - Decode hosted search deployment cloud ids and cloud auth strings.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── decode        # Cloud id to endpoints
//! │   ├── auth          # Cloud auth to username/password
//! │   ├── encode        # Endpoints to cloud id
//! │   ├── settings      # Resolved client settings
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── cloud_id      # Cloud id decoder and builder
//!     ├── cloud_auth    # Cloud auth decoder
//!     ├── port          # id:port splitting
//!     ├── config        # .elasticloud.toml management
//!     └── activity      # Indexing activity over an external client
//! ```
//!
//! # Example
//!
//! ```
//! use elasticloud::core::cloud_auth::decode_cloud_auth;
//! use elasticloud::core::cloud_id::decode_cloud_id;
//!
//! let (primary, secondary) = decode_cloud_id("demo:ZXhhbXBsZS5jb20kZXMka2I=").unwrap();
//! assert_eq!(primary, "https://es.example.com:443");
//! assert_eq!(secondary, "https://kb.example.com:443");
//!
//! let (username, password) = decode_cloud_auth("arthur:pa:ss").unwrap();
//! assert_eq!((username.as_str(), password.as_str()), ("arthur", "pa:ss"));
//! ```

pub mod cli;
pub mod core;
pub mod error;
