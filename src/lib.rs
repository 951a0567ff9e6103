//! OS Identification Library
//!
//! Cross-platform host identification: kernel sysname, machine
//! architecture, OS-family predicates, and word-size queries.
//! Facts are collected once per process and cached.
//!
//! # Usage as Library
//!
//! ```rust
//! assert!(!os_ident::sysname().is_empty());
//! assert!(!os_ident::machine().is_empty());
//! assert!([32, 64].contains(&os_ident::bits()));
//! assert_eq!(os_ident::bits_for("unknown"), None);
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `os-ident`
//!
//! Prints the host identity snapshot as JSON:
//! ```json
//! { "sysname": "Linux", "machine": "x86_64", "bits": 64, ... }
//! ```

pub mod info;
pub mod types;

// Re-export the query API at the crate root
pub use info::bits::{bits, bits_for, bits_of};
pub use info::host_info;
pub use info::os::{is_linux, is_macos, is_posix, is_windows, machine, sysname};

// Re-export the types the queries traffic in
pub use types::{BitsSubject, HostInfo, UnknownSubjectError};
