//! Small stateless helpers for shuffling files around.
//!
//! Every operation is an independent, synchronous function working directly
//! against the filesystem: templated copy, directory reset, directory
//! flattening, byte-exact concatenation, Posix permission/octal-mode
//! conversion, token-file markers and whitespace-aware quoting. The crate
//! holds no state between calls and performs no internal locking, so
//! callers must not race concurrent mutations of the same path.
//!
//! Logging goes through the `log` facade; the crate never installs a
//! logger itself.

pub mod clean;
pub mod concat;
pub mod error;
pub mod flatten;
pub mod newline;
pub mod permissions;
pub mod quote;
pub mod stat;
pub mod template;
pub mod token;

pub use crate::clean::clean_dir;
pub use crate::concat::concat;
pub use crate::error::FileUtilError;
pub use crate::flatten::flatten;
pub use crate::newline::to_unix_newline;
pub use crate::permissions::{Permission, PermissionSet};
pub use crate::quote::{quote, quote_path};
pub use crate::stat::{exists, is_dir, is_file, PathType};
pub use crate::template::copy_file;
pub use crate::token::{has_token, read_token, write_empty_token, write_token};
