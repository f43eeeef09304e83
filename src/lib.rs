//! Local account lookup and sign-in over the Unix account database files
//! (`/etc/passwd`, `/etc/shadow`, `/etc/group`, `/etc/gshadow`).
//!
//! Every operation reads the relevant file afresh; nothing is cached and
//! nothing is ever written.

pub mod config;
pub mod constants;
pub mod core_auth;
pub mod core_groups;
pub mod core_records;

pub use config::{AccountFilesConfig, Config};
pub use core_auth::{AuthError, CredentialVerifier, UnixCryptVerifier, UserStore};
pub use core_groups::{GroupShadowStore, GroupStore};
pub use core_records::{GroupEntry, GroupShadowEntry, PasswdEntry, ShadowEntry, StoreError};
