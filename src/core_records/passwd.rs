use crate::constants::SHADOW_INDIRECTION_MARKER;
use crate::core_records::fields::{display_optional, optional_field, split_record};
use std::fmt;

const INDEX_USERNAME: usize = 0;
/// `x` points at the shadow file, an empty field means no password at all.
const INDEX_PASSWORD: usize = 1;
const INDEX_UID: usize = 2;
/// Primary group, as listed in the group file.
const INDEX_GID: usize = 3;
/// GECOS: full name, phone number and the like.
const INDEX_COMMENT: usize = 4;
const INDEX_HOME: usize = 5;
const INDEX_SHELL: usize = 6;

/// One line of the primary account file (`/etc/passwd`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswdEntry {
    username: String,
    password: String,
    uid: String,
    gid: String,
    comment: Option<String>,
    home: Option<String>,
    shell: Option<String>,
}

impl PasswdEntry {
    /// Parses `username:password:uid:gid[:comment[:home[:shell]]]`.
    ///
    /// Returns `None` for blank lines and lines with fewer than four fields.
    pub fn from_line(line: &str) -> Option<Self> {
        let fields = split_record(line, INDEX_GID)?;
        Some(PasswdEntry {
            username: fields[INDEX_USERNAME].to_string(),
            password: fields[INDEX_PASSWORD].to_string(),
            uid: fields[INDEX_UID].to_string(),
            gid: fields[INDEX_GID].to_string(),
            comment: optional_field(&fields, INDEX_COMMENT),
            home: optional_field(&fields, INDEX_HOME),
            shell: optional_field(&fields, INDEX_SHELL),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The raw password field: a hash, the shadow marker, or empty.
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn gid(&self) -> &str {
        &self.gid
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn home(&self) -> Option<&str> {
        self.home.as_deref()
    }

    pub fn shell(&self) -> Option<&str> {
        self.shell.as_deref()
    }

    pub fn uses_shadow(&self) -> bool {
        self.password == SHADOW_INDIRECTION_MARKER
    }

    pub fn is_passwordless(&self) -> bool {
        self.password.is_empty()
    }
}

impl fmt::Display for PasswdEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Username={} ; Password={} ; Uid={} ; Gid={} ; Comment={} ; Home={} ; Shell={}",
            self.username,
            self.password,
            self.uid,
            self.gid,
            display_optional(&self.comment),
            display_optional(&self.home),
            display_optional(&self.shell)
        )
    }
}
