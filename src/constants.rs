// src/constants.rs

pub const ETC_PASSWD_FILE: &str = "/etc/passwd";
pub const ETC_SHADOW_FILE: &str = "/etc/shadow";
pub const ETC_GROUP_FILE: &str = "/etc/group";
pub const ETC_GSHADOW_FILE: &str = "/etc/gshadow";

/// An `x` in the passwd password field means the hash lives in the shadow file.
pub const SHADOW_INDIRECTION_MARKER: &str = "x";

pub const FIELD_SEPARATOR: char = ':';
pub const LIST_SEPARATOR: char = ',';
