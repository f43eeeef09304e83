use crate::core_records::fields::{parse_list, split_record, DisplayList};
use std::fmt;

const INDEX_GROUP_NAME: usize = 0;
/// Anything that is not a crypt(3) result (`!`, `*`) disables group passwords.
const INDEX_PASSWORD: usize = 1;
/// Administrators may change the group password and membership.
const INDEX_ADMINISTRATORS: usize = 2;
const INDEX_MEMBERS: usize = 3;

/// One line of the group shadow file (`/etc/gshadow`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupShadowEntry {
    name: String,
    password: String,
    administrators: Vec<String>,
    members: Vec<String>,
}

impl GroupShadowEntry {
    /// Parses `name:password[:admin,admin,...[:member,member,...]]`.
    pub fn from_line(line: &str) -> Option<Self> {
        let fields = split_record(line, INDEX_PASSWORD)?;
        let list_at = |index: usize| {
            fields
                .get(index)
                .map(|list| parse_list(list))
                .unwrap_or_default()
        };
        Some(GroupShadowEntry {
            name: fields[INDEX_GROUP_NAME].to_string(),
            password: fields[INDEX_PASSWORD].to_string(),
            administrators: list_at(INDEX_ADMINISTRATORS),
            members: list_at(INDEX_MEMBERS),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn administrators(&self) -> &[String] {
        &self.administrators
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn is_administrator(&self, username: &str) -> bool {
        self.administrators.iter().any(|admin| admin == username)
    }

    pub fn has_member(&self, username: &str) -> bool {
        self.members.iter().any(|member| member == username)
    }
}

impl fmt::Display for GroupShadowEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GroupName={} ; Administrators={} ; Members={}",
            self.name,
            DisplayList(&self.administrators),
            DisplayList(&self.members)
        )
    }
}
