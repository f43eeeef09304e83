use crate::core_records::fields::{parse_list, split_record, DisplayList};
use std::fmt;

const INDEX_GROUP_NAME: usize = 0;
/// Generally empty or `x`; a real hash here makes the group privileged.
const INDEX_PASSWORD: usize = 1;
const INDEX_GROUP_ID: usize = 2;
/// Comma-separated user names.
const INDEX_MEMBERS: usize = 3;

/// One line of the group file (`/etc/group`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    name: String,
    password: String,
    gid: String,
    members: Vec<String>,
}

impl GroupEntry {
    /// Parses `name:password:gid[:member,member,...]`.
    pub fn from_line(line: &str) -> Option<Self> {
        let fields = split_record(line, INDEX_GROUP_ID)?;
        let members = fields
            .get(INDEX_MEMBERS)
            .map(|list| parse_list(list))
            .unwrap_or_default();
        Some(GroupEntry {
            name: fields[INDEX_GROUP_NAME].to_string(),
            password: fields[INDEX_PASSWORD].to_string(),
            gid: fields[INDEX_GROUP_ID].to_string(),
            members,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn gid(&self) -> &str {
        &self.gid
    }

    /// Members in file order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn has_member(&self, username: &str) -> bool {
        self.members.iter().any(|member| member == username)
    }
}

impl fmt::Display for GroupEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GroupName={} ; Password={} ; GroupId={} ; Members={}",
            self.name,
            self.password,
            self.gid,
            DisplayList(&self.members)
        )
    }
}
