// Lookups over the group file, re-read on every call

use crate::core_records::reader::{collect_all, scan_first};
use crate::core_records::{GroupEntry, StoreError};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct GroupStore {
    group_file: PathBuf,
}

impl GroupStore {
    pub fn new(group_file: impl Into<PathBuf>) -> Self {
        Self {
            group_file: group_file.into(),
        }
    }

    pub fn group_file(&self) -> &Path {
        &self.group_file
    }

    /// All parsable group entries, in file order.
    pub fn list_groups(&self) -> Result<Vec<GroupEntry>, StoreError> {
        collect_all(&self.group_file, GroupEntry::from_line)
    }

    /// First group whose gid field equals `gid`.
    pub fn find_by_id(&self, gid: &str) -> Result<Option<GroupEntry>, StoreError> {
        scan_first(&self.group_file, GroupEntry::from_line, |group| {
            group.gid() == gid
        })
    }

    /// First group whose name equals `name`.
    pub fn find_by_name(&self, name: &str) -> Result<Option<GroupEntry>, StoreError> {
        scan_first(&self.group_file, GroupEntry::from_line, |group| {
            group.name() == name
        })
    }

    /// Groups listing `username` as a supplementary member, in file order.
    ///
    /// The primary group from the passwd entry is not included unless the
    /// group file names the user explicitly.
    pub fn groups_of(&self, username: &str) -> Result<Vec<GroupEntry>, StoreError> {
        let groups = self.list_groups()?;
        Ok(groups
            .into_iter()
            .filter(|group| group.has_member(username))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixture(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_find_by_name() {
        let file = fixture(&["root:x:0:", "staff:x:50:alice,bob"]);
        let store = GroupStore::new(file.path());

        let staff = store.find_by_name("staff").unwrap().unwrap();
        assert_eq!(staff.members(), ["alice", "bob"]);
        assert_eq!(store.find_by_name("wheel").unwrap(), None);
    }

    #[test]
    fn test_first_match_wins() {
        let file = fixture(&["users:x:100:alice", "users:x:101:bob", "other:x:100:"]);
        let store = GroupStore::new(file.path());

        assert_eq!(store.find_by_name("users").unwrap().unwrap().gid(), "100");
        assert_eq!(store.find_by_id("100").unwrap().unwrap().name(), "users");
        assert_eq!(store.find_by_id("999").unwrap(), None);
    }

    #[test]
    fn test_list_groups_skips_short_lines() {
        let file = fixture(&["root:x:0:", "half:x", "   ", "staff:x:50"]);
        let groups = GroupStore::new(file.path()).list_groups().unwrap();
        let names: Vec<&str> = groups.iter().map(|g| g.name()).collect();
        assert_eq!(names, ["root", "staff"]);
    }

    #[test]
    fn test_groups_of() {
        let file = fixture(&[
            "wheel:x:10:root,alice",
            "staff:x:50:bob",
            "audio:x:63:alice",
        ]);
        let groups = GroupStore::new(file.path()).groups_of("alice").unwrap();
        let names: Vec<&str> = groups.iter().map(|g| g.name()).collect();
        assert_eq!(names, ["wheel", "audio"]);
    }

    #[test]
    fn test_missing_file() {
        let store = GroupStore::new("/nonexistent/group");
        assert!(store.list_groups().is_err());
        assert!(store.find_by_name("root").is_err());
    }
}
