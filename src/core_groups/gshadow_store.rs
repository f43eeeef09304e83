use crate::core_records::reader::{collect_all, scan_first};
use crate::core_records::{GroupShadowEntry, StoreError};
use std::path::{Path, PathBuf};

/// Read-only view of the group shadow file. Nothing here makes decisions;
/// it only parses and looks up.
#[derive(Debug, Clone)]
pub struct GroupShadowStore {
    gshadow_file: PathBuf,
}

impl GroupShadowStore {
    pub fn new(gshadow_file: impl Into<PathBuf>) -> Self {
        Self {
            gshadow_file: gshadow_file.into(),
        }
    }

    pub fn gshadow_file(&self) -> &Path {
        &self.gshadow_file
    }

    pub fn list_entries(&self) -> Result<Vec<GroupShadowEntry>, StoreError> {
        collect_all(&self.gshadow_file, GroupShadowEntry::from_line)
    }

    pub fn find_by_name(&self, name: &str) -> Result<Option<GroupShadowEntry>, StoreError> {
        scan_first(&self.gshadow_file, GroupShadowEntry::from_line, |entry| {
            entry.name() == name
        })
    }
}
