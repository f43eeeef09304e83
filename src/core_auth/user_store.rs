// Lookups over the passwd file and the sign-in decision.
// Both files are re-read on every call so answers always follow what is on disk.

use crate::config::AccountFilesConfig;
use crate::core_auth::error::AuthError;
use crate::core_auth::verifier::{CredentialVerifier, UnixCryptVerifier};
use crate::core_records::reader::{collect_all, scan_first};
use crate::core_records::{PasswdEntry, ShadowEntry, StoreError};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone)]
pub struct UserStore {
    passwd_file: PathBuf,
    shadow_file: PathBuf,
    verifier: Arc<dyn CredentialVerifier>,
}

impl UserStore {
    pub fn new<V>(
        passwd_file: impl Into<PathBuf>,
        shadow_file: impl Into<PathBuf>,
        verifier: V,
    ) -> Self
    where
        V: CredentialVerifier + 'static,
    {
        Self {
            passwd_file: passwd_file.into(),
            shadow_file: shadow_file.into(),
            verifier: Arc::new(verifier),
        }
    }

    /// Store over the configured files, verifying with [`UnixCryptVerifier`].
    pub fn from_config(config: &AccountFilesConfig) -> Self {
        Self::new(
            &config.passwd_file,
            &config.shadow_file,
            UnixCryptVerifier::new(),
        )
    }

    pub fn passwd_file(&self) -> &Path {
        &self.passwd_file
    }

    pub fn shadow_file(&self) -> &Path {
        &self.shadow_file
    }

    /// All parsable passwd entries, in file order.
    pub fn list_users(&self) -> Result<Vec<PasswdEntry>, StoreError> {
        collect_all(&self.passwd_file, PasswdEntry::from_line)
    }

    /// First passwd entry whose uid field equals `uid`.
    pub fn find_by_uid(&self, uid: &str) -> Result<Option<PasswdEntry>, StoreError> {
        scan_first(&self.passwd_file, PasswdEntry::from_line, |entry| {
            entry.uid() == uid
        })
    }

    /// First passwd entry whose username equals `name`.
    pub fn find_by_name(&self, name: &str) -> Result<Option<PasswdEntry>, StoreError> {
        scan_first(&self.passwd_file, PasswdEntry::from_line, |entry| {
            entry.username() == name
        })
    }

    /// First shadow entry whose username equals `name`.
    pub fn find_shadow_entry(&self, name: &str) -> Result<Option<ShadowEntry>, StoreError> {
        scan_first(&self.shadow_file, ShadowEntry::from_line, |entry| {
            entry.username() == name
        })
    }

    /// Authenticates `username` with `password`.
    ///
    /// An empty passwd password field lets anyone in. The `x` marker sends the
    /// lookup to the shadow file; any other value is taken as the hash itself.
    ///
    /// # Returns
    ///
    /// The passwd entry of the authenticated user, or the reason the attempt
    /// was turned down. Unreadable account files surface as [`AuthError::Store`].
    pub fn sign_in(&self, username: &str, password: &str) -> Result<PasswdEntry, AuthError> {
        let entry = match self.find_by_name(username)? {
            Some(entry) => entry,
            None => {
                warn!("Sign-in rejected: unknown user {}", username);
                return Err(AuthError::UnknownUser(username.to_string()));
            }
        };

        if entry.is_passwordless() {
            info!("User {} signed in (no password set)", username);
            return Ok(entry);
        }

        let shadow = if entry.uses_shadow() {
            match self.find_shadow_entry(username)? {
                Some(shadow) => shadow,
                None => {
                    warn!(
                        "User {} points at {} but has no entry there",
                        username,
                        self.shadow_file.display()
                    );
                    return Err(AuthError::ShadowEntryMissing(username.to_string()));
                }
            }
        } else {
            ShadowEntry::new(entry.username(), entry.password())
        };

        if self.verifier.verify(shadow.hashed_password(), password) {
            info!("User {} signed in", username);
            Ok(entry)
        } else {
            warn!("Sign-in rejected: invalid credentials for {}", username);
            Err(AuthError::InvalidCredentials(username.to_string()))
        }
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

    // Accepts a password only when the hash reads "hash=<password>".
    fn oracle(hash: &str, password: &str) -> bool {
        hash.strip_prefix("hash=") == Some(password)
    }

    fn store(passwd: &NamedTempFile, shadow: &NamedTempFile) -> UserStore {
        UserStore::new(passwd.path(), shadow.path(), oracle)
    }

    #[test]
    fn test_list_users_skips_short_lines() {
        let passwd = fixture(&[
            "root:x:0:0:root:/root:/bin/bash",
            "broken:x:5",
            "",
            "daemon:*:1:1",
        ]);
        let shadow = fixture(&[]);
        let users = store(&passwd, &shadow).list_users().unwrap();
        let names: Vec<&str> = users.iter().map(|u| u.username()).collect();
        assert_eq!(names, ["root", "daemon"]);
    }

    #[test]
    fn test_first_match_wins() {
        let passwd = fixture(&[
            "alice:x:1001:1001:first",
            "alice:x:1002:1002:second",
            "bob:x:1001:1001:third",
        ]);
        let shadow = fixture(&[]);
        let store = store(&passwd, &shadow);

        let by_name = store.find_by_name("alice").unwrap().unwrap();
        assert_eq!(by_name.comment(), Some("first"));

        let by_uid = store.find_by_uid("1001").unwrap().unwrap();
        assert_eq!(by_uid.username(), "alice");

        assert_eq!(store.find_by_name("carol").unwrap(), None);
        assert_eq!(store.find_by_uid("42").unwrap(), None);
    }

    #[test]
    fn test_sign_in_through_shadow() {
        let passwd = fixture(&["alice:x:1001:1001:Alice A:/home/alice:/bin/sh"]);
        let shadow = fixture(&["alice:hash=correct-password:19000:0:99999:7:::"]);
        let store = store(&passwd, &shadow);

        let user = store.sign_in("alice", "correct-password").unwrap();
        assert_eq!(user.uid(), "1001");

        let err = store.sign_in("alice", "wrong").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials(ref name) if name == "alice"));
    }

    #[test]
    fn test_empty_password_field_always_succeeds() {
        let passwd = fixture(&["bob::1002:1002::: "]);
        let shadow = fixture(&[]);
        let store = UserStore::new(passwd.path(), shadow.path(), |_: &str, _: &str| false);

        assert!(store.sign_in("bob", "anything").is_ok());
        assert!(store.sign_in("bob", "").is_ok());
    }

    #[test]
    fn test_hash_in_passwd_file_is_used_directly() {
        let passwd = fixture(&["carol:hash=pw:1003:1003"]);
        let shadow = fixture(&["carol:hash=other"]);
        let store = store(&passwd, &shadow);

        assert!(store.sign_in("carol", "pw").is_ok());
        assert!(matches!(
            store.sign_in("carol", "other"),
            Err(AuthError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_missing_shadow_entry() {
        let passwd = fixture(&["dave:x:1004:1004"]);
        let shadow = fixture(&["alice:hash=pw"]);
        let store = store(&passwd, &shadow);

        assert!(matches!(
            store.sign_in("dave", "pw"),
            Err(AuthError::ShadowEntryMissing(ref name)) if name == "dave"
        ));
    }

    #[test]
    fn test_unknown_user() {
        let passwd = fixture(&["alice:x:1001:1001"]);
        let shadow = fixture(&["alice:hash=pw"]);
        assert!(matches!(
            store(&passwd, &shadow).sign_in("mallory", "pw"),
            Err(AuthError::UnknownUser(_))
        ));
    }

    #[test]
    fn test_sign_in_uses_first_duplicate() {
        let passwd = fixture(&["eve:x:1005:1005"]);
        let shadow = fixture(&["eve:hash=first", "eve:hash=second"]);
        let store = store(&passwd, &shadow);

        assert!(store.sign_in("eve", "first").is_ok());
        assert!(store.sign_in("eve", "second").is_err());
    }

    #[test]
    fn test_unreadable_shadow_is_fatal() {
        let passwd = fixture(&["alice:x:1001:1001"]);
        let store = UserStore::new(passwd.path(), "/nonexistent/shadow", oracle);

        let err = store.sign_in("alice", "pw").unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_changes_on_disk_are_seen_immediately() {
        let mut passwd = fixture(&["alice:x:1001:1001"]);
        let shadow = fixture(&[]);
        let store = store(&passwd, &shadow);
        assert_eq!(store.find_by_name("frank").unwrap(), None);

        writeln!(passwd, "frank::1006:1006").unwrap();
        passwd.flush().unwrap();
        assert!(store.find_by_name("frank").unwrap().is_some());
        assert!(store.sign_in("frank", "").is_ok());
    }
}
