use log::debug;

/// Checks a candidate password against a stored crypt(3) hash.
///
/// Implementations must not panic on malformed hashes: an unrecognised
/// scheme is simply a mismatch.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, hash: &str, password: &str) -> bool;
}

impl<F> CredentialVerifier for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn verify(&self, hash: &str, password: &str) -> bool {
        self(hash, password)
    }
}

/// Verifier for the hashes found in real shadow files.
///
/// Picks the algorithm from the hash shape: `$2a$`/`$2b$`/`$2y$` go to bcrypt,
/// everything else (`$1$`, `$5$`, `$6$`, 13-character DES) to `pwhash`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixCryptVerifier;

impl UnixCryptVerifier {
    pub fn new() -> Self {
        Self
    }
}

fn is_bcrypt(hash: &str) -> bool {
    ["$2a$", "$2b$", "$2y$"]
        .iter()
        .any(|prefix| hash.starts_with(prefix))
}

impl CredentialVerifier for UnixCryptVerifier {
    fn verify(&self, hash: &str, password: &str) -> bool {
        if hash.is_empty() {
            return false;
        }
        if is_bcrypt(hash) {
            return bcrypt::verify(password, hash).unwrap_or(false);
        }
        let valid = pwhash::unix::verify(password, hash);
        if !valid {
            debug!("Hash did not match or has an unsupported format");
        }
        valid
    }
}
