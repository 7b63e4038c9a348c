use argon2::{
    Argon2, PasswordHash, PasswordHasher as _, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use tracing::warn;

/// Stand-in hash for accounts that do not exist, with the same algorithm and
/// cost parameters as `Argon2::default()`. No password verifies against it.
const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$cmVjb3JkZ2F0ZWR1bW15IQ$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Argon2id password hashing.
///
/// `hash` draws a fresh salt from the OS RNG on every call and returns a PHC
/// string (`$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`), so the salt and
/// parameters needed by `verify` travel with the hash itself.
#[derive(Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hash(&self, password: &str) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    /// `true` iff `password` hashes to `hash` under the salt and parameters
    /// embedded in `hash`. The final comparison is constant-time. A hash that
    /// does not parse never verifies.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Stored password hash is malformed: {}", e);
                return false;
            }
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    /// Do the work of a failed `verify` for a username that does not exist,
    /// so response time does not reveal whether the account is there.
    pub fn verify_dummy(&self, password: &str) {
        let _ = self.verify(password, DUMMY_HASH);
    }
}
