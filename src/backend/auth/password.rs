/**
 * Credential Hashing
 *
 * Passwords are stored as salted bcrypt hashes and checked by re-hashing
 * the candidate. The `CredentialHasher` trait is the seam handlers use, so
 * the algorithm (and its cost) is chosen once when the state is built.
 */

use std::fmt::Debug;

use bcrypt::BcryptError;

/// Error raised by a credential hasher
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// bcrypt only reads the first 72 bytes (including a terminating NUL);
    /// longer passwords are refused instead of silently truncated
    #[error("password is longer than bcrypt accepts")]
    TooLong,
    #[error("credential hashing failed: {0}")]
    Bcrypt(BcryptError),
}

impl From<BcryptError> for HashError {
    fn from(err: BcryptError) -> Self {
        match err {
            BcryptError::Truncation(_) => Self::TooLong,
            other => Self::Bcrypt(other),
        }
    }
}

/// Hash-at-signup, verify-at-login capability
pub trait CredentialHasher: Send + Sync + Debug {
    /// Produce a salted one-way hash of `password`
    ///
    /// Fails with `HashError::TooLong` rather than hashing a prefix.
    fn hash(&self, password: &str) -> Result<String, HashError>;

    /// Check `password` against a hash produced by [`CredentialHasher::hash`]
    ///
    /// A mismatch is `Ok(false)`; `Err` is reserved for a stored hash that
    /// cannot be parsed.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}

/// bcrypt-backed hasher
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl CredentialHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, HashError> {
        Ok(bcrypt::non_truncating_hash(password, self.cost)?)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        match bcrypt::non_truncating_verify(password, hash) {
            // Nothing that long was ever hashed, so it cannot match
            Err(BcryptError::Truncation(_)) => Ok(false),
            result => Ok(result?),
        }
    }
}
