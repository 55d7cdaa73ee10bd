//! PIN hashing and verification.
//!
//! The PIN itself is never stored; only its SHA-256 digest is. Verification
//! recomputes the digest and compares it with the stored hex string. A
//! mismatch is a normal boolean outcome, distinct from malformed input.

use crate::error::{Error, Result};
use sha2::{Digest, Sha256};

const PIN_MIN_DIGITS: usize = 4;
const PIN_MAX_DIGITS: usize = 6;

/// Where the PIN gate stands. `Unlocked` is terminal for the session; there
/// is no re-lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// No PIN exists yet; creating one unlocks.
    LockedNoPin,
    /// A PIN exists; verifying it unlocks.
    LockedPinSet,
    Unlocked,
}

impl GateState {
    pub(crate) fn for_stored_hash(hash: Option<&str>) -> Self {
        match hash {
            Some(_) => GateState::LockedPinSet,
            None => GateState::LockedNoPin,
        }
    }

    pub fn is_unlocked(self) -> bool {
        self == GateState::Unlocked
    }
}

fn require_well_formed(pin: &str) -> Result<()> {
    let digits_only = pin.bytes().all(|b| b.is_ascii_digit());
    if digits_only && (PIN_MIN_DIGITS..=PIN_MAX_DIGITS).contains(&pin.len()) {
        Ok(())
    } else {
        Err(Error::validation("PIN must be 4 to 6 digits"))
    }
}

/// Computes the one-way digest stored in place of the PIN: SHA-256 of the
/// secret, lowercase hex. Deterministic, so the same secret always produces
/// the same digest.
pub async fn compute_digest(secret: &str) -> String {
    let digest = Sha256::digest(secret.as_bytes());
    format!("{digest:x}")
}

/// Validates a new PIN against its confirmation and returns the digest to be
/// stored. A malformed candidate fails with a validation error; a
/// confirmation mismatch fails with `PinMismatch`.
pub async fn create_pin(candidate: &str, confirmation: &str) -> Result<String> {
    require_well_formed(candidate)?;
    if candidate != confirmation {
        return Err(Error::PinMismatch);
    }
    Ok(compute_digest(candidate).await)
}

/// Checks a PIN attempt against the stored hash. Returns `Ok(false)` for a
/// well-formed but wrong PIN; only malformed input is an error.
pub async fn verify_pin(candidate: &str, stored_hash: &str) -> Result<bool> {
    require_well_formed(candidate)?;
    Ok(compute_digest(candidate).await == stored_hash)
}
