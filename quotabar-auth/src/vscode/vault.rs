//! Safe Storage vault primitives: container format, key derivation,
//! decryption.
//!
//! VS Code stores extension secrets as a JSON Buffer envelope wrapping an
//! AES-128-CBC payload tagged `v10`. The key is derived from the
//! product's Safe Storage keychain password with PBKDF2-HMAC-SHA1. Salt,
//! round count, IV, and key length are fixed by that format and must
//! match exactly or decryption silently yields garbage.

use std::num::NonZeroU32;

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};
use serde::Deserialize;

use quotabar_core::AuthError;

type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

// ============================================================================
// Constants (fixed by the Safe Storage format)
// ============================================================================

/// Version tag of the supported container format.
const VERSION_TAG: &[u8; 3] = b"v10";

/// KDF salt.
const SAFE_STORAGE_SALT: &[u8] = b"saltysalt";

/// KDF round count.
const SAFE_STORAGE_ROUNDS: u32 = 1003;

/// Derived key length in bytes (AES-128).
pub const KEY_LEN: usize = 16;

/// IV: 16 space characters.
const SAFE_STORAGE_IV: [u8; 16] = [0x20; 16];

// ============================================================================
// Buffer Envelope
// ============================================================================

/// The stored value is a serialized Node buffer: `{"type":"Buffer","data":[...]}`.
#[derive(Debug, Deserialize)]
struct BufferEnvelope {
    data: Vec<u8>,
}

/// Decodes the JSON Buffer envelope around the encrypted payload.
pub fn decode_buffer_envelope(raw: &str) -> Result<Vec<u8>, AuthError> {
    let envelope: BufferEnvelope =
        serde_json::from_str(raw).map_err(|_| AuthError::UnsupportedFormat)?;
    Ok(envelope.data)
}

// ============================================================================
// Encrypted Container
// ============================================================================

/// A validated `v10` container: version tag checked, ciphertext exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedContainer {
    version_tag: [u8; 3],
    ciphertext: Vec<u8>,
}

impl EncryptedContainer {
    /// Validates the version tag and strips it off.
    ///
    /// The format is fixed by the editor; nothing is inferred or
    /// negotiated. Anything that does not start with `v10` is rejected
    /// before any decryption is attempted.
    pub fn decode(raw: &[u8]) -> Result<Self, AuthError> {
        if !raw.starts_with(VERSION_TAG) {
            return Err(AuthError::UnsupportedFormat);
        }

        Ok(Self {
            version_tag: *VERSION_TAG,
            ciphertext: raw[VERSION_TAG.len()..].to_vec(),
        })
    }

    /// The raw ciphertext (tag removed).
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// The 3-byte version tag.
    pub fn version_tag(&self) -> &[u8; 3] {
        &self.version_tag
    }
}

// ============================================================================
// Key Derivation
// ============================================================================

/// Derives `out.len()` key bytes from a password with PBKDF2-HMAC-SHA1.
///
/// Deterministic: identical inputs always produce identical output.
pub fn derive_key(password: &str, salt: &[u8], rounds: NonZeroU32, out: &mut [u8]) {
    ring::pbkdf2::derive(
        ring::pbkdf2::PBKDF2_HMAC_SHA1,
        rounds,
        salt,
        password.as_bytes(),
        out,
    );
}

/// Derives the 16-byte Safe Storage key for a keychain password.
pub fn derive_safe_storage_key(password: &str) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    let rounds = NonZeroU32::new(SAFE_STORAGE_ROUNDS).unwrap();
    derive_key(password, SAFE_STORAGE_SALT, rounds, &mut key);
    key
}

// ============================================================================
// Decryption
// ============================================================================

/// Decrypts Safe Storage ciphertext with AES-128-CBC and PKCS#7 unpadding.
///
/// Fails with [`AuthError::DecryptFailed`] when the key is not exactly
/// 16 bytes or the cipher reports an error (e.g. corrupt padding).
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, AuthError> {
    let decryptor = Aes128CbcDec::new_from_slices(key, &SAFE_STORAGE_IV)
        .map_err(|_| AuthError::DecryptFailed)?;

    let mut buf = ciphertext.to_vec();
    let plaintext = decryptor
        .decrypt_padded_mut::<Pkcs7>(&mut buf)
        .map_err(|_| AuthError::DecryptFailed)?;

    Ok(plaintext.to_vec())
}

// ============================================================================
// Tests
// ============================================================================
