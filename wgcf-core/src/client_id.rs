//! Decoding of the base64 client identifier into its reserved bytes.
//!
//! The transport protocol copies the trailing bytes of the client identifier
//! into the `reserved` field of every handshake message. Operators usually want
//! to see those bytes as decimal values, e.g. `[ 12, 34, 56 ]`.
use std::fmt;

use base64::{
    alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
    Engine,
};

use crate::error::WgcfError;

/// Number of bytes in the protocol's reserved field.
pub const RESERVED_LEN: usize = 3;

/// Standard padded alphabet that ignores non-zero bits in the last symbol, e.g. `AB==`.
const CLIENT_ID_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// The decoded bytes of a client identifier.
///
/// Displays as `[ b0, b1, ..., bn ]`, with every byte in decimal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReservedBytes(Vec<u8>);

impl ReservedBytes {
    /// The raw decoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of decoded bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the identifier decoded to zero bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase two-digit hex for every byte, concatenated.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Every byte as a zero-padded three-digit decimal, e.g. `7` becomes `"007"`.
    #[must_use]
    pub fn triplets(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|b| format!("{}{}{}", b / 100, (b / 10) % 10, b % 10))
            .collect()
    }

    /// The fixed-size reserved field, taken from the trailing bytes.
    ///
    /// # Errors
    ///
    /// Returns [`WgcfError::InvalidReservedLength`] if fewer than three bytes were decoded.
    pub fn as_reserved(&self) -> Result<[u8; RESERVED_LEN], WgcfError> {
        let len = self.0.len();
        if len < RESERVED_LEN {
            return Err(WgcfError::InvalidReservedLength { len });
        }
        let mut reserved = [0u8; RESERVED_LEN];
        reserved.copy_from_slice(&self.0[len - RESERVED_LEN..]);
        Ok(reserved)
    }
}

impl fmt::Display for ReservedBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self
            .0
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[ {values} ]")
    }
}

/// Decodes a standard base64 client identifier.
///
/// Line breaks (`\r`, `\n`) anywhere in the input are skipped. An empty identifier
/// decodes to zero bytes.
///
/// # Errors
///
/// Returns [`WgcfError::InvalidClientId`] if the input is not valid standard base64.
pub fn decode_client_id(client_id: &str) -> Result<ReservedBytes, WgcfError> {
    let client_id: String = client_id
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect();
    CLIENT_ID_ENGINE
        .decode(client_id)
        .map(ReservedBytes)
        .map_err(|e| WgcfError::InvalidClientId {
            error: e.to_string(),
        })
}

/// Renders the reserved-bits line for a client identifier.
///
/// # Errors
///
/// Returns [`WgcfError::InvalidClientId`] if the input is not valid standard base64.
pub fn format_reserved(client_id: &str) -> Result<String, WgcfError> {
    decode_client_id(client_id).map(|bytes| bytes.to_string())
}

/// Renders the reserved-bits line, treating a malformed identifier as zero bytes.
///
/// Malformed input renders as `[  ]`, the same as an empty identifier.
#[must_use]
pub fn format_reserved_lossy(client_id: &str) -> String {
    decode_client_id(client_id).unwrap_or_default().to_string()
}
