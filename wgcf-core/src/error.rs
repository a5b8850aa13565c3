use thiserror::Error;

/// Error outputs from `wgcf-core`
#[derive(Debug, Error)]
pub enum WgcfError {
    /// The presented input is not valid for the requested operation
    #[error("invalid_input_{attribute}: {reason}")]
    InvalidInput {
        /// The attribute that is invalid
        attribute: String,
        /// The reason the input is invalid
        reason: String,
    },
    /// The client identifier is not valid standard base64
    #[error("invalid_client_id: {error}")]
    InvalidClientId {
        /// Decoder error details
        error: String,
    },
    /// The decoded client identifier is too short to carry the reserved field
    #[error("invalid_reserved_length: expected at least 3 bytes, got {len}")]
    InvalidReservedLength {
        /// Number of decoded bytes
        len: usize,
    },
    /// Network connection or non-success HTTP response
    #[error("network_error: {error} (url: {url}, status: {status:?})")]
    NetworkError {
        /// The URL that was requested
        url: String,
        /// The HTTP status code, if a response was received
        status: Option<u16>,
        /// Error details
        error: String,
    },
    /// Unexpected error serializing or deserializing information
    #[error("serialization_error: {error}")]
    SerializationError {
        /// Error details
        error: String,
    },
    /// The provisioning service did not return the device for this context
    #[error("device_not_found: {device_id}")]
    DeviceNotFound {
        /// The device identifier that was looked up
        device_id: String,
    },
    /// The rename call succeeded but the returned record does not carry the requested name
    #[error("could not update device name (requested {requested:?}, got {returned:?})")]
    RenameNotConfirmed {
        /// The name sent to the provisioning service
        requested: String,
        /// The name returned by the provisioning service, if any
        returned: Option<String>,
    },
}
