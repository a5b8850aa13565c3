//! Verified renaming of the bound device.
use std::future::Future;

use crate::{context::Context, device::BoundDevice, error::WgcfError, utils::random_hex_string};

/// Number of random bytes used for a generated device name (6 hex characters).
pub const RANDOM_NAME_BYTES: usize = 3;

/// Remote collaborator that changes the display name of the context's bound device.
pub trait BoundDeviceUpdater {
    /// Requests the name change and returns the context's device record from the
    /// service's response, or `None` if the response does not include it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be read.
    fn update_bound_device_name(
        &self,
        ctx: &Context,
        name: &str,
    ) -> impl Future<Output = Result<Option<BoundDevice>, WgcfError>> + Send;
}

/// Renames the context's bound device and confirms the change from the response.
///
/// An empty `device_name` is replaced by a random 6-character hex name. The
/// update is attempted exactly once; errors from `updater` are returned as-is.
///
/// Changing the bound account (e.g. a new license key) resets the device name on
/// the service side.
///
/// # Errors
///
/// Returns the updater's error unchanged, or [`WgcfError::RenameNotConfirmed`] if
/// the response has no record for the device or the record does not carry the
/// requested name.
pub async fn set_device_name<U: BoundDeviceUpdater>(
    updater: &U,
    ctx: &Context,
    device_name: &str,
) -> Result<BoundDevice, WgcfError> {
    let device_name = if device_name.is_empty() {
        random_hex_string(RANDOM_NAME_BYTES)
    } else {
        device_name.to_string()
    };

    match updater.update_bound_device_name(ctx, &device_name).await? {
        Some(device) if device.name.as_deref() == Some(device_name.as_str()) => Ok(device),
        device => Err(WgcfError::RenameNotConfirmed {
            requested: device_name,
            returned: device.and_then(|device| device.name),
        }),
    }
}
