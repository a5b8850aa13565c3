//! Random names and human-readable formatting.
use rand::RngCore;

const BINARY_UNITS: &[u8] = b"KMGTPEZY";

/// Generates `byte_count` random bytes and returns them as lowercase hex.
///
/// The result is `2 * byte_count` characters long. Not suitable for secrets.
#[must_use]
pub fn random_hex_string(byte_count: usize) -> String {
    let mut bytes = vec![0u8; byte_count];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Formats a byte count with the largest binary unit that keeps the value in `[1, 1024)`.
///
/// ```
/// use wgcf_core::utils::format_bytes;
///
/// assert_eq!(format_bytes(1536.0), "1.50 KiB");
/// assert_eq!(format_bytes(512.0), "512.00 B");
/// ```
#[must_use]
pub fn format_bytes(bytes: f64) -> String {
    for (i, unit) in BINARY_UNITS.iter().enumerate().rev() {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let value = bytes / 1024f64.powi(i as i32 + 1);
        if (1.0..1024.0).contains(&value) {
            return format!("{value:.2} {}iB", char::from(*unit));
        }
    }
    format!("{bytes:.2} B")
}

/// Joins a short and a long message as `short. long`.
///
/// One leading newline is stripped from `long_message` and the remaining
/// newlines are flattened to spaces. Empty parts are skipped.
#[must_use]
pub fn format_message(short_message: &str, long_message: &str) -> String {
    let long_message = long_message
        .strip_prefix('\n')
        .unwrap_or(long_message)
        .replace('\n', " ");
    match (short_message.is_empty(), long_message.is_empty()) {
        (false, false) => format!("{short_message}. {long_message}"),
        (false, true) => short_message.to_string(),
        _ => long_message,
    }
}
