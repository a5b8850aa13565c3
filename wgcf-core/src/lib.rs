//! Core functionality for a WARP device identity: decoding the client identifier into
//! the transport's reserved bytes, and renaming the bound device with confirmation.
//!
//! ```no_run
//! use wgcf_core::{set_device_name, CloudflareClient, Context};
//!
//! # async fn rename() -> Result<(), wgcf_core::WgcfError> {
//! let ctx = Context::new("device-id", "access-token");
//! let device = set_device_name(&CloudflareClient::new(), &ctx, "laptop").await?;
//! assert_eq!(device.name.as_deref(), Some("laptop"));
//! # Ok(())
//! # }
//! ```
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod client_id;
pub use client_id::{decode_client_id, format_reserved, format_reserved_lossy, ReservedBytes};

mod cloudflare;
pub use cloudflare::*;

mod context;
pub use context::*;

pub mod device;
pub use device::{BoundDevice, Device};

mod error;
pub use error::*;

mod rename;
pub use rename::*;

pub mod utils;

// private modules
mod http_request;
