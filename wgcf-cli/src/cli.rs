//! Argument parsing and command dispatch.

use clap::{Args, Parser, Subcommand};
use eyre::{bail, WrapErr};
use wgcf_core::{
    decode_client_id, format_reserved_lossy, set_device_name, CloudflareClient, Context,
};

use crate::output;

/// Inspect and rename a WARP device identity.
#[derive(Parser)]
#[command(name = "wgcf", version, about)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args)]
pub struct GlobalOptions {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Registration API endpoint.
    #[arg(long, env = "WGCF_API_URL", global = true)]
    pub api_url: Option<String>,

    #[command(flatten)]
    pub account: AccountArgs,
}

/// Stored account credentials.
#[derive(Args)]
pub struct AccountArgs {
    /// Registered device id.
    #[arg(long, env = "WGCF_DEVICE_ID", global = true, default_value = "")]
    pub device_id: String,

    /// Access token issued at registration.
    #[arg(long, env = "WGCF_ACCESS_TOKEN", global = true, hide_env_values = true)]
    pub access_token: Option<String>,

    /// WireGuard private key of the device.
    #[arg(long, env = "WGCF_PRIVATE_KEY", global = true, hide_env_values = true)]
    pub private_key: Option<String>,

    /// Account license key.
    #[arg(long, env = "WGCF_LICENSE_KEY", global = true, hide_env_values = true)]
    pub license_key: Option<String>,
}

impl AccountArgs {
    /// Builds the request context from the stored credentials.
    pub fn context(&self) -> Context {
        let token = self.access_token.as_deref().unwrap_or_default();
        let mut ctx = Context::new(self.device_id.as_str(), token);
        if let Some(key) = &self.private_key {
            ctx = ctx.with_private_key(key.as_str());
        }
        if let Some(key) = &self.license_key {
            ctx = ctx.with_license_key(key.as_str());
        }
        ctx
    }
}

/// Available commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the reserved bytes encoded in a client id.
    Reserved {
        /// Base64 client id, as found in the device config.
        client_id: String,

        /// Print `[  ]` for a malformed client id instead of failing.
        #[arg(long)]
        lossy: bool,
    },
    /// Rename the registered device and confirm the change.
    Rename {
        /// New device name; a random one is generated when omitted.
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Print the registered device's summary.
    Status,
}

impl Cli {
    /// Runs the selected command.
    pub async fn run(self) -> eyre::Result<()> {
        match self.command {
            Command::Reserved { client_id, lossy } => {
                if lossy {
                    println!("{}", format_reserved_lossy(&client_id));
                    return Ok(());
                }
                let bytes = decode_client_id(&client_id).wrap_err("invalid client id")?;
                println!("{bytes}");
                tracing::debug!(
                    hex = %bytes.to_hex(),
                    triplets = ?bytes.triplets(),
                    "decoded client id"
                );
                Ok(())
            }
            Command::Rename { name } => {
                let (client, ctx) = connect(&self.global)?;
                let device = set_device_name(&client, &ctx, &name)
                    .await
                    .wrap_err("failed to rename device")?;
                tracing::info!(
                    "Device name set to {}",
                    device.name.as_deref().unwrap_or_default()
                );
                Ok(())
            }
            Command::Status => {
                let (client, ctx) = connect(&self.global)?;
                let device = client
                    .get_source_device(&ctx)
                    .await
                    .wrap_err("failed to get device")?;
                let bound_device = client
                    .get_source_bound_device(&ctx)
                    .await
                    .wrap_err("failed to get bound device")?;
                if ctx.license_key().is_some_and(|key| key != device.account.license) {
                    tracing::warn!("configured license key differs from the account's license");
                }
                output::print_device_summary(&device, &bound_device);
                Ok(())
            }
        }
    }
}

fn connect(global: &GlobalOptions) -> eyre::Result<(CloudflareClient, Context)> {
    let ctx = global.account.context();
    if !ctx.is_valid_account() {
        bail!("no valid account: set WGCF_DEVICE_ID, WGCF_ACCESS_TOKEN and WGCF_PRIVATE_KEY");
    }
    let client = match &global.api_url {
        Some(url) => CloudflareClient::with_base_url(url).wrap_err("invalid api url")?,
        None => CloudflareClient::new(),
    };
    Ok((client, ctx))
}
