//! Client for the WARP device registration API.
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::{
    context::Context,
    device::{BoundDevice, Device},
    error::WgcfError,
    http_request::Request,
    rename::BoundDeviceUpdater,
};

/// Production endpoint of the registration API.
pub const DEFAULT_BASE_URL: &str = "https://api.cloudflareclient.com";

/// API version path segment.
pub const API_VERSION: &str = "v0a1922";

/// Registration API client.
pub struct CloudflareClient {
    base_url: String,
    request: Request,
}

impl Default for CloudflareClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CloudflareClient {
    /// Creates a client for the production endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request: Request::new(),
        }
    }

    /// Creates a client for a custom endpoint, e.g. a staging deployment.
    ///
    /// # Errors
    ///
    /// Returns [`WgcfError::InvalidInput`] if `base_url` is not an HTTPS URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, WgcfError> {
        // mock servers in unit tests only speak plain HTTP
        let allowed = base_url.starts_with("https://")
            || (cfg!(test) && base_url.starts_with("http://"));
        if !allowed {
            return Err(WgcfError::InvalidInput {
                attribute: "base_url".to_string(),
                reason: "must be an https URL".to_string(),
            });
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request: Request::new(),
        })
    }

    fn reg_url(&self, ctx: &Context) -> String {
        format!("{}/{API_VERSION}/reg/{}", self.base_url, ctx.device_id())
    }

    /// Fetches the context's own device registration.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status or an invalid response.
    pub async fn get_source_device(&self, ctx: &Context) -> Result<Device, WgcfError> {
        let url = self.reg_url(ctx);
        let builder = self.request.get(&url).bearer_auth(ctx.access_token());
        self.send_json(&url, builder).await
    }

    /// Lists every device bound to the context's account.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status or an invalid response.
    pub async fn get_bound_devices(&self, ctx: &Context) -> Result<Vec<BoundDevice>, WgcfError> {
        let url = format!("{}/account/devices", self.reg_url(ctx));
        let builder = self.request.get(&url).bearer_auth(ctx.access_token());
        self.send_json(&url, builder).await
    }

    /// Returns the account's record for the context's own device.
    ///
    /// # Errors
    ///
    /// Returns [`WgcfError::DeviceNotFound`] if the account does not list the device,
    /// or any error from [`Self::get_bound_devices`].
    pub async fn get_source_bound_device(&self, ctx: &Context) -> Result<BoundDevice, WgcfError> {
        let devices = self.get_bound_devices(ctx).await?;
        find_device(devices, ctx.device_id()).ok_or_else(|| WgcfError::DeviceNotFound {
            device_id: ctx.device_id().to_string(),
        })
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        url: &str,
        builder: RequestBuilder,
    ) -> Result<T, WgcfError> {
        self.request
            .send(builder)
            .await?
            .json()
            .await
            .map_err(|e| WgcfError::SerializationError {
                error: format!("Failed to parse response from {url}: {e}"),
            })
    }
}

impl BoundDeviceUpdater for CloudflareClient {
    async fn update_bound_device_name(
        &self,
        ctx: &Context,
        name: &str,
    ) -> Result<Option<BoundDevice>, WgcfError> {
        let url = format!("{}/account/reg/{}", self.reg_url(ctx), ctx.device_id());
        let builder = self
            .request
            .patch(&url)
            .bearer_auth(ctx.access_token())
            .json(&json!({ "name": name }));
        let devices: Vec<BoundDevice> = self.send_json(&url, builder).await?;
        Ok(find_device(devices, ctx.device_id()))
    }
}

fn find_device(devices: Vec<BoundDevice>, device_id: &str) -> Option<BoundDevice> {
    devices.into_iter().find(|device| device.id == device_id)
}
