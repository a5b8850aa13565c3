use secrecy::{ExposeSecret, SecretString};

/// Credentials for authenticated calls against the provisioning service.
///
/// A plain value record built by the caller, usually from stored account
/// configuration. Secrets are redacted from `Debug` output.
#[derive(Debug)]
pub struct Context {
    device_id: String,
    access_token: SecretString,
    license_key: Option<SecretString>,
    private_key: Option<SecretString>,
}

impl Context {
    /// Creates a context for the registered device `device_id`.
    #[must_use]
    pub fn new(device_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            access_token: SecretString::from(access_token.into()),
            license_key: None,
            private_key: None,
        }
    }

    /// Attaches the account license key.
    #[must_use]
    pub fn with_license_key(mut self, license_key: impl Into<String>) -> Self {
        self.license_key = Some(SecretString::from(license_key.into()));
        self
    }

    /// Attaches the device's WireGuard private key.
    #[must_use]
    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(SecretString::from(private_key.into()));
        self
    }

    /// The registered device identifier.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// The bearer token for the provisioning service.
    #[must_use]
    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }

    /// The account license key, if one was provided.
    #[must_use]
    pub fn license_key(&self) -> Option<&str> {
        self.license_key.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Whether the context describes a usable account: device id, access token and
    /// private key are all present and non-empty.
    #[must_use]
    pub fn is_valid_account(&self) -> bool {
        !self.device_id.is_empty()
            && !self.access_token.expose_secret().is_empty()
            && self
                .private_key
                .as_ref()
                .is_some_and(|key| !key.expose_secret().is_empty())
    }
}
