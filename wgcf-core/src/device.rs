//! Device records returned by the provisioning service.
use serde::{Deserialize, Serialize};

/// A device bound to the account, as listed by the account's device endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundDevice {
    /// Registration identifier.
    pub id: String,
    /// Device model reported at registration.
    #[serde(default)]
    pub model: String,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created: String,
    /// Last update timestamp (RFC 3339).
    #[serde(default)]
    pub updated: String,
    /// Display name. The service resets it when the bound account changes.
    #[serde(default)]
    pub name: Option<String>,
    /// Device platform type.
    #[serde(rename = "type", default)]
    pub device_type: String,
    /// Whether the device is active on the account.
    #[serde(default)]
    pub active: bool,
    /// Role of the device on the account.
    #[serde(default)]
    pub role: String,
}

/// The registered device seen from its own registration endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Registration identifier.
    pub id: String,
    /// Device platform type.
    #[serde(rename = "type", default)]
    pub device_type: String,
    /// Device model reported at registration.
    #[serde(default)]
    pub model: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// WireGuard public key registered for the device.
    #[serde(default)]
    pub key: String,
    /// The account the device is bound to.
    pub account: Account,
    /// Transport configuration issued to the device.
    pub config: DeviceConfig,
    /// Whether WARP is enabled for the device.
    #[serde(default)]
    pub warp_enabled: bool,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created: String,
    /// Last update timestamp (RFC 3339).
    #[serde(default)]
    pub updated: String,
}

/// The account a device is bound to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier.
    pub id: String,
    /// Account plan, e.g. `free` or `limited`.
    #[serde(default)]
    pub account_type: String,
    /// Role of the caller on the account.
    #[serde(default)]
    pub role: String,
    /// Remaining premium data, in bytes.
    #[serde(default)]
    pub premium_data: f64,
    /// Total data quota, in bytes.
    #[serde(default)]
    pub quota: f64,
    /// License key of the account.
    #[serde(default)]
    pub license: String,
}

/// Transport configuration issued to a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Base64 client identifier; its trailing bytes fill the protocol's reserved field.
    #[serde(default)]
    pub client_id: String,
    /// Peers the device may connect to.
    #[serde(default)]
    pub peers: Vec<Peer>,
    /// Addresses assigned to the device's interface.
    #[serde(default)]
    pub interface: Option<Interface>,
}

/// A WireGuard peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    /// Peer public key.
    pub public_key: String,
    /// Peer endpoint.
    pub endpoint: Endpoint,
}

/// Endpoint addresses of a peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// IPv4 endpoint with port.
    #[serde(default)]
    pub v4: String,
    /// IPv6 endpoint with port.
    #[serde(default)]
    pub v6: String,
    /// Hostname endpoint with port.
    #[serde(default)]
    pub host: String,
}

/// Interface addressing of a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    /// Assigned addresses.
    pub addresses: Addresses,
}

/// Assigned interface addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addresses {
    /// IPv4 address.
    #[serde(default)]
    pub v4: String,
    /// IPv6 address.
    #[serde(default)]
    pub v6: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_device_null_name() {
        let device: BoundDevice = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "model": "PC",
            "name": null,
            "type": "Android",
            "active": true,
            "role": "child",
            "unknown_field": 1
        }))
        .unwrap();
        assert_eq!(device.name, None);
        assert_eq!(device.device_type, "Android");
        assert!(device.active);
    }

    #[test]
    fn test_device_parses_client_id() {
        let device: Device = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "type": "Android",
            "model": "PC",
            "name": "",
            "key": "pubkey",
            "account": {
                "id": "acc",
                "account_type": "free",
                "role": "parent",
                "premium_data": 0,
                "quota": 0,
                "license": "lic"
            },
            "config": {
                "client_id": "AAAA",
                "peers": [{
                    "public_key": "peerkey",
                    "endpoint": {
                        "v4": "162.159.192.1:0",
                        "v6": "[2606:4700:d0::a29f:c001]:0",
                        "host": "engage.cloudflareclient.com:2408"
                    }
                }],
                "interface": { "addresses": { "v4": "172.16.0.2", "v6": "2606:4700::1" } }
            },
            "warp_enabled": true
        }))
        .unwrap();
        assert_eq!(device.config.client_id, "AAAA");
        assert_eq!(device.config.peers.len(), 1);
        assert_eq!(device.account.account_type, "free");
    }
}
