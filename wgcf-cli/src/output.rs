//! Human-readable device summary.

use wgcf_core::{format_reserved_lossy, utils::format_bytes, BoundDevice, Device};

const RULE: &str = "=======================================";

/// Labelled rows describing the registered device and its account.
pub fn device_summary(device: &Device, bound_device: &BoundDevice) -> Vec<(&'static str, String)> {
    vec![
        ("Device name", bound_device.name.clone().unwrap_or_default()),
        ("Device model", device.model.clone()),
        ("Device active", bound_device.active.to_string()),
        ("Account type", device.account.account_type.clone()),
        ("Role", device.account.role.clone()),
        ("Client ID", device.config.client_id.clone()),
        ("Reserved Bits", format_reserved_lossy(&device.config.client_id)),
        ("Premium data", format_bytes(device.account.premium_data)),
        ("Quota", format_bytes(device.account.quota)),
    ]
}

/// Renders the summary rows as an aligned table between rules.
pub fn render_device_summary(device: &Device, bound_device: &BoundDevice) -> String {
    let mut lines = vec![RULE.to_string()];
    lines.extend(
        device_summary(device, bound_device)
            .into_iter()
            .map(|(label, value)| format!("{label:<13} : {value}")),
    );
    lines.push(RULE.to_string());
    lines.join("\n")
}

/// Prints the device summary to stdout.
pub fn print_device_summary(device: &Device, bound_device: &BoundDevice) {
    println!("{}", render_device_summary(device, bound_device));
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgcf_core::device::{Account, DeviceConfig};

    fn device(client_id: &str) -> Device {
        Device {
            id: "dev-1".to_string(),
            device_type: "Android".to_string(),
            model: "PC".to_string(),
            name: String::new(),
            key: "pubkey".to_string(),
            account: Account {
                id: "acc".to_string(),
                account_type: "limited".to_string(),
                role: "child".to_string(),
                premium_data: 1_572_864.0,
                quota: 0.0,
                license: "lic".to_string(),
            },
            config: DeviceConfig {
                client_id: client_id.to_string(),
                peers: vec![],
                interface: None,
            },
            warp_enabled: true,
            created: String::new(),
            updated: String::new(),
        }
    }

    fn bound_device(name: Option<&str>) -> BoundDevice {
        BoundDevice {
            id: "dev-1".to_string(),
            model: "PC".to_string(),
            created: String::new(),
            updated: String::new(),
            name: name.map(ToString::to_string),
            device_type: "Android".to_string(),
            active: true,
            role: "child".to_string(),
        }
    }

    #[test]
    fn test_render_device_summary() {
        let rendered = render_device_summary(&device("AQID"), &bound_device(Some("laptop")));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], RULE);
        assert_eq!(lines[1], "Device name   : laptop");
        assert_eq!(lines[3], "Device active : true");
        assert_eq!(lines[7], "Reserved Bits : [ 1, 2, 3 ]");
        assert_eq!(lines[8], "Premium data  : 1.50 MiB");
        assert_eq!(lines[9], "Quota         : 0.00 B");
        assert_eq!(lines[10], RULE);
    }

    #[test]
    fn test_summary_tolerates_bad_client_id() {
        let rows = device_summary(&device("!!!"), &bound_device(None));
        assert!(rows.contains(&("Reserved Bits", "[  ]".to_string())));
        assert!(rows.contains(&("Device name", String::new())));
    }
}
