//! Rename confirmation against stubbed provisioning services.

use std::sync::Mutex;

use wgcf_core::{
    set_device_name, BoundDevice, BoundDeviceUpdater, Context, WgcfError, RANDOM_NAME_BYTES,
};

fn bound_device(name: Option<&str>) -> BoundDevice {
    BoundDevice {
        id: "dev-1".to_string(),
        model: "PC".to_string(),
        created: "2024-01-01T00:00:00Z".to_string(),
        updated: "2024-01-01T00:00:00Z".to_string(),
        name: name.map(ToString::to_string),
        device_type: "Android".to_string(),
        active: true,
        role: "child".to_string(),
    }
}

/// What the stub answers with.
enum Reply {
    Echo,
    Name(Option<&'static str>),
    Missing,
    Fail,
}

struct StubUpdater {
    reply: Reply,
    requested: Mutex<Vec<String>>,
}

impl StubUpdater {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            requested: Mutex::new(Vec::new()),
        }
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl BoundDeviceUpdater for StubUpdater {
    async fn update_bound_device_name(
        &self,
        _ctx: &Context,
        name: &str,
    ) -> Result<Option<BoundDevice>, WgcfError> {
        self.requested.lock().unwrap().push(name.to_string());
        match self.reply {
            Reply::Echo => Ok(Some(bound_device(Some(name)))),
            Reply::Name(name) => Ok(Some(bound_device(name))),
            Reply::Missing => Ok(None),
            Reply::Fail => Err(WgcfError::NetworkError {
                url: "https://api.example.com".to_string(),
                status: Some(401),
                error: "unauthorized".to_string(),
            }),
        }
    }
}

fn ctx() -> Context {
    Context::new("dev-1", "token")
}

#[tokio::test]
async fn test_confirmed_rename_returns_record() {
    let updater = StubUpdater::new(Reply::Echo);
    let device = set_device_name(&updater, &ctx(), "laptop").await.unwrap();
    assert_eq!(device, bound_device(Some("laptop")));
    assert_eq!(updater.requested(), vec!["laptop"]);
}

#[tokio::test]
async fn test_empty_name_is_replaced_with_random_hex() {
    let updater = StubUpdater::new(Reply::Echo);
    let first = set_device_name(&updater, &ctx(), "").await.unwrap();
    let second = set_device_name(&updater, &ctx(), "").await.unwrap();

    let requested = updater.requested();
    assert_eq!(requested.len(), 2);
    for name in &requested {
        assert_eq!(name.len(), RANDOM_NAME_BYTES * 2);
        assert!(name.chars().all(|c| c.is_ascii_hexdigit()));
    }
    assert_ne!(requested[0], requested[1]);
    assert_eq!(first.name.as_deref(), Some(requested[0].as_str()));
    assert_eq!(second.name.as_deref(), Some(requested[1].as_str()));
}

#[tokio::test]
async fn test_missing_name_is_not_confirmed() {
    let updater = StubUpdater::new(Reply::Name(None));
    let err = set_device_name(&updater, &ctx(), "laptop").await.unwrap_err();
    assert!(matches!(
        err,
        WgcfError::RenameNotConfirmed { ref requested, returned: None } if requested == "laptop"
    ));
    assert_eq!(err.to_string().split(" (").next(), Some("could not update device name"));
}

#[tokio::test]
async fn test_missing_record_is_not_confirmed() {
    let updater = StubUpdater::new(Reply::Missing);
    let err = set_device_name(&updater, &ctx(), "laptop").await.unwrap_err();
    assert!(matches!(
        err,
        WgcfError::RenameNotConfirmed { ref requested, returned: None } if requested == "laptop"
    ));
    assert_eq!(updater.requested(), vec!["laptop"]);
}

#[tokio::test]
async fn test_different_name_is_not_confirmed() {
    let updater = StubUpdater::new(Reply::Name(Some("phone")));
    let err = set_device_name(&updater, &ctx(), "laptop").await.unwrap_err();
    assert!(matches!(
        err,
        WgcfError::RenameNotConfirmed { returned: Some(ref name), .. } if name == "phone"
    ));
}

#[tokio::test]
async fn test_transport_error_is_passed_through() {
    let updater = StubUpdater::new(Reply::Fail);
    let err = set_device_name(&updater, &ctx(), "laptop").await.unwrap_err();
    assert!(matches!(
        err,
        WgcfError::NetworkError { status: Some(401), ref error, .. } if error == "unauthorized"
    ));
    assert_eq!(updater.requested().len(), 1);
}
