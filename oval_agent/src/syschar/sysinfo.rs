use serde::{Deserialize, Serialize};

/// One network interface of the target host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInterface {
    pub name: String,
    pub ip_address: String,
    #[serde(default)]
    pub mac_address: Option<String>,
}

impl SystemInterface {
    pub fn new(name: impl Into<String>, ip_address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ip_address: ip_address.into(),
            mac_address: None,
        }
    }

    pub fn with_mac(mut self, mac: impl Into<String>) -> Self {
        self.mac_address = Some(mac.into());
        self
    }
}

/// Host identity facts recorded in the system-characteristics model
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os_name: String,
    pub os_version: String,
    pub architecture: String,
    pub primary_host_name: String,
    #[serde(default)]
    pub interfaces: Vec<SystemInterface>,
}

impl SystemInfo {
    pub fn new(primary_host_name: impl Into<String>) -> Self {
        Self {
            primary_host_name: primary_host_name.into(),
            ..Self::default()
        }
    }

    pub fn with_interface(mut self, interface: SystemInterface) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Facts for the local machine as far as the standard library can tell.
    ///
    /// Interfaces are left empty; enumerating them is the collector's job.
    pub fn from_local_host() -> Self {
        let primary_host_name = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "localhost".to_string());

        Self {
            os_name: std::env::consts::OS.to_string(),
            os_version: String::new(),
            architecture: std::env::consts::ARCH.to_string(),
            primary_host_name,
            interfaces: Vec::new(),
        }
    }

    pub fn mac_addresses(&self) -> impl Iterator<Item = &str> {
        self.interfaces
            .iter()
            .filter_map(|i| i.mac_address.as_deref())
    }
}
