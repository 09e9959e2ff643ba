use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── ERRORS ────────────────────────────────────────────────────────────────────

/// Errors that can occur while resolving a topic name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopicError {
    #[error("unknown topic: {0}")]
    Unknown(String),
}

// ─── DOMAIN ────────────────────────────────────────────────────────────────────

/// Exam domain a topic belongs to. Doubles as the bank directory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Infrastructure,
    Architecture,
    Virtualization,
    NetworkAssurance,
    Security,
    Automation,
}

impl Domain {
    /// Directory name under the question bank root.
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            Domain::Infrastructure => "infrastructure",
            Domain::Architecture => "architecture",
            Domain::Virtualization => "virtualization",
            Domain::NetworkAssurance => "network_assurance",
            Domain::Security => "security",
            Domain::Automation => "automation",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

// ─── TOPIC ─────────────────────────────────────────────────────────────────────

/// One of the fixed CCNP exam topics the trainer knows about.
///
/// The set and its presentation order are part of the user-facing contract:
/// the welcome screen lists topics in exactly the order of [`Topic::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Topic {
    Ospf,
    Bgp,
    Eigrp,
    Stp,
    Vlans,
    Wlan,
    SdWan,
    SdAccess,
    Vrf,
    Gre,
    NetFlow,
    SpanRspanErspan,
    IpSla,
    Snmp,
    Syslog,
    DeviceAccessControl,
    InfrastructureSecurity,
    RestApiSecurity,
    WirelessSecurity,
    Python,
    Json,
    RestApis,
}

impl Topic {
    /// All topics in presentation order.
    pub const ALL: [Topic; 22] = [
        Topic::Ospf,
        Topic::Bgp,
        Topic::Eigrp,
        Topic::Stp,
        Topic::Vlans,
        Topic::Wlan,
        Topic::SdWan,
        Topic::SdAccess,
        Topic::Vrf,
        Topic::Gre,
        Topic::NetFlow,
        Topic::SpanRspanErspan,
        Topic::IpSla,
        Topic::Snmp,
        Topic::Syslog,
        Topic::DeviceAccessControl,
        Topic::InfrastructureSecurity,
        Topic::RestApiSecurity,
        Topic::WirelessSecurity,
        Topic::Python,
        Topic::Json,
        Topic::RestApis,
    ];

    /// Canonical display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Topic::Ospf => "OSPF",
            Topic::Bgp => "BGP",
            Topic::Eigrp => "EIGRP",
            Topic::Stp => "STP",
            Topic::Vlans => "VLANs",
            Topic::Wlan => "WLAN",
            Topic::SdWan => "SD-WAN",
            Topic::SdAccess => "SD-Access",
            Topic::Vrf => "VRF",
            Topic::Gre => "GRE",
            Topic::NetFlow => "NetFlow",
            Topic::SpanRspanErspan => "SPAN/RSPAN/ERSPAN",
            Topic::IpSla => "IPSLA",
            Topic::Snmp => "SNMP",
            Topic::Syslog => "Syslog",
            Topic::DeviceAccessControl => "Device Access Control",
            Topic::InfrastructureSecurity => "Infrastructure Security",
            Topic::RestApiSecurity => "REST API Security",
            Topic::WirelessSecurity => "Wireless Security",
            Topic::Python => "Python",
            Topic::Json => "JSON",
            Topic::RestApis => "REST APIs",
        }
    }

    /// Exam domain this topic belongs to.
    #[must_use]
    pub fn domain(self) -> Domain {
        match self {
            Topic::Ospf | Topic::Bgp | Topic::Eigrp | Topic::Stp | Topic::Vlans => {
                Domain::Infrastructure
            }
            Topic::Wlan | Topic::SdWan | Topic::SdAccess => Domain::Architecture,
            Topic::Vrf | Topic::Gre => Domain::Virtualization,
            Topic::NetFlow
            | Topic::SpanRspanErspan
            | Topic::IpSla
            | Topic::Snmp
            | Topic::Syslog => Domain::NetworkAssurance,
            Topic::DeviceAccessControl
            | Topic::InfrastructureSecurity
            | Topic::RestApiSecurity
            | Topic::WirelessSecurity => Domain::Security,
            Topic::Python | Topic::Json | Topic::RestApis => Domain::Automation,
        }
    }

    /// Bank location relative to the bank root: the domain directory joined
    /// with the lowercased canonical name plus a `.json` extension. Names
    /// containing `/` (such as "SPAN/RSPAN/ERSPAN") deliberately map to
    /// nested paths.
    #[must_use]
    pub fn bank_path(self) -> PathBuf {
        PathBuf::from(self.domain().dir_name())
            .join(format!("{}.json", self.name().to_ascii_lowercase()))
    }

    /// Resolve a user-supplied name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::Unknown` when the name matches no known topic.
    pub fn resolve(input: &str) -> Result<Self, TopicError> {
        Self::ALL
            .into_iter()
            .find(|topic| topic.name().eq_ignore_ascii_case(input))
            .ok_or_else(|| TopicError::Unknown(input.to_string()))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topic {
    type Err = TopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.name().to_string()
    }
}

impl TryFrom<String> for Topic {
    type Error = TopicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::resolve(&value)
    }
}

// ─── TESTS ─────────────────────────────────────────────────────────────────────
