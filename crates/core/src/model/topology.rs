use serde::{Deserialize, Serialize};

// ─── TOPOLOGY ──────────────────────────────────────────────────────────────────

/// Lab topology description consumed by the remediation generator.
///
/// Only routers and their interfaces matter here; link records and any other
/// fields present in the document are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub routers: Vec<Router>,
}

/// A routed device and its addressable interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Router {
    pub name: String,
    pub interfaces: Vec<Interface>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    pub ip_address: String,
    pub subnet_mask: String,
}

impl Router {
    /// Derive the OSPF router id from the device name: strip the non-digit
    /// prefix and repeat the remaining digits four times, dot-separated
    /// ("R1" becomes "1.1.1.1", "R10" becomes "10.10.10.10").
    #[must_use]
    pub fn router_id(&self) -> String {
        let digits = self.name.trim_start_matches(|c: char| !c.is_ascii_digit());
        format!("{digits}.{digits}.{digits}.{digits}")
    }
}

// ─── TESTS ─────────────────────────────────────────────────────────────────────
