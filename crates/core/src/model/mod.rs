//! Data model for discovered IP blocks.

use serde::{Deserialize, Serialize};

/// One discovered placement of a hardware IP block.
///
/// Every field holds the text read from sysfs: versions are compared and
/// printed as strings, and `base_addr` is an opaque address token that is
/// never interpreted as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRecord {
    /// IP block name, taken from the block's directory name in the
    /// discovery tree (e.g. `GC`, `MMHUB`).
    pub name: String,
    /// Version formatted as `major.minor.revision`.
    pub version: String,
    /// One base address of one instance of this block.
    pub base_addr: String,
}

impl IpRecord {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        base_addr: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), version: version.into(), base_addr: base_addr.into() }
    }

    /// Whether `self` describes the same block at the same version as the
    /// given (name, version) pair, regardless of base address.
    pub fn same_ip(&self, name: &str, version: &str) -> bool {
        self.name == name && self.version == version
    }
}
