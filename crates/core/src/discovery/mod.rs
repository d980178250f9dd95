//! Walking the kernel's IP discovery tree.
//!
//! The amdgpu driver exposes discovered IP blocks under
//! `<card>/device/ip_discovery/die/<die>/<BLOCK>/<instance>/`, where
//! `<BLOCK>` is a symlink into the shared instance definitions and each
//! instance directory carries `major`, `minor`, `revision` and
//! `base_addr` text attributes (`base_addr` may hold several addresses,
//! one per line).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::model::IpRecord;
use crate::sysfs::{self, DrmLayout};

/// Error type for card selection and discovery-tree traversal.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// No card directory matched, or the requested ordinal is out of range.
    #[error("No card found!")]
    NoCardFound,

    /// The card exists but exposes no `ip_discovery` directory. IP
    /// discovery landed in Linux 5.18; older kernels never populate it.
    #[error("GPU IP discovery not supported! Old kernel?")]
    NotSupported,

    /// Reading an entry underneath an existing discovery root failed.
    /// The tree is assumed consistent once the root exists, so this
    /// aborts the enumeration instead of skipping the instance.
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DiscoveryError {
    fn read(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> DiscoveryError {
        let path = path.into();
        move |source| DiscoveryError::Read { path, source }
    }
}

/// Select one card by ordinal index, in directory-listing order.
pub fn detect_card(layout: &DrmLayout, card_index: usize) -> Result<PathBuf, DiscoveryError> {
    let cards = layout.cards().map_err(DiscoveryError::read(&layout.root))?;
    cards.into_iter().nth(card_index).ok_or(DiscoveryError::NoCardFound)
}

/// Walk the discovery tree of `card` and collect one record per
/// (block, instance, base address) combination.
///
/// With `unique_ips` set, a record whose (name, version) pair is already
/// in the accumulated list is dropped; the first one seen in traversal
/// order survives. Records come back in raw traversal order; presentation
/// ordering is [`crate::report::sort_records`]'s job.
pub fn enumerate_ips(card: &Path, unique_ips: bool) -> Result<Vec<IpRecord>, DiscoveryError> {
    let die_root = sysfs::discovery_die_dir(card);
    if !die_root.exists() {
        return Err(DiscoveryError::NotSupported);
    }

    // Every ASIC that reports discovery data so far has a single die, and
    // the kernel numbers it 0.
    let die = die_root.join("0");
    let entries = fs::read_dir(&die).map_err(DiscoveryError::read(&die))?;

    let mut ips = Vec::new();
    for entry in entries {
        let entry = entry.map_err(DiscoveryError::read(&die))?;
        let file_type = entry.file_type().map_err(DiscoveryError::read(entry.path()))?;
        // Only symlinked entries are IP blocks; the kernel links each
        // block name to its instance definitions. Anything else in the
        // die directory is skipped.
        if !file_type.is_symlink() {
            continue;
        }
        let block_path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        collect_block(&block_path, &name, unique_ips, &mut ips)?;
    }
    Ok(ips)
}

/// Collect the records of a single IP block directory into `ips`.
fn collect_block(
    block_path: &Path,
    name: &str,
    unique_ips: bool,
    ips: &mut Vec<IpRecord>,
) -> Result<(), DiscoveryError> {
    let entries = fs::read_dir(block_path).map_err(DiscoveryError::read(block_path))?;
    for entry in entries {
        let entry = entry.map_err(DiscoveryError::read(block_path))?;
        let instance = entry.path();
        if !instance.is_dir() {
            continue;
        }

        let version = read_version(&instance)?;
        let addr_path = instance.join("base_addr");
        let base_addrs = sysfs::read_lines(&addr_path).map_err(DiscoveryError::read(addr_path))?;
        debug!(
            "{} instance {}: version {}, {} base address(es)",
            name,
            instance.display(),
            version,
            base_addrs.len()
        );

        for base_addr in base_addrs {
            if unique_ips && ips.iter().any(|ip| ip.same_ip(name, &version)) {
                continue;
            }
            ips.push(IpRecord::new(name, &version, base_addr));
        }
    }
    Ok(())
}

/// Join the `major`, `minor` and `revision` attributes of one instance
/// into a dotted version string.
fn read_version(instance: &Path) -> Result<String, DiscoveryError> {
    let read = |attr: &str| {
        let path = instance.join(attr);
        sysfs::read_first_line(&path).map_err(DiscoveryError::read(path))
    };
    Ok(format!("{}.{}.{}", read("major")?, read("minor")?, read("revision")?))
}
