//! Sysfs access layer for DRM cards.
//!
//! Everything here is rooted at an injectable class directory so the rest
//! of the crate can run against simulated trees in tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

/// DRM class directory on a real Linux host.
pub const DEFAULT_SYSFS_ROOT: &str = "/sys/class/drm";

/// Logical layout of the DRM sysfs class directory.
///
/// Derived from a chosen root path. Construction does not perform any IO;
/// only the accessors below touch the filesystem.
#[derive(Debug, Clone)]
pub struct DrmLayout {
    /// The DRM class directory, [`DEFAULT_SYSFS_ROOT`] unless overridden.
    pub root: PathBuf,
}

impl DrmLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    /// List card directories (`card0`..`card9`) in directory-listing order.
    ///
    /// The kernel does not guarantee any particular ordering; callers
    /// address cards by ordinal into whatever order the listing yields.
    /// Entries that are not single-digit cards (`card10`, `renderD128`,
    /// `card0-DP-1`) are skipped. A missing class directory means there
    /// are no cards, not that the listing failed.
    pub fn cards(&self) -> io::Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };

        let mut cards = Vec::new();
        for entry in entries {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                if is_card_name(name) {
                    cards.push(entry.path());
                }
            }
        }
        debug!("found {} card(s) under {}", cards.len(), self.root.display());
        Ok(cards)
    }
}

/// `card` followed by exactly one ASCII digit.
fn is_card_name(name: &str) -> bool {
    match name.strip_prefix("card") {
        Some(rest) => rest.len() == 1 && rest.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// IP discovery die directory of one card.
pub fn discovery_die_dir(card: &Path) -> PathBuf {
    card.join("device").join("ip_discovery").join("die")
}

/// Read a sysfs attribute that carries a single value on its first line,
/// trimmed of surrounding whitespace.
pub fn read_first_line(path: &Path) -> io::Result<String> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().next().unwrap_or("").trim().to_string())
}

/// Read a sysfs attribute that carries one value per line.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}
