use std::path::PathBuf;

pub mod commands;

/// Parsed command-line configuration.
///
/// Built once at startup and passed explicitly into the commands, instead
/// of consulting global argument state from inside the enumeration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Card ordinal under the sysfs root, first card by default.
    pub card_index: usize,
    /// `--enumerate` was given explicitly.
    pub enumerate: bool,
    /// Deduplicate records by (name, version).
    pub unique_ips: bool,
    /// Emit JSON instead of the aligned table.
    pub json: bool,
    /// DRM class directory, `/sys/class/drm` unless overridden.
    pub sysfs_root: PathBuf,
}

/// Decide whether this invocation should run the enumeration.
///
/// The tool enumerates when asked to (`--enumerate`) and also when invoked
/// with no arguments at all, so a plain `amdgpu-ips` does the obvious
/// thing. Any other argument combination without `--enumerate` is a
/// deliberate no-op. `saw_cli_args` reflects the process argv only;
/// env-provided values (the sysfs-root override) do not suppress the
/// default action.
pub fn should_enumerate(config: &Config, saw_cli_args: bool) -> bool {
    config.enumerate || !saw_cli_args
}
