use std::env;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use amdgpu_ips::commands::enumerate_command;
use amdgpu_ips::{should_enumerate, Config};

/// Enumerate AMDGPU IPs.
///
/// This CLI is a thin wrapper around `ipdisc-core`. All substantive logic
/// lives in the library so it can be tested against simulated sysfs trees.
#[derive(Parser, Debug)]
#[command(name = "amdgpu-ips", version, about = "Enumerate AMDGPU IPs", long_about = None)]
struct Cli {
    /// Card index, first by default.
    #[arg(long = "gpu", value_name = "INDEX", default_value_t = 0)]
    gpu: usize,

    /// Enumerate IPs.
    #[arg(long)]
    enumerate: bool,

    /// Print only unique IPs (based on name and version).
    #[arg(short = 'u')]
    unique_ips: bool,

    /// Emit JSON instead of the aligned table.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// DRM sysfs class directory to inspect. Mainly useful for tests.
    #[arg(
        long,
        value_name = "DIR",
        env = "AMDGPU_IPS_SYSFS_ROOT",
        default_value = ipdisc_core::sysfs::DEFAULT_SYSFS_ROOT,
        hide = true
    )]
    sysfs_root: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    // argv beyond the program name; env-provided values do not show up
    // here, which keeps the default action usable under a sysfs override.
    let saw_cli_args = env::args_os().nth(1).is_some();
    let cli = Cli::parse();

    let config = Config {
        card_index: cli.gpu,
        enumerate: cli.enumerate,
        unique_ips: cli.unique_ips,
        json: cli.json,
        sysfs_root: cli.sysfs_root,
    };

    if should_enumerate(&config, saw_cli_args) {
        enumerate_command(&config)?;
    }

    Ok(())
}
