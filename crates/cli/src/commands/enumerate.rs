use anyhow::Result;

use ipdisc_core::discovery::{detect_card, enumerate_ips};
use ipdisc_core::report;
use ipdisc_core::sysfs::DrmLayout;

use crate::Config;

/// Enumerate the selected card's IP blocks and print them.
///
/// Records are sorted by base address before printing. With `json` set
/// the records are emitted as pretty-printed JSON instead of the aligned
/// table; sorting and deduplication apply the same either way. An empty
/// result set prints nothing and succeeds.
///
/// Nothing is printed until the whole traversal has succeeded, so a
/// failing card never produces partial output.
pub fn enumerate_command(config: &Config) -> Result<()> {
    let layout = DrmLayout::new(&config.sysfs_root);
    let card = detect_card(&layout, config.card_index)?;
    let mut ips = enumerate_ips(&card, config.unique_ips)?;
    report::sort_records(&mut ips);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&ips)?);
        return Ok(());
    }

    for row in report::render_rows(&ips) {
        println!("{row}");
    }

    Ok(())
}
