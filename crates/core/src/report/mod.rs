//! Presentation helpers for enumerated IP records.

use crate::model::IpRecord;

/// Column widths for the aligned text table.
///
/// Widths are global maxima over the whole record set so every row lines
/// up. An empty set yields zero widths, and rendering it yields no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub name: usize,
    pub version: usize,
}

impl ColumnWidths {
    pub fn of(records: &[IpRecord]) -> Self {
        Self {
            name: records.iter().map(|ip| ip.name.len()).max().unwrap_or(0),
            version: records.iter().map(|ip| ip.version.len()).max().unwrap_or(0),
        }
    }
}

/// Sort records by base address.
///
/// The comparison is plain lexical string ordering, never numeric: the
/// address tokens are opaque text, so `"0x10"` sorts before `"0x2"`. The
/// sort is stable and records sharing an address keep traversal order.
pub fn sort_records(records: &mut [IpRecord]) {
    records.sort_by(|a, b| a.base_addr.cmp(&b.base_addr));
}

/// Render one line per record: name right-justified, version
/// left-justified, then the base address, separated by single spaces.
pub fn render_rows(records: &[IpRecord]) -> Vec<String> {
    let widths = ColumnWidths::of(records);
    records
        .iter()
        .map(|ip| {
            format!(
                "{:>name_w$} {:<version_w$} {}",
                ip.name,
                ip.version,
                ip.base_addr,
                name_w = widths.name,
                version_w = widths.version
            )
        })
        .collect()
}
