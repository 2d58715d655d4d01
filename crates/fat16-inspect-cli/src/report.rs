//! Fixed width text rendering of the decoded structures

use std::fmt::Write;

use fat16_inspect::{
    structures::{boot_sector::BootSector, directory::FileAttributes},
    RootEntry,
};

const PAD_NAME: usize = 23;
const PAD_VALUE: usize = 12;
const PAD_COLUMN: usize = 20;

/// The boot sector table, one right aligned `name value` row per field, in on-disk order
pub fn boot_sector_table(bs: &BootSector) -> String {
    let rows: [(&str, String); 16] = [
        ("oem name", bs.oem_name.to_string()),
        ("sector size", bs.bytes_per_sector.to_string()),
        ("sectors per cluster", bs.sectors_per_cluster.to_string()),
        ("reserved sectors", bs.reserved_sector_count.to_string()),
        ("fats number", bs.fat_count.to_string()),
        ("root entries", bs.root_entry_count.to_string()),
        ("root entries (bytes)", bs.root_directory_bytes().to_string()),
        ("total sectors", bs.total_sectors().to_string()),
        ("media", format!("{:#04x}", bs.media)),
        ("fat size (sectors)", bs.sectors_per_fat.to_string()),
        ("fat size (bytes)", bs.fat_size_bytes().to_string()),
        ("volume id", format!("{:08X}", bs.volume_id)),
        ("volume label", bs.volume_label.to_string()),
        ("file system type", bs.fs_type.to_string()),
        ("root dir offset", bs.root_directory_offset().to_string()),
        ("signature", format!("{:#06x}", bs.signature)),
    ];

    let mut out = String::from("FAT16 image info:\n");
    for (name, value) in rows {
        // Writing to a String can't fail
        let _ = writeln!(out, "{name:>PAD_NAME$}{value:>PAD_VALUE$}");
    }
    out
}

/// The comma separated flag names, `-` when no flag is set
///
/// Bits without a name are appended in hex, so nothing set in the byte goes unreported.
pub fn attribute_list(attributes: FileAttributes) -> String {
    let mut parts = attributes.names().map(str::to_owned).collect::<Vec<_>>();
    if attributes.unknown_bits() != 0 {
        parts.push(format!("{:#04x}", attributes.unknown_bits()));
    }
    if parts.is_empty() {
        return "-".to_owned();
    }
    parts.join(",")
}

/// The root directory listing with NAME, DATE&TIME, SIZE and ATTRS columns
pub fn directory_table<'a>(entries: impl IntoIterator<Item = &'a RootEntry>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>PAD_COLUMN$}{:>PAD_COLUMN$}{:>PAD_COLUMN$}{:>PAD_COLUMN$}",
        "NAME", "DATE&TIME", "SIZE", "ATTRS"
    );
    for entry in entries {
        let _ = writeln!(
            out,
            "{:>PAD_COLUMN$}{:>PAD_COLUMN$}{:>PAD_COLUMN$}{:>PAD_COLUMN$}",
            entry.display_name(),
            entry.modification_time.decode().to_string(),
            entry.size,
            attribute_list(entry.attributes),
        );
    }
    out
}
