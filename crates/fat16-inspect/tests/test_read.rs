use std::io::{Cursor, Seek, SeekFrom, Write};

use fat16_inspect::{
    structures::{
        boot_sector::BootSector,
        directory::{FileAttributes, FileEntry},
        time::{FatDateTime, FatTime},
    },
    Fat16Image, ImageError, ScanOptions,
};

/// Builds an image laid out like a small `mkfs.fat -F 16` volume:
/// 1 reserved sector, 2 FATs of 8 sectors, and a root directory with `root_entries` slots
fn build_image(root_entries: u16, entries: &[(usize, FileEntry)]) -> Vec<u8> {
    let mut sector = [0u8; 512];
    sector[0..3].copy_from_slice(&[0xEB, 0x3C, 0x90]);
    sector[3..11].copy_from_slice(b"mkfs.fat");
    sector[11..13].copy_from_slice(&512u16.to_le_bytes());
    sector[13] = 4;
    sector[14..16].copy_from_slice(&1u16.to_le_bytes());
    sector[16] = 2;
    sector[17..19].copy_from_slice(&root_entries.to_le_bytes());
    sector[19..21].copy_from_slice(&2048u16.to_le_bytes());
    sector[21] = 0xF8;
    sector[22..24].copy_from_slice(&8u16.to_le_bytes());
    sector[24..26].copy_from_slice(&32u16.to_le_bytes());
    sector[26..28].copy_from_slice(&2u16.to_le_bytes());
    sector[36] = 0x80;
    sector[38] = 0x29;
    sector[39..43].copy_from_slice(&0x5A5A_0001u32.to_le_bytes());
    sector[43..54].copy_from_slice(b"INSPECTME  ");
    sector[54..62].copy_from_slice(b"FAT16   ");
    sector[510..512].copy_from_slice(&[0x55, 0xAA]);

    let root_offset = (1 + 8 * 2) * 512;
    let mut image = vec![0u8; root_offset + root_entries as usize * 32];
    image[..512].copy_from_slice(&sector);
    for (slot, entry) in entries {
        let start = root_offset + slot * 32;
        image[start..start + 32].copy_from_slice(&entry.to_bytes());
    }
    image
}

fn readme() -> FileEntry {
    // 2013-01-23 12:11:00
    FileEntry::new(
        "README",
        "TXT",
        FileAttributes::ARCHIVE,
        1234,
        3,
        FatTime::new(0x6160, 0x4237),
    )
}

#[test]
fn read_bs() {
    let image = build_image(2, &[]);
    let fat = Fat16Image::open(Cursor::new(image)).unwrap();
    let bs = fat.boot_sector();

    assert!(bs.check_jump_boot());
    assert_eq!(bs.oem_name.to_string(), "mkfs.fat");
    assert_eq!(bs.bytes_per_sector, 512);
    assert_eq!(bs.sectors_per_cluster, 4);
    assert_eq!(bs.reserved_sector_count, 1);
    assert_eq!(bs.fat_count, 2);
    assert_eq!(bs.sectors_per_fat, 8);
    assert_eq!(bs.root_entry_count, 2);
    assert_eq!(bs.volume_id, 0x5A5A_0001);
    assert_eq!(bs.volume_label.to_string(), "INSPECTME");
    assert_eq!(bs.fs_type.to_string(), "FAT16");
    assert!(bs.has_valid_signature());
    assert!(bs.warnings().is_empty());
    assert_eq!(bs.root_directory_offset(), 8704);
}

#[test]
fn boot_sector_round_trip() {
    let image = build_image(512, &[]);
    let bs = BootSector::from_bytes(&image).unwrap();
    assert_eq!(&bs.to_bytes()[..], &image[..512]);
}

#[test]
fn read_root_directory() {
    let label = FileEntry::new(
        "INSPECTM",
        "E",
        FileAttributes::VOLUME_LABEL,
        0,
        0,
        FatTime::default(),
    );
    let hidden_sys = FileEntry::new(
        "IO",
        "SYS",
        FileAttributes::HIDDEN | FileAttributes::SYSTEM | FileAttributes::READ_ONLY,
        40566,
        2,
        FatTime::default(),
    );
    let image = build_image(16, &[(0, label), (1, readme()), (5, hidden_sys)]);
    let mut fat = Fat16Image::open(Cursor::new(image)).unwrap();

    let entries = fat
        .root_directory(ScanOptions::default())
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].display_name(), "INSPECTM.E");
    assert!(entries[0].attributes.is_volume_label());
    assert!(!entries[0].attributes.is_directory());

    assert_eq!(entries[1].index, 1);
    assert_eq!(entries[1].display_name(), "README.TXT");
    assert_eq!(entries[1].size, 1234);
    assert_eq!(
        entries[1].modification_time.decode(),
        FatDateTime {
            year: 2013,
            month: 1,
            day: 23,
            hour: 12,
            minute: 11,
            second: 0,
        }
    );

    assert_eq!(entries[2].index, 5);
    assert_eq!(entries[2].attributes.bits(), 0x07);
    assert_eq!(
        entries[2].attributes.names().collect::<Vec<_>>(),
        vec!["read-only", "hidden", "system"]
    );
}

#[test]
fn read_from_file() {
    let image = build_image(4, &[(2, readme())]);
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(&image).unwrap();
    file.seek(SeekFrom::Start(100)).unwrap();

    let mut fat = Fat16Image::open(file).unwrap();
    let names = fat
        .root_directory(ScanOptions::default())
        .unwrap()
        .map(|entry| entry.map(|e| e.display_name()))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(names, vec!["README.TXT"]);
}

#[test]
fn root_directory_past_end_of_image() {
    let mut image = build_image(2, &[]);
    image.truncate(4096);
    let mut fat = Fat16Image::open(Cursor::new(image)).unwrap();
    match fat.root_directory(ScanOptions::default()) {
        Err(ImageError::RootDirectoryOutOfBounds { offset, image_len }) => {
            assert_eq!(offset, 8704);
            assert_eq!(image_len, 4096);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("scan should not start past the end of the image"),
    }
}
