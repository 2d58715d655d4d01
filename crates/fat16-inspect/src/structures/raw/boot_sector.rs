/// The FAT16 boot sector, as found in the first 512 bytes of the volume
///
/// This is the BPB shared by all FAT variants followed by the FAT12/FAT16 extended boot record.
#[repr(C, packed)]
#[derive(Clone, Copy, bytemuck::NoUninit, bytemuck::AnyBitPattern)]
pub struct RawBootSector {
    /// BS_jmpBoot
    pub jump: [u8; 3],
    /// BS_OEMName
    /// The name of the program that formatted the partition
    pub oem_name: [u8; 8],
    /// BPB_BytsPerSec
    /// The number of bytes per sector
    pub bytes_per_sector: [u8; 2],
    /// BPB_SecPerClus
    /// The number of sectors per cluster
    pub sectors_per_cluster: u8,
    /// BPB_RsvdSecCnt
    ///
    /// The number of reserved sectors, including the boot sector itself.
    /// The first FAT starts right after them
    pub reserved_sector_count: [u8; 2],
    /// BPB_NumFATs
    ///
    /// The number of fats, 1 is acceptable, but 2 is recommended
    pub fat_count: u8,
    /// BPB_RootEntCnt
    ///
    /// The number of 32 byte entries in the fixed root directory region
    /// For FAT16, it is recommended to set this to 512 for maximum compatibility
    pub root_entry_count: [u8; 2],
    /// BPB_TotSec16
    ///
    /// The number of sectors
    /// If the number of sectors does not fit in 16 bits, this is 0 and total_sectors_32 is used
    pub total_sectors_16: [u8; 2],
    /// BPB_Media
    ///
    /// See the MediaType enum for more information
    pub media_type: u8,
    /// BPB_FATSz16
    ///
    /// The number of sectors per fat
    pub sectors_per_fat_16: [u8; 2],
    /// BPB_SecPerTrk
    ///
    /// The number of sectors per track
    /// This is only relevant for media with have a geometry and used by BIOS interrupt 0x13
    pub sectors_per_track: [u8; 2],
    /// BPB_NumHeads
    ///
    /// Similar situation as sectors_per_track
    pub num_heads: [u8; 2],
    /// BPB_HiddSec
    ///
    /// The number of hidden sectors preceding the partition that contains the FAT volume.
    /// This must be 0 on media that isn't partitioned
    pub hidden_sector_count: [u8; 4],
    /// BPB_TotSec32
    ///
    /// The total number of sectors when it does not fit in total_sectors_16
    pub total_sectors_32: [u8; 4],
    /// BS_DrvNum
    pub drive_number: u8,
    /// BS_Reserved1
    ///
    /// Historically the current head, should be zero
    pub reserved1: u8,
    /// BS_BootSig
    ///
    /// The extended boot signature, should be 0x29
    pub ext_boot_signature: u8,
    /// BS_VolID
    ///
    /// Volume Serial Number
    pub volume_id: [u8; 4],
    /// BS_VolLab
    ///
    /// Volume label
    /// This should be "NO NAME    " if the volume is not labeled
    pub volume_label: [u8; 11],
    /// BS_FilSysType
    ///
    /// Informational only, usually "FAT16   "
    pub fs_type: [u8; 8],
    /// Bootstrap code, opaque to the file system
    pub boot_code: [u8; 448],
    /// Signature_word
    ///
    /// The signature word, should be 0xAA55
    pub signature_word: [u8; 2],
}

impl RawBootSector {
    pub const SIZE: usize = 512;

    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> &RawBootSector {
        bytemuck::cast_ref(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; Self::SIZE] {
        bytemuck::cast_ref(self)
    }
}

/// Static assertions are placed in tests to that it doesn't need to be compiled when not needed
#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{align_of, offset_of, size_of};
    use static_assertions::const_assert_eq;

    const_assert_eq!(size_of::<RawBootSector>(), 512);
    const_assert_eq!(align_of::<RawBootSector>(), 1);

    // Field offsets according to the FAT specification
    const_assert_eq!(offset_of!(RawBootSector, jump), 0);
    const_assert_eq!(offset_of!(RawBootSector, oem_name), 3);
    const_assert_eq!(offset_of!(RawBootSector, bytes_per_sector), 11);
    const_assert_eq!(offset_of!(RawBootSector, sectors_per_cluster), 13);
    const_assert_eq!(offset_of!(RawBootSector, reserved_sector_count), 14);
    const_assert_eq!(offset_of!(RawBootSector, fat_count), 16);
    const_assert_eq!(offset_of!(RawBootSector, root_entry_count), 17);
    const_assert_eq!(offset_of!(RawBootSector, total_sectors_16), 19);
    const_assert_eq!(offset_of!(RawBootSector, media_type), 21);
    const_assert_eq!(offset_of!(RawBootSector, sectors_per_fat_16), 22);
    const_assert_eq!(offset_of!(RawBootSector, sectors_per_track), 24);
    const_assert_eq!(offset_of!(RawBootSector, num_heads), 26);
    const_assert_eq!(offset_of!(RawBootSector, hidden_sector_count), 28);
    const_assert_eq!(offset_of!(RawBootSector, total_sectors_32), 32);
    const_assert_eq!(offset_of!(RawBootSector, drive_number), 36);
    const_assert_eq!(offset_of!(RawBootSector, reserved1), 37);
    const_assert_eq!(offset_of!(RawBootSector, ext_boot_signature), 38);
    const_assert_eq!(offset_of!(RawBootSector, volume_id), 39);
    const_assert_eq!(offset_of!(RawBootSector, volume_label), 43);
    const_assert_eq!(offset_of!(RawBootSector, fs_type), 54);
    const_assert_eq!(offset_of!(RawBootSector, boot_code), 62);
    const_assert_eq!(offset_of!(RawBootSector, signature_word), 510);

    /// A boot sector with the values `mkfs.fat -F 16 -n TESTVOL` writes for a 16MB image
    fn mkfs_fat16_boot_sector() -> [u8; 512] {
        let mut bytes = [0u8; 512];
        bytes[0..3].copy_from_slice(&[0xEB, 0x3C, 0x90]);
        bytes[3..11].copy_from_slice(b"mkfs.fat");
        bytes[11..13].copy_from_slice(&512u16.to_le_bytes());
        bytes[13] = 4;
        bytes[14..16].copy_from_slice(&4u16.to_le_bytes());
        bytes[16] = 2;
        bytes[17..19].copy_from_slice(&512u16.to_le_bytes());
        bytes[19..21].copy_from_slice(&32768u16.to_le_bytes());
        bytes[21] = 0xF8;
        bytes[22..24].copy_from_slice(&32u16.to_le_bytes());
        bytes[24..26].copy_from_slice(&32u16.to_le_bytes());
        bytes[26..28].copy_from_slice(&2u16.to_le_bytes());
        bytes[36] = 0x80;
        bytes[38] = 0x29;
        bytes[39..43].copy_from_slice(&0x1234_ABCDu32.to_le_bytes());
        bytes[43..54].copy_from_slice(b"TESTVOL    ");
        bytes[54..62].copy_from_slice(b"FAT16   ");
        bytes[510] = 0x55;
        bytes[511] = 0xAA;
        bytes
    }

    #[test]
    fn test_boot_sector() {
        let bytes = mkfs_fat16_boot_sector();
        let boot_sector = RawBootSector::from_bytes(&bytes);

        assert_eq!(&boot_sector.oem_name, b"mkfs.fat");
        assert_eq!(u16::from_le_bytes(boot_sector.bytes_per_sector), 512);
        assert_eq!(boot_sector.sectors_per_cluster, 4);
        assert_eq!(u16::from_le_bytes(boot_sector.reserved_sector_count), 4);
        assert_eq!(boot_sector.fat_count, 2);
        assert_eq!(u16::from_le_bytes(boot_sector.root_entry_count), 512);
        assert_eq!(u16::from_le_bytes(boot_sector.sectors_per_fat_16), 32);
        assert_eq!(boot_sector.media_type, 0xF8);
        assert_eq!(boot_sector.ext_boot_signature, 0x29);
        assert_eq!(u32::from_le_bytes(boot_sector.volume_id), 0x1234_ABCD);
        assert_eq!(&boot_sector.fs_type, b"FAT16   ");
        assert_eq!(u16::from_le_bytes(boot_sector.signature_word), 0xAA55);
        assert_eq!(boot_sector.as_bytes(), &bytes);
    }
}
