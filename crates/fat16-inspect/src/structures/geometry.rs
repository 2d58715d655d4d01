//! Region layout of a FAT16 volume
//!
//! A FAT16 volume is laid out as: reserved sectors (starting with the boot sector), the FATs,
//! the fixed size root directory, and finally the data region. All offsets are computed in
//! 64 bit arithmetic, so corrupt header values can not wrap around.

use super::{boot_sector::BootSector, raw::directory::RawFileEntry};

impl BootSector {
    /// The byte offset of the root directory from the start of the image
    ///
    /// `(reserved_sector_count + sectors_per_fat * fat_count) * bytes_per_sector`
    pub fn root_directory_offset(&self) -> u64 {
        let fat_sectors = self.sectors_per_fat as u64 * self.fat_count as u64;
        (self.reserved_sector_count as u64 + fat_sectors) * self.bytes_per_sector as u64
    }

    /// The byte offset of the first FAT
    pub fn fat_offset(&self) -> u64 {
        self.reserved_sector_count as u64 * self.bytes_per_sector as u64
    }

    /// The size of a single FAT in bytes
    pub fn fat_size_bytes(&self) -> u64 {
        self.sectors_per_fat as u64 * self.bytes_per_sector as u64
    }

    /// The size of the root directory region in bytes
    pub fn root_directory_bytes(&self) -> u64 {
        self.root_entry_count as u64 * RawFileEntry::SIZE as u64
    }

    /// The number of sectors occupied by the root directory, rounded up
    pub fn root_directory_sectors(&self) -> u64 {
        match self.bytes_per_sector {
            0 => 0,
            bps => self.root_directory_bytes().div_ceil(bps as u64),
        }
    }

    /// The first sector of the data region (cluster 2)
    pub fn first_data_sector(&self) -> u64 {
        self.reserved_sector_count as u64
            + self.sectors_per_fat as u64 * self.fat_count as u64
            + self.root_directory_sectors()
    }

    pub fn total_sectors(&self) -> u32 {
        if self.total_sectors_16 != 0 {
            self.total_sectors_16 as u32
        } else {
            self.total_sectors_32
        }
    }

    /// The size of the volume in bytes, according to the boot sector
    pub fn volume_size_bytes(&self) -> u64 {
        self.total_sectors() as u64 * self.bytes_per_sector as u64
    }
}
