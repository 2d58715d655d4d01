/// A short name (8.3) entry in the FAT16 root directory
#[repr(C, packed)]
#[derive(Clone, Copy, bytemuck::NoUninit, bytemuck::AnyBitPattern)]
pub struct RawFileEntry {
    /// DIR_Name (base name part)
    ///
    /// The name of the file, padded with spaces
    /// A first byte of 0xE5 indicates that the entry is free (deleted). For kanji, 0x05 is used
    /// in place of a leading 0xE5 character
    /// The special value 0x00 also indicates that the entry is free, but also all the entries
    /// following it are free
    pub name: [u8; 8],
    /// DIR_Name (extension part)
    ///
    /// The extension, padded with spaces
    pub extension: [u8; 3],
    /// DIR_Attr
    ///
    /// The file attributes
    pub attributes: u8,
    /// Creation time, access date and the high cluster word on later FAT versions.
    /// None of them are interpreted for FAT16 inspection
    pub reserved: [u8; 10],
    /// DIR_WrtTime
    ///
    /// The last write time, granularity is 2 seconds
    pub last_write_time: [u8; 2],
    /// DIR_WrtDate
    ///
    /// The last write date
    pub last_write_date: [u8; 2],
    /// DIR_FstClusLO
    ///
    /// The first cluster of the file
    pub first_cluster: [u8; 2],
    /// DIR_FileSize
    ///
    /// The size of the file, in bytes
    pub size: [u8; 4],
}

impl RawFileEntry {
    pub const SIZE: usize = 32;

    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> &RawFileEntry {
        bytemuck::cast_ref(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; Self::SIZE] {
        bytemuck::cast_ref(self)
    }
}
