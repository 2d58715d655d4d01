use super::{raw::directory::RawFileEntry, time::FatTime, FatStr};

/// First name byte of a free entry, after which every entry is free as well
pub const END_OF_DIRECTORY_MARKER: u8 = 0x00;
/// First name byte of a deleted entry
pub const DELETED_MARKER: u8 = 0xE5;
/// First name byte standing in for a leading 0xE5 character of a live entry
pub const KANJI_ESCAPE: u8 = 0x05;

bitflags::bitflags! {
    /// File Attributes
    ///
    /// Unknown bits are kept, so any byte can be represented
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FileAttributes: u8 {
        const READ_ONLY = 0x01;
        const HIDDEN = 0x02;
        const SYSTEM = 0x04;
        const VOLUME_LABEL = 0x08;
        const DIRECTORY = 0x10;
        const ARCHIVE = 0x20;
    }
}

impl FileAttributes {
    /// Short display names for every named flag, in bit order
    pub const NAMES: [(FileAttributes, &'static str); 6] = [
        (Self::READ_ONLY, "read-only"),
        (Self::HIDDEN, "hidden"),
        (Self::SYSTEM, "system"),
        (Self::VOLUME_LABEL, "label"),
        (Self::DIRECTORY, "dir"),
        (Self::ARCHIVE, "archive"),
    ];

    pub fn from_raw(bits: u8) -> Self {
        Self::from_bits_retain(bits)
    }

    pub fn is_read_only(&self) -> bool {
        self.contains(Self::READ_ONLY)
    }

    pub fn is_hidden(&self) -> bool {
        self.contains(Self::HIDDEN)
    }

    pub fn is_system(&self) -> bool {
        self.contains(Self::SYSTEM)
    }

    pub fn is_volume_label(&self) -> bool {
        self.contains(Self::VOLUME_LABEL)
    }

    pub fn is_directory(&self) -> bool {
        self.contains(Self::DIRECTORY)
    }

    pub fn is_archive(&self) -> bool {
        self.contains(Self::ARCHIVE)
    }

    /// The marker used by long file name entries (read-only, hidden, system and volume label)
    pub fn is_long_name(&self) -> bool {
        self.bits() & 0x3F == 0x0F
    }

    /// Bits set that have no named flag
    pub fn unknown_bits(&self) -> u8 {
        self.bits() & !Self::all().bits()
    }

    /// The display names of the flags that are set
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        let names: &'static [(FileAttributes, &'static str)] = &Self::NAMES;
        names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
    }
}

/// How a directory slot is used, judged from its first name byte and its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// The first name byte is 0x00, this and all following slots are free
    EndOfDirectory,
    /// The first name byte is 0xE5
    Deleted,
    /// The normalized name is empty
    Unused,
    InUse,
}

/// The info variant of a directory entry, in the current endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileEntry {
    pub basename: FatStr<8>,
    pub extension: FatStr<3>,
    pub attributes: FileAttributes,
    pub reserved: [u8; 10],
    pub modification_time: FatTime,
    pub cluster: u16,
    pub size: u32,
}

impl From<&RawFileEntry> for FileEntry {
    fn from(value: &RawFileEntry) -> Self {
        Self {
            basename: FatStr::from_bytes(value.name),
            extension: FatStr::from_bytes(value.extension),
            attributes: FileAttributes::from_raw(value.attributes),
            reserved: value.reserved,
            modification_time: FatTime::new(
                u16::from_le_bytes(value.last_write_time),
                u16::from_le_bytes(value.last_write_date),
            ),
            cluster: u16::from_le_bytes(value.first_cluster),
            size: u32::from_le_bytes(value.size),
        }
    }
}

impl From<&FileEntry> for RawFileEntry {
    fn from(value: &FileEntry) -> Self {
        Self {
            name: value.basename.raw,
            extension: value.extension.raw,
            attributes: value.attributes.bits(),
            reserved: value.reserved,
            last_write_time: value.modification_time.time.to_le_bytes(),
            last_write_date: value.modification_time.date.to_le_bytes(),
            first_cluster: value.cluster.to_le_bytes(),
            size: value.size.to_le_bytes(),
        }
    }
}

impl FileEntry {
    pub const SIZE: usize = RawFileEntry::SIZE;

    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        Self::from(RawFileEntry::from_bytes(bytes))
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        *RawFileEntry::from(self).as_bytes()
    }

    pub fn new(
        filename: &str,
        extension: &str,
        attributes: FileAttributes,
        size: u32,
        cluster: u16,
        time: FatTime,
    ) -> Self {
        Self {
            basename: FatStr::new_truncate(filename),
            extension: FatStr::new_truncate(extension),
            attributes,
            reserved: [0; 10],
            modification_time: time,
            cluster,
            size,
        }
    }

    /// The base name with padding removed
    pub fn name(&self) -> String {
        self.basename.to_normalized()
    }

    /// The extension with padding removed
    pub fn extension(&self) -> String {
        self.extension.to_normalized()
    }

    /// The `NAME.EXT` form of the entry name, or just `NAME` without an extension
    ///
    /// A leading 0x05 is shown as the 0xE5 character it stands for.
    pub fn display_name(&self) -> String {
        let mut name = self.name();
        if self.basename.raw[0] == KANJI_ESCAPE {
            name.replace_range(..1, "\u{e5}");
        }
        let extension = self.extension();
        if !extension.is_empty() {
            name.push('.');
            name.push_str(&extension);
        }
        name
    }

    pub fn status(&self) -> EntryStatus {
        match self.basename.raw[0] {
            END_OF_DIRECTORY_MARKER => EntryStatus::EndOfDirectory,
            DELETED_MARKER => EntryStatus::Deleted,
            _ if self.basename.is_empty() => EntryStatus::Unused,
            _ => EntryStatus::InUse,
        }
    }

    /// A slot is unused when its normalized name is empty
    pub fn is_unused(&self) -> bool {
        self.basename.is_empty()
    }
}
