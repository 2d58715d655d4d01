/// The fixed size record a read was attempting to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    BootSector,
    /// The zero based index of a slot in the root directory
    DirectorySlot(u16),
}

impl core::fmt::Display for Record {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BootSector => f.write_str("boot sector"),
            Self::DirectorySlot(index) => write!(f, "root directory slot #{index}"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Short read of {record}: expected {expected} bytes, only {available} available.")]
    ShortRead {
        record: Record,
        expected: usize,
        available: usize,
    },
    #[error(
        "Root directory offset {offset:#x} lies beyond the end of the image ({image_len} bytes)."
    )]
    RootDirectoryOutOfBounds { offset: u64, image_len: u64 },
    #[error("I/O error: {0}.")]
    Io(#[from] std::io::Error),
}
