//! Structures for the FAT16 file system
//!
//! Raw byte structures for the FAT16 file system are defined in the `raw` module.
//! The `boot_sector` module defines the decoded boot sector, and `geometry` the region offsets
//! derived from it. The `directory` module defines the root directory entries, and `time` the
//! packed date and time values they carry.
//! Each raw structure has an info variant, which contains the values of that structure in the
//! current endianness

pub mod boot_sector;
pub mod directory;
pub mod geometry;
pub mod raw;
pub mod time;

/// Normalizes a fixed width, padded FAT name field
///
/// The field is scanned left to right until the first NUL (0x00) or space (0x20), and everything
/// before it is returned. Bytes are interpreted as Latin-1, so any byte value maps to a character.
pub fn normalize_field(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take_while(|b| !matches!(**b, 0x00 | b' '))
        .map(|b| *b as char)
        .collect()
}

/// A fixed width FAT string, such as the 8.3 name parts or the volume label
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FatStr<const N: usize> {
    pub raw: [u8; N],
}

impl<const N: usize> core::fmt::Debug for FatStr<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FatStr")
            .field("max_len", &Self::MAX_LEN)
            .field("str", &self.to_normalized())
            .finish()
    }
}

impl<const N: usize> core::fmt::Display for FatStr<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_normalized())
    }
}

impl<const N: usize> Default for FatStr<N> {
    fn default() -> Self {
        Self {
            // Fat often uses spaces for padding
            raw: [b' '; N],
        }
    }
}

impl<const N: usize> FatStr<N> {
    pub const MAX_LEN: usize = N;

    /// Creates a space padded string, truncating anything longer than `N`
    pub fn new_truncate(s: &str) -> Self {
        let bytes = s.as_bytes();
        Self::from_slice_unchecked(&bytes[..bytes.len().min(N)])
    }

    pub fn from_bytes(bytes: [u8; N]) -> Self {
        Self { raw: bytes }
    }

    /// Copies `slice` into a space padded string
    ///
    /// # Panics
    ///
    /// Panics if `slice` is longer than `N`
    pub fn from_slice_unchecked(slice: &[u8]) -> Self {
        let mut str = Self::default();
        str.raw[..slice.len()].copy_from_slice(slice);
        str
    }

    /// The length of the name before the first padding or terminating byte
    pub fn len(&self) -> usize {
        self.raw
            .iter()
            .position(|b| matches!(*b, 0x00 | b' '))
            .unwrap_or(Self::MAX_LEN)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The name with the padding removed, see [`normalize_field`]
    pub fn to_normalized(&self) -> String {
        normalize_field(&self.raw)
    }

    pub fn as_slice(&self) -> &[u8; N] {
        &self.raw
    }
}
