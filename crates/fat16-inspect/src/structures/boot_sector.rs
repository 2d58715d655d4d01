use crate::{
    error::{ImageError, Record},
    io::ImageSource,
};

use super::{raw::boot_sector::RawBootSector, FatStr};

/// The value of the signature word at the end of a valid boot sector
pub const BOOT_SIGNATURE: u16 = 0xAA55;
/// The value of BS_BootSig when the volume id, label and type fields are present
pub const EXT_BOOT_SIGNATURE: u8 = 0x29;

/// BPB_Media
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// 3.5" Floppy 1.44MB
    HighDensityFloppy = 0xF0,
    /// Hard Disk
    HardDisk = 0xF8,
    /// 3.5" Double-Density Floppy 720kB
    DoubleDensityFloppy = 0xF9,
    Reserved1 = 0xFA,
    Reserved2 = 0xFB,
    Reserved3 = 0xFC,
    Reserved4 = 0xFD,
    Reserved5 = 0xFE,
    Reserved6 = 0xFF,
}

impl TryFrom<u8> for MediaType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0xF0 => Self::HighDensityFloppy,
            0xF8 => Self::HardDisk,
            0xF9 => Self::DoubleDensityFloppy,
            0xFA => Self::Reserved1,
            0xFB => Self::Reserved2,
            0xFC => Self::Reserved3,
            0xFD => Self::Reserved4,
            0xFE => Self::Reserved5,
            0xFF => Self::Reserved6,
            other => return Err(other),
        })
    }
}

/// The info variant of the boot sector, which contains the values of the boot sector
/// in the current endianness. The alignment and size is not guaranteed, so converting between
/// raw and info structs requires the use of a conversion method instead of simply casting bytes
///
/// Every byte of the raw sector is kept, so converting back with [`BootSector::to_bytes`]
/// reproduces the decoded sector exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootSector {
    pub jump: [u8; 3],
    pub oem_name: FatStr<8>,
    pub bytes_per_sector: u16,
    pub sectors_per_cluster: u8,
    pub reserved_sector_count: u16,
    pub fat_count: u8,
    pub root_entry_count: u16,
    pub total_sectors_16: u16,
    /// The raw media descriptor, see [`BootSector::media_type`]
    pub media: u8,
    pub sectors_per_fat: u16,
    pub sectors_per_track: u16,
    pub num_heads: u16,
    pub hidden_sector_count: u32,
    pub total_sectors_32: u32,
    pub drive_number: u8,
    pub reserved1: u8,
    pub ext_boot_signature: u8,
    pub volume_id: u32,
    pub volume_label: FatStr<11>,
    pub fs_type: FatStr<8>,
    pub boot_code: [u8; 448],
    pub signature: u16,
}

impl From<&RawBootSector> for BootSector {
    fn from(raw: &RawBootSector) -> Self {
        Self {
            jump: raw.jump,
            oem_name: FatStr::from_bytes(raw.oem_name),
            bytes_per_sector: u16::from_le_bytes(raw.bytes_per_sector),
            sectors_per_cluster: raw.sectors_per_cluster,
            reserved_sector_count: u16::from_le_bytes(raw.reserved_sector_count),
            fat_count: raw.fat_count,
            root_entry_count: u16::from_le_bytes(raw.root_entry_count),
            total_sectors_16: u16::from_le_bytes(raw.total_sectors_16),
            media: raw.media_type,
            sectors_per_fat: u16::from_le_bytes(raw.sectors_per_fat_16),
            sectors_per_track: u16::from_le_bytes(raw.sectors_per_track),
            num_heads: u16::from_le_bytes(raw.num_heads),
            hidden_sector_count: u32::from_le_bytes(raw.hidden_sector_count),
            total_sectors_32: u32::from_le_bytes(raw.total_sectors_32),
            drive_number: raw.drive_number,
            reserved1: raw.reserved1,
            ext_boot_signature: raw.ext_boot_signature,
            volume_id: u32::from_le_bytes(raw.volume_id),
            volume_label: FatStr::from_bytes(raw.volume_label),
            fs_type: FatStr::from_bytes(raw.fs_type),
            boot_code: raw.boot_code,
            signature: u16::from_le_bytes(raw.signature_word),
        }
    }
}

impl From<&BootSector> for RawBootSector {
    fn from(info: &BootSector) -> Self {
        Self {
            jump: info.jump,
            oem_name: info.oem_name.raw,
            bytes_per_sector: info.bytes_per_sector.to_le_bytes(),
            sectors_per_cluster: info.sectors_per_cluster,
            reserved_sector_count: info.reserved_sector_count.to_le_bytes(),
            fat_count: info.fat_count,
            root_entry_count: info.root_entry_count.to_le_bytes(),
            total_sectors_16: info.total_sectors_16.to_le_bytes(),
            media_type: info.media,
            sectors_per_fat_16: info.sectors_per_fat.to_le_bytes(),
            sectors_per_track: info.sectors_per_track.to_le_bytes(),
            num_heads: info.num_heads.to_le_bytes(),
            hidden_sector_count: info.hidden_sector_count.to_le_bytes(),
            total_sectors_32: info.total_sectors_32.to_le_bytes(),
            drive_number: info.drive_number,
            reserved1: info.reserved1,
            ext_boot_signature: info.ext_boot_signature,
            volume_id: info.volume_id.to_le_bytes(),
            volume_label: info.volume_label.raw,
            fs_type: info.fs_type.raw,
            boot_code: info.boot_code,
            signature_word: info.signature.to_le_bytes(),
        }
    }
}

impl BootSector {
    pub const SIZE: usize = RawBootSector::SIZE;

    /// Decodes the boot sector from the first 512 bytes of `bytes`
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        let sector: &[u8; Self::SIZE] = bytes
            .get(..Self::SIZE)
            .and_then(|b| b.try_into().ok())
            .ok_or(ImageError::ShortRead {
                record: Record::BootSector,
                expected: Self::SIZE,
                available: bytes.len(),
            })?;
        Ok(Self::from(RawBootSector::from_bytes(sector)))
    }

    /// Reads and decodes the boot sector from the current position of `source`,
    /// which advances the position by 512 bytes
    pub fn read<S: ImageSource + ?Sized>(source: &mut S) -> Result<Self, ImageError> {
        let mut buffer = [0u8; Self::SIZE];
        source.read_record(&mut buffer, Record::BootSector)?;
        Ok(Self::from(RawBootSector::from_bytes(&buffer)))
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        *RawBootSector::from(self).as_bytes()
    }

    pub fn media_type(&self) -> Option<MediaType> {
        MediaType::try_from(self.media).ok()
    }

    pub fn has_valid_signature(&self) -> bool {
        self.signature == BOOT_SIGNATURE
    }

    pub fn check_jump_boot(&self) -> bool {
        (self.jump[0] == 0xEB && self.jump[2] == 0x90) || self.jump[0] == 0xE9
    }

    pub fn check_bytes_per_sector(&self) -> bool {
        matches!(self.bytes_per_sector, 512 | 1024 | 2048 | 4096)
    }

    pub fn check_sectors_per_cluster(&self) -> bool {
        matches!(self.sectors_per_cluster, 1 | 2 | 4 | 8 | 16 | 32 | 64 | 128)
    }

    pub fn check_fat_count(&self) -> bool {
        self.fat_count != 0
    }

    pub fn check_fs_type(&self) -> bool {
        self.fs_type.raw.starts_with(b"FAT16")
    }

    /// Lists everything about this boot sector that a well formed FAT16 volume would not have.
    ///
    /// None of these prevent decoding; they are meant to be reported to the user.
    pub fn warnings(&self) -> Vec<BootSectorWarning> {
        let mut warnings = Vec::new();
        if !self.has_valid_signature() {
            warnings.push(BootSectorWarning::Signature(self.signature));
        }
        if self.ext_boot_signature != EXT_BOOT_SIGNATURE {
            warnings.push(BootSectorWarning::ExtendedBootSignature(
                self.ext_boot_signature,
            ));
        }
        if !self.check_fs_type() {
            warnings.push(BootSectorWarning::FileSystemType(self.fs_type));
        }
        if !self.check_bytes_per_sector() {
            warnings.push(BootSectorWarning::BytesPerSector(self.bytes_per_sector));
        }
        if !self.check_sectors_per_cluster() {
            warnings.push(BootSectorWarning::SectorsPerCluster(
                self.sectors_per_cluster,
            ));
        }
        if !self.check_fat_count() {
            warnings.push(BootSectorWarning::NoFats);
        }
        if self.root_entry_count == 0 {
            warnings.push(BootSectorWarning::NoRootEntries);
        }
        warnings
    }
}

/// A non-fatal irregularity found in a boot sector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootSectorWarning {
    Signature(u16),
    ExtendedBootSignature(u8),
    FileSystemType(FatStr<8>),
    BytesPerSector(u16),
    SectorsPerCluster(u8),
    NoFats,
    NoRootEntries,
}

impl core::fmt::Display for BootSectorWarning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Signature(sig) => write!(
                f,
                "boot sector signature is {sig:#06x}, expected {BOOT_SIGNATURE:#06x}"
            ),
            Self::ExtendedBootSignature(sig) => write!(
                f,
                "extended boot signature is {sig:#04x}, expected {EXT_BOOT_SIGNATURE:#04x}"
            ),
            Self::FileSystemType(ty) => {
                write!(f, "file system type is {:?}, expected \"FAT16\"", ty.to_normalized())
            }
            Self::BytesPerSector(bps) => write!(f, "unusual bytes per sector: {bps}"),
            Self::SectorsPerCluster(spc) => write!(f, "unusual sectors per cluster: {spc}"),
            Self::NoFats => f.write_str("volume declares no FATs"),
            Self::NoRootEntries => f.write_str("volume declares an empty root directory"),
        }
    }
}
