//! Raw structures used in the FAT16 structures
//! The structures defined here are byte-for-byte copies of the on-disk layout,
//! which is why multi-byte values are stored as little endian bytes instead of integer values.
//! They are also repr(C, packed) to ensure there is no padding between fields

pub mod boot_sector;
pub mod directory;
