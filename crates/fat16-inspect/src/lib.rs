//! A library for inspecting FAT16 file system images
//!
//! The crate decodes the boot sector (BIOS Parameter Block plus the FAT16 extended boot record)
//! and the fixed-size root directory region of a FAT16 volume. It is strictly read-only and never
//! follows cluster chains, so file contents and subdirectories are out of reach by design of the
//! on-disk format: everything it reports lives in the first few regions of the image.
//!
//! ```rust
//! use fat16_inspect::{Fat16Image, ScanOptions};
//!
//! # fn main() -> Result<(), fat16_inspect::ImageError> {
//! # let mut bytes = vec![0u8; 1024];
//! # bytes[11..13].copy_from_slice(&512u16.to_le_bytes());
//! # bytes[14..16].copy_from_slice(&1u16.to_le_bytes());
//! # let file = std::io::Cursor::new(bytes);
//! let mut image = Fat16Image::open(file)?;
//! println!("root directory at {:#x}", image.boot_sector().root_directory_offset());
//! for entry in image.root_directory(ScanOptions::default())? {
//!     let entry = entry?;
//!     println!("{} {} bytes", entry.display_name(), entry.size);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Cargo Features
//!
//! - **chrono**: Enables conversion of FAT timestamps into `chrono::NaiveDateTime`

// Multi-byte fields are kept as byte arrays and decoded with `from_le_bytes`, so the raw
// structures are valid on any host endianness.

pub mod error;
pub mod fs;
pub mod io;
pub mod structures;

pub use error::{ImageError, Record};
pub use fs::*;
pub use io::ImageSource;
