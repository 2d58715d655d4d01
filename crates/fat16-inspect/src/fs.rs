use crate::{
    error::{ImageError, Record},
    io::ImageSource,
    structures::{
        boot_sector::BootSector,
        directory::{EntryStatus, FileEntry},
    },
};

/// Controls which root directory slots are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// End the scan at the first slot whose name starts with 0x00.
    ///
    /// When unset, such a slot is only skipped and the remaining slots are still read.
    pub stop_at_end_marker: bool,
    /// Report slots whose name starts with 0xE5
    pub include_deleted: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            stop_at_end_marker: false,
            include_deleted: true,
        }
    }
}

impl ScanOptions {
    pub fn with_stop_at_end_marker(mut self, stop: bool) -> Self {
        self.stop_at_end_marker = stop;
        self
    }

    pub fn with_include_deleted(mut self, include: bool) -> Self {
        self.include_deleted = include;
        self
    }
}

/// A FAT16 image opened for inspection
///
/// The boot sector is decoded once when the image is opened. The root directory can then be
/// scanned, which reborrows the source for the lifetime of the scan.
#[derive(Debug)]
pub struct Fat16Image<S: ImageSource> {
    source: S,
    bs: BootSector,
}

impl<S: ImageSource> Fat16Image<S> {
    /// Reads the boot sector from the start of `source`
    pub fn open(mut source: S) -> Result<Self, ImageError> {
        source.seek_to(0)?;
        let bs = BootSector::read(&mut source)?;
        log::trace!(
            "Read boot sector: {} bytes per sector, {} reserved sectors, {} FATs of {} sectors, {} root entries",
            bs.bytes_per_sector,
            bs.reserved_sector_count,
            bs.fat_count,
            bs.sectors_per_fat,
            bs.root_entry_count
        );
        for warning in bs.warnings() {
            log::warn!("{warning}");
        }
        Ok(Self { source, bs })
    }

    pub fn boot_sector(&self) -> &BootSector {
        &self.bs
    }

    /// Every root directory slot, unfiltered
    ///
    /// The root directory offset is checked against the image length before seeking to it.
    pub fn root_directory_slots(&mut self) -> Result<DirectorySlots<'_, S>, ImageError> {
        let offset = self.bs.root_directory_offset();
        let image_len = self.source.image_len()?;
        if offset > image_len {
            return Err(ImageError::RootDirectoryOutOfBounds { offset, image_len });
        }
        let available_slots = (image_len - offset) / FileEntry::SIZE as u64;
        if available_slots < self.bs.root_entry_count as u64 {
            log::warn!(
                "Image ends after {available_slots} of {} root directory slots",
                self.bs.root_entry_count
            );
        }

        log::trace!("Seeking to root directory at {offset:#x}");
        self.source.seek_to(offset)?;
        Ok(DirectorySlots::new(&mut self.source, self.bs.root_entry_count))
    }

    /// The root directory entries that are in use, filtered according to `options`
    pub fn root_directory(
        &mut self,
        options: ScanOptions,
    ) -> Result<RootDirectory<'_, S>, ImageError> {
        Ok(RootDirectory {
            slots: self.root_directory_slots()?,
            options,
        })
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

/// Sequentially decodes up to `count` directory slots from the current position of a source
///
/// Slots are read one after another with no seeking in between. A slot that can't be read in
/// full yields an error and ends the iteration.
pub struct DirectorySlots<'a, S: ImageSource + ?Sized> {
    source: &'a mut S,
    next: u16,
    count: u16,
    failed: bool,
}

impl<'a, S: ImageSource + ?Sized> DirectorySlots<'a, S> {
    pub fn new(source: &'a mut S, count: u16) -> Self {
        Self {
            source,
            next: 0,
            count,
            failed: false,
        }
    }

    /// The number of slots read so far
    pub fn slots_read(&self) -> u16 {
        self.next
    }
}

impl<S: ImageSource + ?Sized> Iterator for DirectorySlots<'_, S> {
    type Item = Result<(u16, FileEntry), ImageError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next >= self.count {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let mut buffer = [0u8; FileEntry::SIZE];
        if let Err(err) = self
            .source
            .read_record(&mut buffer, Record::DirectorySlot(index))
        {
            self.failed = true;
            return Some(Err(err));
        }
        Some(Ok((index, FileEntry::from_bytes(&buffer))))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = (self.count - self.next) as usize;
        (0, Some(remaining))
    }
}

/// A decoded root directory entry, together with the slot it was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootEntry {
    pub index: u16,
    pub entry: FileEntry,
}

impl core::ops::Deref for RootEntry {
    type Target = FileEntry;

    fn deref(&self) -> &Self::Target {
        &self.entry
    }
}

/// The in-use entries of the root directory
///
/// Slots with an empty name are skipped, but every skipped slot has still been read, so the scan
/// never covers more than the declared number of root entries.
pub struct RootDirectory<'a, S: ImageSource + ?Sized> {
    slots: DirectorySlots<'a, S>,
    options: ScanOptions,
}

impl<S: ImageSource + ?Sized> Iterator for RootDirectory<'_, S> {
    type Item = Result<RootEntry, ImageError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, entry) = match self.slots.next()? {
                Ok(slot) => slot,
                Err(err) => return Some(Err(err)),
            };
            match entry.status() {
                EntryStatus::EndOfDirectory if self.options.stop_at_end_marker => {
                    log::debug!("End of directory marker in slot {index}, stopping scan");
                    return None;
                }
                EntryStatus::EndOfDirectory | EntryStatus::Unused => continue,
                EntryStatus::Deleted if !self.options.include_deleted => {
                    log::trace!("Skipping deleted entry in slot {index}");
                    continue;
                }
                EntryStatus::Deleted | EntryStatus::InUse => {
                    return Some(Ok(RootEntry { index, entry }));
                }
            }
        }
    }
}
