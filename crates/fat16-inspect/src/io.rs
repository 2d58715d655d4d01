//! The byte source an image is decoded from
//!
//! Decoding only ever needs to fill fixed size records and jump to absolute offsets, so the
//! interface is kept to exactly that. Anything implementing [`std::io::Read`] and
//! [`std::io::Seek`] is a source, which covers both files and in-memory cursors.

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use crate::error::{ImageError, Record};

pub trait ImageSource {
    /// Reads into `buffer` until it is full or the source is exhausted,
    /// returning the number of bytes read
    fn read_up_to(&mut self, buffer: &mut [u8]) -> std::io::Result<usize>;

    /// Moves the read position to `offset` bytes from the start of the image
    fn seek_to(&mut self, offset: u64) -> std::io::Result<()>;

    /// The total length of the image in bytes
    fn image_len(&mut self) -> std::io::Result<u64>;

    /// Fills `buffer` completely, failing with [`ImageError::ShortRead`] if the source ends first
    fn read_record(&mut self, buffer: &mut [u8], record: Record) -> Result<(), ImageError> {
        let available = self.read_up_to(buffer)?;
        if available < buffer.len() {
            return Err(ImageError::ShortRead {
                record,
                expected: buffer.len(),
                available,
            });
        }
        Ok(())
    }
}

impl<T: Read + Seek + ?Sized> ImageSource for T {
    fn read_up_to(&mut self, mut buffer: &mut [u8]) -> std::io::Result<usize> {
        let mut total = 0;
        while !buffer.is_empty() {
            match self.read(buffer) {
                Ok(0) => break,
                Ok(n) => {
                    buffer = &mut buffer[n..];
                    total += n;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(total)
    }

    fn seek_to(&mut self, offset: u64) -> std::io::Result<()> {
        self.seek(SeekFrom::Start(offset)).map(|_| ())
    }

    fn image_len(&mut self) -> std::io::Result<u64> {
        let position = self.stream_position()?;
        let len = self.seek(SeekFrom::End(0))?;
        if position != len {
            self.seek(SeekFrom::Start(position))?;
        }
        Ok(len)
    }
}
