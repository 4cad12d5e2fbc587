//! Per-record encoders.
//!
//! Each submodule turns one section of a species document into the exact
//! byte layout the runtime reads. All multi-byte fields are little-endian.

pub mod evolution;
pub mod learnset;
pub mod pal_park;
pub mod personal;
pub mod sprite;
pub mod tutor;

use byteorder::{ByteOrder, LittleEndian};

/// Rounds a byte length up to the next multiple of four.
pub const fn align_to_word(len: usize) -> usize {
    (len + 3) & !3
}

/// Appends little-endian fields to a record under construction.
#[derive(Debug, Default)]
pub(crate) struct RecordWriter {
    buf: Vec<u8>,
}

impl RecordWriter {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub(crate) fn i8(&mut self, value: i8) -> &mut Self {
        self.buf.push(value as u8);
        self
    }

    pub(crate) fn u16(&mut self, value: u16) -> &mut Self {
        let mut bytes = [0; 2];
        LittleEndian::write_u16(&mut bytes, value);
        self.buf.extend_from_slice(&bytes);
        self
    }

    pub(crate) fn u32(&mut self, value: u32) -> &mut Self {
        let mut bytes = [0; 4];
        LittleEndian::write_u32(&mut bytes, value);
        self.buf.extend_from_slice(&bytes);
        self
    }

    /// Zero bytes, never the archive writer's fill value.
    pub(crate) fn zeros(&mut self, count: usize) -> &mut Self {
        self.buf.resize(self.buf.len() + count, 0);
        self
    }

    /// Zero-pads to a word boundary.
    pub(crate) fn align(&mut self) -> &mut Self {
        let padded = align_to_word(self.buf.len());
        self.buf.resize(padded, 0);
        self
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.buf
    }

    /// Finishes a record whose size is known at compile time.
    pub(crate) fn finish_fixed<const N: usize>(self) -> [u8; N] {
        let mut record = [0; N];
        let len = self.buf.len().min(N);
        record[..len].copy_from_slice(&self.buf[..len]);
        debug_assert_eq!(self.buf.len(), N, "record layout drifted from its declared size");
        record
    }
}
