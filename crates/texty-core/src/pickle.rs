//! Minimal writer for Chromium's Pickle serialization format.
//!
//! Chromium stores `web custom data` clipboard payloads as a Pickle: a
//! sequence of little-endian fields where strings are UTF-16LE with a
//! code-unit count prefix, each field padded out to a 4-byte boundary.
//! Only the write side is needed here; the reader lives in Chromium.

use crate::{Error, Result};

/// Growable byte buffer with Pickle field encoding
#[derive(Debug, Default)]
pub struct PickleWriter {
    data: Vec<u8>,
}

impl PickleWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a little-endian u32
    pub fn write_uint32(&mut self, value: u32) {
        self.data.extend_from_slice(&value.to_le_bytes());
    }

    /// Append a String16 field: u32 code-unit count, UTF-16LE bytes, then
    /// zero padding so the span just written ends on a 4-byte boundary.
    ///
    /// The count is UTF-16 code units, not bytes and not scalar values;
    /// characters outside the BMP count as two.
    pub fn write_string16(&mut self, s: &str) -> Result<()> {
        let mut byte_len = 0usize;
        let start = self.data.len();

        // Reserve the count field, fill it in once the units are known.
        self.write_uint32(0);
        for unit in s.encode_utf16() {
            self.data.extend_from_slice(&unit.to_le_bytes());
            byte_len += 2;
        }

        let char_count = byte_len / 2;
        let count: u32 = char_count
            .try_into()
            .map_err(|_| Error::Overflow {
                field: "string16 code units",
                units: char_count,
            })?;
        self.data[start..start + 4].copy_from_slice(&count.to_le_bytes());

        let padding = (4 - (byte_len % 4)) % 4;
        self.data.extend(std::iter::repeat(0u8).take(padding));
        Ok(())
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consume the writer and return the accumulated bytes
    pub fn into_payload(self) -> Vec<u8> {
        self.data
    }
}
