//! Assembly of the final `org.chromium.web-custom-data` byte sequence.
//!
//! The payload is a Pickle holding an ordered map of exactly two entries:
//! the plain-text outline under `public.utf8-plain-text` and the compact
//! JSON delta under `slack/texty`. A u32 total-size header (covering
//! everything after itself) is prepended last.

use crate::delta::Delta;
use crate::pickle::PickleWriter;
use crate::{Error, Result};

/// Key of the plain-text entry
pub const PLAIN_TEXT_KEY: &str = "public.utf8-plain-text";

/// Key of the rich-text delta entry
pub const TEXTY_KEY: &str = "slack/texty";

/// Number of entries in the custom-data map
const ENTRY_COUNT: u32 = 2;

/// Build the clipboard wire payload from the two projections.
pub fn build_payload(plain_text: &str, delta: &Delta) -> Result<Vec<u8>> {
    let texty_json = delta.to_compact_json()?;

    let mut writer = PickleWriter::new();
    writer.write_uint32(ENTRY_COUNT);

    writer.write_string16(PLAIN_TEXT_KEY)?;
    writer.write_string16(plain_text)?;

    writer.write_string16(TEXTY_KEY)?;
    writer.write_string16(&texty_json)?;

    let payload = writer.into_payload();
    let total_size: u32 = payload.len().try_into().map_err(|_| Error::Overflow {
        field: "payload bytes",
        units: payload.len(),
    })?;

    let mut data = Vec::with_capacity(4 + payload.len());
    data.extend_from_slice(&total_size.to_le_bytes());
    data.extend_from_slice(&payload);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::Op;
    use crate::item::ListKind;
    use pretty_assertions::assert_eq;

    /// Test-side decoder mirroring Chromium's read path.
    struct PickleReader<'a> {
        data: &'a [u8],
        pos: usize,
    }

    impl<'a> PickleReader<'a> {
        fn new(data: &'a [u8]) -> Self {
            Self { data, pos: 0 }
        }

        fn read_uint32(&mut self) -> u32 {
            let bytes: [u8; 4] = self.data[self.pos..self.pos + 4].try_into().unwrap();
            self.pos += 4;
            u32::from_le_bytes(bytes)
        }

        fn read_string16(&mut self) -> String {
            let char_count = self.read_uint32() as usize;
            let byte_len = char_count * 2;
            let units: Vec<u16> = self.data[self.pos..self.pos + byte_len]
                .chunks_exact(2)
                .map(|c| u16::from_le_bytes([c[0], c[1]]))
                .collect();
            self.pos += byte_len;
            self.pos += (4 - (byte_len % 4)) % 4;
            String::from_utf16(&units).unwrap()
        }
    }

    fn sample_delta() -> Delta {
        Delta {
            ops: vec![
                Op::insert("Item 1"),
                Op::terminator(ListKind::Bullet, None),
            ],
        }
    }

    #[test]
    fn test_total_size_excludes_header() {
        let data = build_payload("- Item 1", &sample_delta()).unwrap();
        let total = u32::from_le_bytes(data[..4].try_into().unwrap()) as usize;
        assert_eq!(total, data.len() - 4);
    }

    #[test]
    fn test_round_trip_entries_in_fixed_order() {
        let plain = "- Item 1";
        let delta = sample_delta();
        let data = build_payload(plain, &delta).unwrap();

        let mut reader = PickleReader::new(&data[4..]);
        assert_eq!(reader.read_uint32(), 2);
        assert_eq!(reader.read_string16(), PLAIN_TEXT_KEY);
        assert_eq!(reader.read_string16(), plain);
        assert_eq!(reader.read_string16(), TEXTY_KEY);
        assert_eq!(reader.read_string16(), delta.to_compact_json().unwrap());
        assert_eq!(reader.pos, data.len() - 4);
    }

    #[test]
    fn test_delta_entry_is_compact_json() {
        let data = build_payload("- Item 1", &sample_delta()).unwrap();
        let mut reader = PickleReader::new(&data[4..]);
        reader.read_uint32();
        reader.read_string16();
        reader.read_string16();
        reader.read_string16();
        let json = reader.read_string16();
        assert_eq!(
            json,
            r#"{"ops":[{"insert":"Item 1"},{"attributes":{"list":"bullet"},"insert":"\n"}]}"#
        );
        assert!(!json.contains(": "));
    }

    #[test]
    fn test_empty_plain_text_still_encodes() {
        let delta = Delta {
            ops: vec![Op::insert(""), Op::bare_terminator()],
        };
        let data = build_payload("", &delta).unwrap();
        let mut reader = PickleReader::new(&data[4..]);
        assert_eq!(reader.read_uint32(), 2);
        assert_eq!(reader.read_string16(), PLAIN_TEXT_KEY);
        assert_eq!(reader.read_string16(), "");
    }
}
