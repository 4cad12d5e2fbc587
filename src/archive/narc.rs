//! Nitro archive (NARC) writer.
//!
//! ```text
//! header  "NARC" FE FF 00 01 <u32 file size> 10 00 03 00
//! BTAF    "BTAF" <u32 size> <u16 count> 00 00 { <u32 start> <u32 end> } * count
//! BTNF    "BTNF" <u32 size = 16> <u32 4> <u16 0> <u16 1>
//! GMIF    "GMIF" <u32 size> member data, each member padded to 4 with 0xFF
//! ```
//!
//! Member offsets in BTAF are relative to the start of the GMIF payload and
//! exclude the padding.

use crate::encoding::align_to_word;
use byteorder::{ByteOrder, LittleEndian};
use std::fs;
use std::io;
use std::path::Path;

const HEADER_SIZE: usize = 16;
const SECTION_HEADER_SIZE: usize = 8;
const BTNF_SIZE: usize = 16;
const PAD_BYTE: u8 = 0xFF;

/// Accepts opaque member buffers in order and serializes them as a NARC.
#[derive(Debug, Default, Clone)]
pub struct NarcWriter {
    members: Vec<Vec<u8>>,
}

impl NarcWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one member. Zero-length members are allowed.
    pub fn pack_file(&mut self, data: &[u8]) -> &mut Self {
        self.members.push(data.to_vec());
        self
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let btaf_size = SECTION_HEADER_SIZE + 4 + 8 * self.members.len();
        let data_size: usize = self.members.iter().map(|m| align_to_word(m.len())).sum();
        let gmif_size = SECTION_HEADER_SIZE + data_size;
        let total = HEADER_SIZE + btaf_size + BTNF_SIZE + gmif_size;

        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(b"NARC");
        push_u16(&mut out, 0xFFFE);
        push_u16(&mut out, 0x0100);
        push_u32(&mut out, total as u32);
        push_u16(&mut out, HEADER_SIZE as u16);
        push_u16(&mut out, 3);

        out.extend_from_slice(b"BTAF");
        push_u32(&mut out, btaf_size as u32);
        push_u16(&mut out, self.members.len() as u16);
        push_u16(&mut out, 0);
        let mut offset = 0usize;
        for member in &self.members {
            push_u32(&mut out, offset as u32);
            push_u32(&mut out, (offset + member.len()) as u32);
            offset += align_to_word(member.len());
        }

        out.extend_from_slice(b"BTNF");
        push_u32(&mut out, BTNF_SIZE as u32);
        push_u32(&mut out, 4);
        push_u16(&mut out, 0);
        push_u16(&mut out, 1);

        out.extend_from_slice(b"GMIF");
        push_u32(&mut out, gmif_size as u32);
        for member in &self.members {
            out.extend_from_slice(member);
            out.resize(out.len() + align_to_word(member.len()) - member.len(), PAD_BYTE);
        }

        debug_assert_eq!(out.len(), total);
        out
    }

    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_bytes())
    }
}

fn push_u16(out: &mut Vec<u8>, value: u16) {
    let mut bytes = [0; 2];
    LittleEndian::write_u16(&mut bytes, value);
    out.extend_from_slice(&bytes);
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    let mut bytes = [0; 4];
    LittleEndian::write_u32(&mut bytes, value);
    out.extend_from_slice(&bytes);
}

/// Reads member slices back out of a NARC image. Used by tests and by
/// anything that wants to inspect a produced archive.
pub fn read_members(image: &[u8]) -> Option<Vec<&[u8]>> {
    if image.get(0..4)? != b"NARC" {
        return None;
    }
    let btaf = HEADER_SIZE;
    if image.get(btaf..btaf + 4)? != b"BTAF" {
        return None;
    }
    let btaf_size = LittleEndian::read_u32(image.get(btaf + 4..btaf + 8)?) as usize;
    let count = LittleEndian::read_u16(image.get(btaf + 8..btaf + 10)?) as usize;

    let btnf = btaf + btaf_size;
    let btnf_size = LittleEndian::read_u32(image.get(btnf + 4..btnf + 8)?) as usize;
    let gmif = btnf + btnf_size;
    if image.get(gmif..gmif + 4)? != b"GMIF" {
        return None;
    }
    let data = gmif + SECTION_HEADER_SIZE;

    (0..count)
        .map(|i| {
            let entry = btaf + 12 + i * 8;
            let start = LittleEndian::read_u32(image.get(entry..entry + 4)?) as usize;
            let end = LittleEndian::read_u32(image.get(entry + 4..entry + 8)?) as usize;
            image.get(data + start..data + end)
        })
        .collect()
}
