//! In-memory BMP builders shared by the integration tests.

#![allow(dead_code)]

pub const WHITE24: u32 = 0x00FF_FFFF;
pub const WHITE32: u32 = 0xFFFF_FFFF;

/// Header fields a test may want to vary.
#[derive(Clone, Debug)]
pub struct Headers {
    pub signature: [u8; 2],
    pub width: i32,
    pub height: i32,
    pub bit_count: u16,
    pub header_size: u32,
    pub compression: u32,
    pub offset: u32,
}

impl Headers {
    pub fn new(width: i32, height: i32, bit_count: u16) -> Self {
        Self {
            signature: *b"BM",
            width,
            height,
            bit_count,
            header_size: 40,
            compression: 0,
            offset: 54,
        }
    }

    /// 14-byte file header followed by the 40-byte info header.
    pub fn to_bytes(&self, file_size: u32) -> Vec<u8> {
        let mut out = Vec::with_capacity(54);
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&file_size.to_le_bytes());
        out.extend_from_slice(&[0u8; 4]); // reserved
        out.extend_from_slice(&self.offset.to_le_bytes());
        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // planes
        out.extend_from_slice(&self.bit_count.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // image size
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // colors used
        out.extend_from_slice(&0u32.to_le_bytes()); // colors important
        out
    }

    /// Headers, zero filler up to `offset`, then `pixel_data`.
    pub fn file(&self, pixel_data: &[u8]) -> Vec<u8> {
        let file_size = self.offset + pixel_data.len() as u32;
        let mut out = self.to_bytes(file_size);
        out.resize(self.offset as usize, 0);
        out.extend_from_slice(pixel_data);
        out
    }
}

/// Little-endian samples, `bit_count / 8` bytes each, no row padding.
pub fn sample_bytes(samples: &[u32], bit_count: u16) -> Vec<u8> {
    let width = usize::from(bit_count / 8);
    samples
        .iter()
        .flat_map(|s| s.to_le_bytes()[..width].to_vec())
        .collect()
}

/// A complete bitmap with packed rows and pixel data right after the headers.
pub fn bmp(width: i32, height: i32, bit_count: u16, samples: &[u32]) -> Vec<u8> {
    Headers::new(width, height, bit_count).file(&sample_bytes(samples, bit_count))
}

/// xorshift noise where roughly one sample in four is white.
pub fn noisy_samples(count: usize, white: u32) -> Vec<u32> {
    let mut state: u32 = 0xDEAD_BEEF;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            if state % 4 == 0 { white } else { state & white }
        })
        .collect()
}
