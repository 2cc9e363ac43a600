//! Fixed-layout BMP headers.
//!
//! Every field is decoded at its documented byte offset with explicit
//! little-endian conversion, so nothing depends on struct layout.

use crate::error::FormatError;

/// `BM`, the signature every BMP file starts with.
pub const SIGNATURE: [u8; 2] = *b"BM";

/// Size in bytes of [`FileHeader`] on disk.
pub const FILE_HEADER_LEN: usize = 14;

/// Size in bytes of [`InfoHeader`] on disk (BITMAPINFOHEADER).
pub const INFO_HEADER_LEN: usize = 40;

/// Size in bytes of the [`ColorHeader`] fields read from V4/V5 info headers.
pub const COLOR_HEADER_LEN: usize = 20;

/// Smallest info header size (BITMAPV4HEADER) that carries a color header.
pub(crate) const V4_INFO_HEADER_LEN: u32 = 108;

fn le_u16(b: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([b[at], b[at + 1]])
}

fn le_u32(b: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

fn le_i32(b: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

/// The 14-byte file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    /// Total file size as recorded in the header. Informational only.
    pub file_size: u32,
    pub reserved: [u16; 2],
    /// Absolute offset of the pixel data from the start of the source.
    pub offset: u32,
}

impl FileHeader {
    /// Parse the file header, rejecting anything that is not signed `BM`.
    pub fn parse(raw: &[u8; FILE_HEADER_LEN]) -> Result<Self, FormatError> {
        let signature = [raw[0], raw[1]];
        if signature != SIGNATURE {
            return Err(FormatError::NotABitmap { found: signature });
        }
        Ok(Self {
            signature,
            file_size: le_u32(raw, 2),
            reserved: [le_u16(raw, 6), le_u16(raw, 8)],
            offset: le_u32(raw, 10),
        })
    }
}

/// Order in which stored rows map to display rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowOrder {
    /// Positive height: the first stored row is the bottom of the picture.
    BottomUp,
    /// Negative height: the first stored row is the top of the picture.
    TopDown,
}

/// The classic 40-byte device-independent bitmap header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    /// Declared header size. Only 40 is read; larger sizes are tolerated.
    pub size: u32,
    pub width: i32,
    /// Signed height; the sign selects the [`RowOrder`].
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    /// Compression code. Not validated, expected to be 0 (`BI_RGB`).
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    pub fn parse(raw: &[u8; INFO_HEADER_LEN]) -> Self {
        Self {
            size: le_u32(raw, 0),
            width: le_i32(raw, 4),
            height: le_i32(raw, 8),
            planes: le_u16(raw, 12),
            bit_count: le_u16(raw, 14),
            compression: le_u32(raw, 16),
            image_size: le_u32(raw, 20),
            x_pixels_per_meter: le_i32(raw, 24),
            y_pixels_per_meter: le_i32(raw, 28),
            colors_used: le_u32(raw, 32),
            colors_important: le_u32(raw, 36),
        }
    }

    pub fn row_order(&self) -> RowOrder {
        if self.height < 0 {
            RowOrder::TopDown
        } else {
            RowOrder::BottomUp
        }
    }

    /// Number of stored rows, regardless of [`RowOrder`].
    pub fn row_count(&self) -> u32 {
        self.height.unsigned_abs()
    }

    pub(crate) fn has_color_header(&self) -> bool {
        self.size >= V4_INFO_HEADER_LEN
    }
}

/// Channel masks and color space of BITMAPV4HEADER and later.
///
/// Carried along for callers; mask extraction never consults it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorHeader {
    pub red_mask: u32,
    pub green_mask: u32,
    pub blue_mask: u32,
    pub alpha_mask: u32,
    /// `0x73524742` ("sRGB") for the common case.
    pub color_space_type: u32,
}

impl ColorHeader {
    pub fn parse(raw: &[u8; COLOR_HEADER_LEN]) -> Self {
        Self {
            red_mask: le_u32(raw, 0),
            green_mask: le_u32(raw, 4),
            blue_mask: le_u32(raw, 8),
            alpha_mask: le_u32(raw, 12),
            color_space_type: le_u32(raw, 16),
        }
    }
}
