//! # bmpmask
//!
//! Decodes uncompressed BMP files into a binary pixel mask and renders the
//! mask as text.
//!
//! Every pixel is classified as white (all sample bits set) or not. Nothing
//! else about its color survives decoding.
//!
//! ## Supported Formats
//!
//! - 24-bit BGR and 32-bit BGRA, uncompressed
//! - Bottom-up (positive height) and top-down (negative height) row order
//! - BITMAPINFOHEADER, with the channel masks of V4/V5 headers kept for
//!   inspection
//!
//! ## Non-Goals
//!
//! - RLE and other compressed variants
//! - Palette images and bit depths other than 24 and 32
//! - Encoding
//! - Color management or grayscale thresholds
//!
//! ## Row Padding
//!
//! By default rows are read back to back with no padding skipped, which is
//! only correct when `width * bytes per sample` is a multiple of 4. Use
//! [`RowPadding::Aligned`] for files that pad rows to 4 bytes.
//!
//! ## Usage
//!
//! ```no_run
//! use bmpmask::{decode_bytes, render_to_string, Unstoppable};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! let image = decode_bytes(data, Unstoppable)?;
//! println!("{} bytes", image.file_header.file_size);
//! println!("{}x{}px {}-bit", image.width(), image.height(), image.bit_count());
//! print!("{}", render_to_string(&image));
//! # Ok::<(), bmpmask::FormatError>(())
//! ```

#![forbid(unsafe_code)]

mod decode;
mod error;
mod header;
mod limits;
mod mask;
mod reader;
mod render;

// Re-exports
pub use decode::{
    BitDepth, DecodeRequest, DecodedImage, RowPadding, decode, decode_bytes, decode_file,
    read_headers,
};
pub use enough::{Stop, Unstoppable};
pub use error::FormatError;
pub use header::{
    COLOR_HEADER_LEN, ColorHeader, FILE_HEADER_LEN, FileHeader, INFO_HEADER_LEN, InfoHeader,
    RowOrder, SIGNATURE,
};
pub use limits::Limits;
pub use mask::{PixelMask, SET, WHITE};
pub use render::{BLANK, INK, render, render_to_string};
