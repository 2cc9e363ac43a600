//! BMP mask decoder for uncompressed 24-bit and 32-bit bitmaps.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use enough::Stop;
use log::{debug, trace, warn};

use crate::error::FormatError;
use crate::header::{
    COLOR_HEADER_LEN, ColorHeader, FILE_HEADER_LEN, FileHeader, INFO_HEADER_LEN, InfoHeader,
    RowOrder,
};
use crate::limits::Limits;
use crate::mask::{PixelMask, SET, WHITE};
use crate::reader::ByteReader;

/// Samples classified per read call.
const CHUNK_SAMPLES: usize = 1024;

/// Per-pixel sample encoding selected by `bit_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitDepth {
    /// 3 bytes per pixel, B G R.
    Bgr24,
    /// 4 bytes per pixel, B G R A.
    Bgra32,
}

impl BitDepth {
    pub fn from_bit_count(bit_count: u16) -> Result<Self, FormatError> {
        match bit_count {
            24 => Ok(Self::Bgr24),
            32 => Ok(Self::Bgra32),
            other => Err(FormatError::UnsupportedBitDepth(other)),
        }
    }

    /// Bytes per sample.
    pub fn sample_width(self) -> usize {
        match self {
            Self::Bgr24 => 3,
            Self::Bgra32 => 4,
        }
    }

    /// A sample equal to this value, read as a little-endian integer, is white.
    pub fn white(self) -> u32 {
        match self {
            Self::Bgr24 => 0x00FF_FFFF,
            Self::Bgra32 => 0xFFFF_FFFF,
        }
    }

    fn classify(self, sample: &[u8]) -> u8 {
        let mut le = [0u8; 4];
        le[..sample.len()].copy_from_slice(sample);
        if u32::from_le_bytes(le) == self.white() {
            WHITE
        } else {
            SET
        }
    }
}

/// How stored rows are laid out in the pixel data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowPadding {
    /// Samples follow each other with no gap between rows.
    ///
    /// Matches files whose row size (`width * bytes per sample`) is already
    /// a multiple of 4. Other files decode with a skewed mask.
    #[default]
    Packed,

    /// Each stored row is padded to a multiple of 4 bytes, as the BMP
    /// format requires. The padding bytes are skipped.
    Aligned,
}

impl RowPadding {
    fn bytes_after(self, width: usize, depth: BitDepth) -> usize {
        let rem = (width % 4) * depth.sample_width() % 4;
        match self {
            Self::Packed => 0,
            Self::Aligned => (4 - rem) % 4,
        }
    }
}

/// A decoded bitmap: its headers and the white/non-white mask.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub file_header: FileHeader,
    pub info_header: InfoHeader,
    /// Present when the info header declares a V4 or V5 size.
    pub color_header: Option<ColorHeader>,
    mask: PixelMask,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.mask.width() as u32
    }

    /// Number of stored rows (absolute value of the header height).
    pub fn height(&self) -> u32 {
        self.mask.height() as u32
    }

    pub fn bit_count(&self) -> u16 {
        self.info_header.bit_count
    }

    pub fn row_order(&self) -> RowOrder {
        self.info_header.row_order()
    }

    pub fn mask(&self) -> &PixelMask {
        &self.mask
    }

    pub fn into_mask(self) -> PixelMask {
        self.mask
    }
}

/// Builder for a decode operation.
///
/// ```no_run
/// use bmpmask::{DecodeRequest, Limits, RowPadding, Unstoppable};
///
/// let limits = Limits {
///     max_pixels: Some(16 * 1024 * 1024),
///     ..Limits::default()
/// };
/// let image = DecodeRequest::new()
///     .with_limits(&limits)
///     .with_row_padding(RowPadding::Aligned)
///     .decode_file("picture.bmp", Unstoppable)?;
/// println!("{} non-white pixels", image.mask().count_set());
/// # Ok::<(), bmpmask::FormatError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct DecodeRequest<'a> {
    limits: Option<&'a Limits>,
    row_padding: RowPadding,
}

impl<'a> DecodeRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_row_padding(mut self, row_padding: RowPadding) -> Self {
        self.row_padding = row_padding;
        self
    }

    /// Decode from a seekable source positioned at the start of the file.
    pub fn decode<R: Read + Seek>(
        &self,
        source: R,
        stop: impl Stop,
    ) -> Result<DecodedImage, FormatError> {
        self.decode_inner(ByteReader::new(source), &stop)
    }

    pub fn decode_bytes(&self, data: &[u8], stop: impl Stop) -> Result<DecodedImage, FormatError> {
        self.decode(Cursor::new(data), stop)
    }

    pub fn decode_file(
        &self,
        path: impl AsRef<Path>,
        stop: impl Stop,
    ) -> Result<DecodedImage, FormatError> {
        let path = path.as_ref();
        debug!("Opening {}", path.display());
        let file = File::open(path).map_err(FormatError::Io)?;
        self.decode(BufReader::new(file), stop)
    }

    fn decode_inner<R: Read + Seek>(
        &self,
        mut bytes: ByteReader<R>,
        stop: &dyn Stop,
    ) -> Result<DecodedImage, FormatError> {
        let (file_header, info_header) = read_headers_from(&mut bytes)?;

        let depth = BitDepth::from_bit_count(info_header.bit_count)?;
        trace!("Sample format: {:?}", depth);

        if info_header.compression != 0 {
            warn!(
                "Compression code {} ignored, reading samples as uncompressed",
                info_header.compression
            );
        }

        // The color header sits between the info header and the pixel data,
        // so it only exists when the pixel offset leaves room for it.
        let color_header = if info_header.has_color_header()
            && file_header.offset as usize >= FILE_HEADER_LEN + INFO_HEADER_LEN + COLOR_HEADER_LEN
        {
            let color = ColorHeader::parse(&bytes.read_fixed_bytes::<COLOR_HEADER_LEN>()?);
            trace!("Color header: {:?}", color);
            Some(color)
        } else {
            None
        };

        if info_header.width < 0 {
            return Err(FormatError::NegativeWidth(info_header.width));
        }
        let width = info_header.width.unsigned_abs();
        let height = info_header.row_count();
        let too_large = FormatError::DimensionsTooLarge { width, height };

        let sample_width = depth.sample_width();
        let padding = self.row_padding.bytes_after(width as usize, depth);
        let row_bytes = u64::from(width) * sample_width as u64 + padding as u64;
        let Some(data_bytes) = row_bytes.checked_mul(u64::from(height)) else {
            return Err(too_large);
        };

        if let Some(limits) = self.limits {
            limits.check(width, height, data_bytes)?;
        }
        let Some(len) = (width as usize).checked_mul(height as usize) else {
            return Err(too_large);
        };

        stop.check()?;
        if len == 0 {
            trace!("No pixels to read");
            return Ok(DecodedImage {
                file_header,
                info_header,
                color_header,
                mask: PixelMask::try_new(width as usize, height as usize, 0).ok_or(too_large)?,
            });
        }

        // Padding after the last row is commonly left out.
        let needed = data_bytes - padding as u64;
        let available = bytes
            .stream_len()?
            .saturating_sub(u64::from(file_header.offset));
        if needed > available {
            debug!("Pixel data needs {needed} bytes, source has {available}");
            return Err(FormatError::Truncated);
        }

        let mut mask =
            PixelMask::try_new(width as usize, height as usize, len).ok_or(too_large)?;

        debug!("Seeking to pixel data at offset {}", file_header.offset);
        bytes.set_position(u64::from(file_header.offset))?;

        if self.row_padding == RowPadding::Packed
            && RowPadding::Aligned.bytes_after(width as usize, depth) != 0
        {
            debug!(
                "Row size {} bytes is not 4-byte aligned, reading rows without padding",
                width as usize * sample_width
            );
        }

        let mut chunk = [0u8; CHUNK_SAMPLES * 4];
        for row in 0..height as usize {
            if row % 16 == 0 {
                stop.check()?;
            }
            for out in mask.row_mut(row).chunks_mut(CHUNK_SAMPLES) {
                let raw = &mut chunk[..out.len() * sample_width];
                bytes.read_exact_bytes(raw)?;
                for (value, sample) in out.iter_mut().zip(raw.chunks_exact(sample_width)) {
                    *value = depth.classify(sample);
                }
            }
            bytes.skip(padding)?;
        }

        Ok(DecodedImage {
            file_header,
            info_header,
            color_header,
            mask,
        })
    }
}

fn read_headers_from<R: Read + Seek>(
    bytes: &mut ByteReader<R>,
) -> Result<(FileHeader, InfoHeader), FormatError> {
    let file_header = FileHeader::parse(&bytes.read_fixed_bytes::<FILE_HEADER_LEN>()?)?;
    let info_header = InfoHeader::parse(&bytes.read_fixed_bytes::<INFO_HEADER_LEN>()?);

    trace!("File size: {}", file_header.file_size);
    trace!("Pixel offset: {}", file_header.offset);
    trace!("Header size: {}", info_header.size);
    trace!("Width: {}", info_header.width);
    trace!("Height: {}", info_header.height);
    trace!("Bit depth: {}", info_header.bit_count);

    Ok((file_header, info_header))
}

/// Read and validate the file header and info header without touching pixel data.
pub fn read_headers<R: Read + Seek>(source: R) -> Result<(FileHeader, InfoHeader), FormatError> {
    read_headers_from(&mut ByteReader::new(source))
}

/// Decode a mask from a seekable source with default options.
pub fn decode<R: Read + Seek>(source: R, stop: impl Stop) -> Result<DecodedImage, FormatError> {
    DecodeRequest::new().decode(source, stop)
}

/// Decode a mask from an in-memory BMP with default options.
pub fn decode_bytes(data: &[u8], stop: impl Stop) -> Result<DecodedImage, FormatError> {
    DecodeRequest::new().decode_bytes(data, stop)
}

/// Decode a mask from a file with default options.
pub fn decode_file(path: impl AsRef<Path>, stop: impl Stop) -> Result<DecodedImage, FormatError> {
    DecodeRequest::new().decode_file(path, stop)
}
