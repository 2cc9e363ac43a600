use std::io;

use enough::StopReason;

/// Errors from BMP mask decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    #[error("not a BMP file: signature {found:02x?}, expected \"BM\"")]
    NotABitmap { found: [u8; 2] },

    #[error("unsupported bit depth {0}, only 24 and 32 are supported")]
    UnsupportedBitDepth(u16),

    #[error("unexpected end of input")]
    Truncated,

    #[error("negative width {0}")]
    NegativeWidth(i32),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("i/o error reading bitmap")]
    Io(#[source] io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<io::Error> for FormatError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            FormatError::Truncated
        } else {
            FormatError::Io(e)
        }
    }
}

impl From<StopReason> for FormatError {
    fn from(r: StopReason) -> Self {
        FormatError::Cancelled(r)
    }
}
