use crate::error::FormatError;

/// Caps on what a single decode may allocate and read.
///
/// All fields default to `None` (no limit). Every cap is checked against the
/// header geometry before the mask is allocated or any pixel data is read.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    /// Applies to the number of stored rows, whatever the sign of the height.
    pub max_height: Option<u64>,
    /// Maximum `width * rows`. The mask holds one byte per pixel, so this is
    /// also the size of the one large allocation a decode makes.
    pub max_pixels: Option<u64>,
    /// Maximum number of pixel data bytes read from the source, row padding
    /// included.
    pub max_pixel_data_bytes: Option<u64>,
}

fn within(what: &str, value: u64, max: Option<u64>) -> Result<(), FormatError> {
    match max {
        Some(max) if value > max => Err(FormatError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    pub(crate) fn check(
        &self,
        width: u32,
        rows: u32,
        pixel_data_bytes: u64,
    ) -> Result<(), FormatError> {
        within("width", u64::from(width), self.max_width)?;
        within("height", u64::from(rows), self.max_height)?;
        within(
            "pixel count",
            u64::from(width) * u64::from(rows),
            self.max_pixels,
        )?;
        within("pixel data size", pixel_data_bytes, self.max_pixel_data_bytes)
    }
}
