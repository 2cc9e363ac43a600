/// Value stored for a pixel whose sample is all ones.
pub const WHITE: u8 = 0;

/// Value stored for every other pixel.
pub const SET: u8 = 1;

/// Binary classification of every pixel, in the order rows were stored.
///
/// Index `row * width + column`; row 0 is the first row read from the file,
/// which is the bottom of the picture for bottom-up bitmaps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelMask {
    bits: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelMask {
    /// Allocate a mask of `len` (`width * height`) white pixels, or `None`
    /// when the allocator refuses.
    pub(crate) fn try_new(width: usize, height: usize, len: usize) -> Option<Self> {
        let mut bits = Vec::new();
        bits.try_reserve_exact(len).ok()?;
        bits.resize(len, WHITE);
        Some(Self {
            bits,
            width,
            height,
        })
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [u8] {
        let start = row * self.width;
        &mut self.bits[start..start + self.width]
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of stored rows.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// All mask values, row-major in read order.
    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// Mask value at `row`, `column`, or `None` when out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        if column >= self.width || row >= self.height {
            return None;
        }
        self.bits.get(row * self.width + column).copied()
    }

    /// One stored row.
    ///
    /// # Panics
    /// If `row >= self.height()`.
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.width;
        &self.bits[start..start + self.width]
    }

    /// Stored rows in read order. A zero-width mask has no rows.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[u8]> + ExactSizeIterator {
        self.bits.chunks_exact(self.width.max(1))
    }

    /// Number of non-white pixels.
    pub fn count_set(&self) -> usize {
        self.bits.iter().filter(|&&b| b == SET).count()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bits
    }

    /// Zero-copy view as an [`imgref::ImgRef`], one `u8` per pixel.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, u8> {
        imgref::ImgRef::new(&self.bits, self.width, self.height)
    }
}
