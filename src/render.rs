//! Text rendering of a decoded mask.

use std::io::{self, Write};

use crate::decode::DecodedImage;
use crate::header::RowOrder;
use crate::mask::WHITE;

/// Glyph for a white pixel.
pub const BLANK: char = ' ';

/// Glyph for any other pixel.
pub const INK: char = '#';

/// Stored rows in display order, top of the picture first.
fn display_rows(image: &DecodedImage) -> Box<dyn Iterator<Item = &[u8]> + '_> {
    let rows = image.mask().rows();
    match image.row_order() {
        RowOrder::BottomUp => Box::new(rows.rev()),
        RowOrder::TopDown => Box::new(rows),
    }
}

fn push_row(line: &mut String, row: &[u8]) {
    line.extend(row.iter().map(|&v| if v == WHITE { BLANK } else { INK }));
    line.push('\n');
}

/// Write the mask as text, one line per row, top of the picture first.
///
/// Every stored row is written, including row 0.
pub fn render<W: Write>(image: &DecodedImage, out: &mut W) -> io::Result<()> {
    let mut line = String::with_capacity(image.mask().width() + 1);
    for row in display_rows(image) {
        line.clear();
        push_row(&mut line, row);
        out.write_all(line.as_bytes())?;
    }
    out.flush()
}

/// Render into a `String`.
pub fn render_to_string(image: &DecodedImage) -> String {
    let mask = image.mask();
    let mut text = String::with_capacity(mask.len() + mask.height());
    for row in display_rows(image) {
        push_row(&mut text, row);
    }
    text
}
