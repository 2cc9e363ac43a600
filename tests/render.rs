mod common;

use bmpmask::*;
use common::{WHITE24, WHITE32, bmp};

#[test]
fn bottom_up_prints_last_stored_row_first() {
    let data = bmp(2, 2, 24, &[0xFF_FFFF, 0xFF_FFFF, 0x00_0000, 0xFF_0000]);
    let image = decode_bytes(&data, Unstoppable).unwrap();
    assert_eq!(render_to_string(&image), "##\n  \n");
}

#[test]
fn every_row_is_printed() {
    // A single stored row is also row 0.
    let data = bmp(3, 1, 32, &[0, WHITE32, 0]);
    let image = decode_bytes(&data, Unstoppable).unwrap();
    assert_eq!(render_to_string(&image), "# #\n");
}

#[test]
fn top_down_prints_in_storage_order() {
    let data = bmp(2, -2, 24, &[0xFF_FFFF, 0xFF_FFFF, 0x00_0000, 0xFF_0000]);
    let image = decode_bytes(&data, Unstoppable).unwrap();
    assert_eq!(render_to_string(&image), "  \n##\n");
}

#[test]
fn glyphs_follow_mask_values() {
    let (w, h) = (4, 3);
    let samples: Vec<u32> = (0..w * h)
        .map(|i| if (i % w + i / w) % 2 == 0 { WHITE24 } else { 0x80_8080 })
        .collect();
    let data = bmp(w as i32, h as i32, 24, &samples);
    let image = decode_bytes(&data, Unstoppable).unwrap();

    let text = render_to_string(&image);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), h);
    for (display_row, line) in lines.iter().enumerate() {
        let stored_row = image.mask().row(h - 1 - display_row);
        let expected: String = stored_row
            .iter()
            .map(|&v| if v == WHITE { BLANK } else { INK })
            .collect();
        assert_eq!(*line, expected);
    }
}

#[test]
fn empty_mask_renders_nothing() {
    let data = bmp(0, 3, 24, &[]);
    let image = decode_bytes(&data, Unstoppable).unwrap();
    assert_eq!(render_to_string(&image), "");
}

#[test]
fn render_writes_to_any_writer() {
    let data = bmp(4, 2, 32, &[WHITE32, 0, 0, WHITE32, 0, WHITE32, WHITE32, 0]);
    let image = decode_bytes(&data, Unstoppable).unwrap();

    let mut out = Vec::new();
    render(&image, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), render_to_string(&image));
    assert_eq!(render_to_string(&image), "#  #\n ## \n");
}
