#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the headers claim
    let limits = bmpmask::Limits {
        max_pixels: Some(1 << 24),
        ..Default::default()
    };
    for padding in [bmpmask::RowPadding::Packed, bmpmask::RowPadding::Aligned] {
        if let Ok(image) = bmpmask::DecodeRequest::new()
            .with_limits(&limits)
            .with_row_padding(padding)
            .decode_bytes(data, enough::Unstoppable)
        {
            let _ = bmpmask::render_to_string(&image);
        }
    }
    let _ = bmpmask::read_headers(std::io::Cursor::new(data));
});
