#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: i32, height: i32, bpp: u16, pixels: &[u8]) -> Vec<u8> {
    let mut bmp = vec![0u8; 54];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(54 + pixels.len() as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&bpp.to_le_bytes());
    bmp.extend_from_slice(pixels);
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 2x2 24-bit, rows of 6 bytes
    let rgb = [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff];
    fs::write(format!("{dir}/bmp24_2x2.bmp"), bmp(2, 2, 24, &rgb)).unwrap();

    // 1x1 24-bit with row padding
    fs::write(format!("{dir}/bmp24_1x1_padded.bmp"), bmp(1, 1, 24, &[0xff, 0, 0, 0])).unwrap();

    // 2x1 32-bit top-down
    let bgra = [0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0xff];
    fs::write(format!("{dir}/bmp32_2x1_topdown.bmp"), bmp(2, -1, 32, &bgra)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/bmp8.bin"), bmp(1, 1, 8, &[0, 0, 0, 0])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
