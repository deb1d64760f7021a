use std::path::Path;

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;
const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
const BITS_PER_PIXEL: u16 = 32;
const BMP_BYTES_PER_PIXEL: usize = 4;

/// Encodes `buffer` as an uncompressed 32-bit bitmap.
///
/// Rows are stored bottom to top as BGRA with opaque alpha; 32-bit rows need
/// no padding.
#[must_use]
pub fn encode_bmp(buffer: &PixelBuffer) -> Vec<u8> {
    let width = buffer.resolution().width();
    let height = buffer.resolution().height();
    let row_len = width as usize * BYTES_PER_PIXEL;
    let image_len = buffer.resolution().pixel_count() * BMP_BYTES_PER_PIXEL;
    let image_size = u32::try_from(image_len).unwrap_or(u32::MAX);
    let file_size = PIXEL_DATA_OFFSET.saturating_add(image_size);

    let mut out = Vec::with_capacity(PIXEL_DATA_OFFSET as usize + image_len);

    // file header
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&PIXEL_DATA_OFFSET.to_le_bytes());

    // info header
    out.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&image_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 16]);

    for row in buffer.buffer().chunks(row_len).rev() {
        for rgb in row.chunks(BYTES_PER_PIXEL) {
            out.extend_from_slice(&[rgb[2], rgb[1], rgb[0], 0xff]);
        }
    }

    out
}

pub fn write_bmp(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let filepath = filepath.as_ref();
    std::fs::write(filepath, encode_bmp(buffer))?;

    log::info!(
        "wrote {}x{} bitmap to {}",
        buffer.resolution().width(),
        buffer.resolution().height(),
        filepath.display()
    );

    Ok(())
}
