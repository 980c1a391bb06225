//! Raw pixel-map output buffer.

use std::io::{self, Write};
use std::slice::ChunksMut;

/// A square RGB byte image.
///
/// Rows are stored top-of-scene first (the renderer flips vertically as
/// it writes), three bytes per pixel. The buffer is allocated once and
/// reused across benchmark passes.
pub struct ImageBuffer {
    size: usize,
    data: Vec<u8>,
}

impl ImageBuffer {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            data: vec![0; 3 * size * size],
        }
    }

    /// Side length in pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw bytes, row-major RGB.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable per-row access, first buffer row first.
    pub(crate) fn rows_mut(&mut self) -> ChunksMut<'_, u8> {
        self.data.chunks_mut(3 * self.size)
    }

    /// Write the buffer as a binary P6 pixel map.
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "P6 {} {} 255 ", self.size, self.size)?;
        writer.write_all(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ppm_header_and_payload() {
        let img = ImageBuffer::new(4);
        let mut out = Vec::new();
        img.write_ppm(&mut out).unwrap();

        assert!(out.starts_with(b"P6 4 4 255 "));
        assert_eq!(out.len(), b"P6 4 4 255 ".len() + 4 * 4 * 3);
    }

    #[test]
    fn buffer_starts_black() {
        let img = ImageBuffer::new(2);
        assert!(img.data().iter().all(|&b| b == 0));
        assert_eq!(img.data().len(), 12);
    }

    #[test]
    fn rows_cover_the_buffer_exactly() {
        let mut img = ImageBuffer::new(3);
        let rows: Vec<usize> = img.rows_mut().map(|r| r.len()).collect();
        assert_eq!(rows, vec![9, 9, 9]);
    }
}
